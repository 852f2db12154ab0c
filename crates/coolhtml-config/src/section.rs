//! Per-section configuration records.
//!
//! Each record is read from loose JSON by `from_value`, which resolves key
//! synonyms and applies defaults once, so the templates only ever see
//! canonical fields. `Default` is the record for an absent configuration and
//! `From<&str>` is the bare-string shorthand.

use crate::common::{label, shorthand, Background, Button, Link};
use coolhtml_markup::loose::Fields;
use coolhtml_markup::Content;
use serde::Serialize;
use serde_json::Value;

macro_rules! impl_defaults {
    ($($record:ty),* $(,)?) => {
        $(
            impl Default for $record {
                fn default() -> Self {
                    Self::from_value(&Value::Null)
                }
            }

            impl From<&str> for $record {
                fn from(shorthand: &str) -> Self {
                    Self::from_value(&Value::String(shorthand.to_string()))
                }
            }

            impl From<&Value> for $record {
                fn from(value: &Value) -> Self {
                    Self::from_value(value)
                }
            }
        )*
    };
}

impl_defaults!(
    NavConfig,
    HeroConfig,
    FeaturesConfig,
    SectionConfig,
    PricingConfig,
    TestimonialsConfig,
    ContactConfig,
    FooterConfig,
);

// =========================================================================
// Navigation bar
// =========================================================================

/// Navigation bar. Shorthand: title.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavConfig {
    pub title: String,
    pub logo: Option<String>,
    pub dark: bool,
    pub fixed: bool,
    pub links: Vec<Link>,
    pub button: Option<Button>,
}

impl NavConfig {
    pub fn from_value(value: &Value) -> Self {
        let value = shorthand(value, "title");
        let fields = Fields::new(&value);
        let dark = fields.flag_unless_false("dark");
        // The button contrasts with the bar unless a variant is given.
        let button_variant = if dark { "light" } else { "primary" };

        Self {
            title: fields.text_or(&["title", "t"], "CoolHTML"),
            logo: fields.text(&["logo"]),
            dark,
            fixed: fields.flag(&["fixed"]),
            links: match fields.raw("links") {
                Some(Value::Array(items)) => Link::list(items),
                _ => Vec::new(),
            },
            button: fields
                .get(&["button", "btn"])
                .map(|b| Button::from_value(b, button_variant, "Button")),
        }
    }
}

// =========================================================================
// Hero
// =========================================================================

/// Hero banner. Shorthand: title.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroConfig {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub align: String,
    pub dark: bool,
    pub background: Option<Background>,
    pub content: Content,
    pub buttons: Vec<Button>,
}

impl HeroConfig {
    pub fn from_value(value: &Value) -> Self {
        let value = shorthand(value, "title");
        let fields = Fields::new(&value);

        Self {
            title: fields.text(&["title", "t"]),
            subtitle: fields.text(&["subtitle", "st"]),
            align: fields.text_or(&["align"], "center"),
            dark: fields.flag_unless_false("dark"),
            background: Background::lookup(&fields),
            content: fields
                .get(&["content", "text"])
                .map(Content::from_value)
                .unwrap_or_default(),
            buttons: fields
                .list(&["buttons", "btns"])
                .iter()
                .map(|b| Button::from_value(b, "primary", ""))
                .collect(),
        }
    }
}

// =========================================================================
// Features grid
// =========================================================================

/// Feature grid. Shorthand: title.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeaturesConfig {
    pub title: String,
    pub subtitle: Option<String>,
    /// Requested column count; the grid never shows more than four.
    pub columns: u64,
    pub items: Vec<Feature>,
}

/// One cell of the feature grid. Shorthand: title.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feature {
    pub title: String,
    pub text: String,
    pub icon: Option<Icon>,
}

/// A feature icon: an icon-font glyph (`bi-*`) or an image URL.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Icon {
    Glyph { class: String, color: String },
    Image { url: String },
}

impl FeaturesConfig {
    pub fn from_value(value: &Value) -> Self {
        let value = shorthand(value, "title");
        let fields = Fields::new(&value);

        Self {
            title: fields.text_or(&["title", "t"], "Features"),
            subtitle: fields.text(&["subtitle", "st"]),
            columns: fields.count(&["columns", "cols"]).unwrap_or(3),
            items: fields
                .list(&["items", "list"])
                .iter()
                .map(Feature::from_value)
                .collect(),
        }
    }
}

impl Feature {
    pub fn from_value(value: &Value) -> Self {
        let value = shorthand(value, "title");
        let fields = Fields::new(&value);
        let icon = fields.text(&["icon"]).map(|icon| {
            if icon.starts_with("bi-") {
                Icon::Glyph {
                    class: icon,
                    color: fields.text_or(&["iconColor"], "primary"),
                }
            } else {
                Icon::Image { url: icon }
            }
        });

        Self {
            title: fields.text_or(&["title", "t"], ""),
            text: fields.text_or(&["text", "desc"], ""),
            icon,
        }
    }
}

// =========================================================================
// Generic section
// =========================================================================

/// Free-form content section. Shorthand: content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionConfig {
    /// Element id, for deep links.
    pub id: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub background: Option<Background>,
    pub dark: bool,
    pub align: Option<String>,
    pub content: Content,
}

impl SectionConfig {
    pub fn from_value(value: &Value) -> Self {
        let value = shorthand(value, "content");
        let fields = Fields::new(&value);

        Self {
            id: fields.text(&["id"]),
            title: fields.text(&["title", "t"]),
            subtitle: fields.text(&["subtitle", "st"]),
            background: Background::lookup(&fields),
            dark: fields.flag_if_true("dark"),
            align: fields.text(&["align"]),
            content: fields
                .get(&["content", "text"])
                .map(Content::from_value)
                .unwrap_or_default(),
        }
    }
}

// =========================================================================
// Pricing table
// =========================================================================

/// Pricing table. Shorthand: title.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingConfig {
    pub title: String,
    pub subtitle: String,
    pub background: Option<Background>,
    pub plans: Vec<Plan>,
}

/// One pricing plan. Shorthand: title.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plan {
    pub title: String,
    pub price: String,
    pub period: String,
    pub featured: bool,
    pub features: Vec<PlanFeature>,
    pub url: String,
    pub button: String,
}

/// A feature line of a plan. Shorthand: text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanFeature {
    pub text: String,
    pub included: bool,
}

impl PricingConfig {
    pub fn from_value(value: &Value) -> Self {
        let value = shorthand(value, "title");
        let fields = Fields::new(&value);

        Self {
            title: fields.text_or(&["title", "t"], "Pricing"),
            subtitle: fields.text_or(&["subtitle", "st"], "Choose your plan"),
            background: Background::lookup(&fields),
            plans: fields
                .list(&["plans", "items"])
                .iter()
                .map(Plan::from_value)
                .collect(),
        }
    }
}

impl Plan {
    pub fn from_value(value: &Value) -> Self {
        let value = shorthand(value, "title");
        let fields = Fields::new(&value);

        Self {
            title: fields.text_or(&["title", "t"], ""),
            price: fields.text_or(&["price"], ""),
            period: fields.text_or(&["period"], ""),
            featured: fields.flag(&["featured", "primary"]),
            features: fields
                .list(&["features"])
                .iter()
                .map(PlanFeature::from_value)
                .collect(),
            url: fields.text_or(&["url", "href"], "#"),
            button: label(&fields, &["button", "btn"], "Sign up"),
        }
    }
}

impl PlanFeature {
    pub fn from_value(value: &Value) -> Self {
        let value = shorthand(value, "text");
        let fields = Fields::new(&value);
        Self {
            text: fields.text_or(&["text", "txt"], ""),
            included: fields.flag_unless_false("included"),
        }
    }
}

// =========================================================================
// Testimonials
// =========================================================================

/// How testimonials are laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TestimonialLayout {
    #[default]
    Grid,
    Carousel,
}

/// Testimonials. Shorthand: title.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestimonialsConfig {
    pub title: String,
    pub subtitle: String,
    pub background: Option<Background>,
    pub layout: TestimonialLayout,
    pub items: Vec<Testimonial>,
}

/// One testimonial. Shorthand: quote.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Testimonial {
    pub quote: String,
    pub name: String,
    pub role: String,
    pub image: Option<String>,
}

impl TestimonialsConfig {
    pub fn from_value(value: &Value) -> Self {
        let value = shorthand(value, "title");
        let fields = Fields::new(&value);
        let layout = match fields.text(&["type"]).as_deref() {
            Some("carousel") => TestimonialLayout::Carousel,
            _ => TestimonialLayout::Grid,
        };

        Self {
            title: fields.text_or(&["title", "t"], "Testimonials"),
            subtitle: fields.text_or(&["subtitle", "st"], ""),
            background: Background::lookup(&fields),
            layout,
            items: fields
                .list(&["items", "list"])
                .iter()
                .map(Testimonial::from_value)
                .collect(),
        }
    }
}

impl Testimonial {
    pub fn from_value(value: &Value) -> Self {
        let value = shorthand(value, "text");
        let fields = Fields::new(&value);
        Self {
            quote: fields.text_or(&["text", "quote"], ""),
            name: fields.text_or(&["name", "author"], ""),
            // `title` is the author's job title here, not a heading.
            role: fields.text_or(&["title", "role"], ""),
            image: fields.text(&["image", "img"]),
        }
    }
}

// =========================================================================
// Contact
// =========================================================================

/// Contact form. Shorthand: title.
///
/// The form is static markup; submission is left to the embedding page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactConfig {
    pub title: String,
    pub subtitle: String,
    pub text: Content,
    pub info: ContactInfo,
    /// Embeddable map URL.
    pub map: Option<String>,
    pub button: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactInfo {
    pub address: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl ContactInfo {
    pub fn is_empty(&self) -> bool {
        self.address.is_none() && self.email.is_none() && self.phone.is_none()
    }
}

impl ContactConfig {
    pub fn from_value(value: &Value) -> Self {
        let value = shorthand(value, "title");
        let fields = Fields::new(&value);
        let info = fields.object(&["info"]);

        Self {
            title: fields.text_or(&["title", "t"], "Contact Us"),
            subtitle: fields.text_or(&["subtitle", "st"], ""),
            text: fields
                .get(&["text", "txt"])
                .map(Content::from_value)
                .unwrap_or_default(),
            info: ContactInfo {
                address: info.text(&["address"]),
                email: info.text(&["email"]),
                phone: info.text(&["phone"]),
            },
            map: fields.text(&["map"]),
            button: label(&fields, &["button", "btn"], "Send"),
        }
    }
}

// =========================================================================
// Footer
// =========================================================================

/// Page footer. Shorthand: text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FooterConfig {
    pub dark: bool,
    pub title: String,
    pub text: String,
    pub links: Vec<Link>,
    pub social: Vec<SocialLink>,
    pub newsletter: Option<Newsletter>,
    /// Defaults to the current year's notice at render time.
    pub copyright: Option<String>,
}

/// An icon-font social link. Shorthand: icon.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SocialLink {
    /// Icon name without the `bi-` prefix, e.g. `github`.
    pub icon: String,
    pub url: String,
    pub name: String,
}

/// Newsletter sign-up block. Static markup like the contact form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Newsletter {
    pub title: String,
    pub text: String,
    pub button: String,
}

impl FooterConfig {
    pub fn from_value(value: &Value) -> Self {
        let value = shorthand(value, "text");
        let fields = Fields::new(&value);

        Self {
            dark: fields.flag_unless_false("dark"),
            title: fields.text_or(&["title", "t"], ""),
            text: fields.text_or(&["text", "txt"], ""),
            links: Link::list(fields.list(&["links"])),
            social: fields
                .list(&["social"])
                .iter()
                .map(SocialLink::from_value)
                .collect(),
            newsletter: fields.get(&["form", "newsletter"]).map(Newsletter::from_value),
            copyright: fields.text(&["copyright"]),
        }
    }
}

impl SocialLink {
    pub fn from_value(value: &Value) -> Self {
        let value = shorthand(value, "icon");
        let fields = Fields::new(&value);
        Self {
            icon: fields.text_or(&["icon"], ""),
            url: fields.text_or(&["url", "href"], "#"),
            name: fields.text_or(&["name"], ""),
        }
    }
}

impl Newsletter {
    pub fn from_value(value: &Value) -> Self {
        let fields = Fields::new(value);
        Self {
            title: fields.text_or(&["title", "t"], "Newsletter"),
            text: fields.text_or(&["text", "txt"], "Subscribe for updates"),
            button: label(&fields, &["button", "btn"], "Subscribe"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    // =========================================================================
    // Defaults
    // =========================================================================

    #[test]
    fn test_nav_defaults() {
        let nav = NavConfig::default();
        assert_eq!(nav.title, "CoolHTML");
        assert!(nav.dark);
        assert!(!nav.fixed);
        assert!(nav.links.is_empty());
        assert!(nav.button.is_none());
    }

    #[test]
    fn test_hero_defaults() {
        let hero = HeroConfig::default();
        assert_eq!(hero.title, None);
        assert_eq!(hero.align, "center");
        assert!(hero.dark);
        assert!(hero.content.is_empty());
    }

    #[test]
    fn test_section_dark_is_opt_in() {
        assert!(!SectionConfig::default().dark);
        assert!(!SectionConfig::from_value(&json!({ "dark": 1 })).dark);
        assert!(SectionConfig::from_value(&json!({ "dark": true })).dark);
    }

    #[test]
    fn test_titles_default_per_section() {
        assert_eq!(FeaturesConfig::default().title, "Features");
        assert_eq!(PricingConfig::default().title, "Pricing");
        assert_eq!(PricingConfig::default().subtitle, "Choose your plan");
        assert_eq!(TestimonialsConfig::default().title, "Testimonials");
        assert_eq!(ContactConfig::default().title, "Contact Us");
        assert_eq!(ContactConfig::default().button, "Send");
    }

    // =========================================================================
    // Shorthand and synonyms
    // =========================================================================

    #[test]
    fn test_string_shorthand_targets() {
        assert_eq!(NavConfig::from("Acme").title, "Acme");
        assert_eq!(HeroConfig::from("Hi").title.as_deref(), Some("Hi"));
        assert_eq!(SectionConfig::from("Body").content, Content::Text("Body".into()));
        assert_eq!(FooterConfig::from("Bye").text, "Bye");
    }

    #[test]
    fn test_title_beats_t() {
        let hero = HeroConfig::from_value(&json!({ "title": "Long", "t": "Short" }));
        assert_eq!(hero.title.as_deref(), Some("Long"));
    }

    #[test]
    fn test_t_used_when_title_missing() {
        let pricing = PricingConfig::from_value(&json!({ "t": "Plans" }));
        assert_eq!(pricing.title, "Plans");
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    #[test]
    fn test_nav_button_variant_follows_dark() {
        let dark = NavConfig::from_value(&json!({ "btn": { "text": "Login" } }));
        assert_eq!(dark.button.unwrap().variant, "light");

        let light = NavConfig::from_value(&json!({ "dark": false, "btn": {} }));
        assert_eq!(light.button.unwrap().variant, "primary");

        let explicit = NavConfig::from_value(&json!({ "btn": { "type": "warning" } }));
        assert_eq!(explicit.button.unwrap().variant, "warning");
    }

    #[test]
    fn test_nav_links_must_be_array() {
        let nav = NavConfig::from_value(&json!({ "links": "Home" }));
        assert!(nav.links.is_empty());
    }

    // =========================================================================
    // Features
    // =========================================================================

    #[test]
    fn test_feature_icons() {
        let features = FeaturesConfig::from_value(&json!({
            "items": [
                { "title": "A", "icon": "bi-star", "iconColor": "danger" },
                { "title": "B", "icon": "/b.svg" },
                "C"
            ]
        }));
        assert_eq!(
            features.items[0].icon,
            Some(Icon::Glyph { class: "bi-star".into(), color: "danger".into() })
        );
        assert_eq!(features.items[1].icon, Some(Icon::Image { url: "/b.svg".into() }));
        assert_eq!(features.items[2].title, "C");
        assert_eq!(features.items[2].icon, None);
    }

    #[test]
    fn test_feature_columns() {
        assert_eq!(FeaturesConfig::default().columns, 3);
        assert_eq!(FeaturesConfig::from_value(&json!({ "cols": 2 })).columns, 2);
        assert_eq!(FeaturesConfig::from_value(&json!({ "columns": 0 })).columns, 3);
    }

    // =========================================================================
    // Pricing
    // =========================================================================

    #[test]
    fn test_plan_features_included_by_default() {
        let plan = Plan::from_value(&json!({
            "title": "Pro",
            "features": ["Support", { "text": "SLA", "included": false }]
        }));
        assert!(plan.features[0].included);
        assert_eq!(plan.features[0].text, "Support");
        assert!(!plan.features[1].included);
    }

    #[test]
    fn test_plan_featured_synonym() {
        assert!(Plan::from_value(&json!({ "primary": true })).featured);
        assert_eq!(Plan::from_value(&json!({})).button, "Sign up");
    }

    // =========================================================================
    // Testimonials, contact, footer
    // =========================================================================

    #[test]
    fn test_testimonial_layout() {
        let carousel = TestimonialsConfig::from_value(&json!({ "type": "carousel" }));
        assert_eq!(carousel.layout, TestimonialLayout::Carousel);
        let other = TestimonialsConfig::from_value(&json!({ "type": "masonry" }));
        assert_eq!(other.layout, TestimonialLayout::Grid);
    }

    #[test]
    fn test_testimonial_synonyms() {
        let item = Testimonial::from_value(&json!({ "quote": "Q", "author": "A", "role": "CTO" }));
        assert_eq!(item.quote, "Q");
        assert_eq!(item.name, "A");
        assert_eq!(item.role, "CTO");
    }

    #[test]
    fn test_contact_info() {
        let contact = ContactConfig::from_value(&json!({ "info": { "email": "a@b.c" } }));
        assert_eq!(contact.info.email.as_deref(), Some("a@b.c"));
        assert!(!contact.info.is_empty());
        assert!(ContactConfig::default().info.is_empty());
    }

    #[test]
    fn test_footer_newsletter_defaults() {
        let footer = FooterConfig::from_value(&json!({ "form": true }));
        let newsletter = footer.newsletter.unwrap();
        assert_eq!(newsletter.title, "Newsletter");
        assert_eq!(newsletter.text, "Subscribe for updates");
        assert_eq!(newsletter.button, "Subscribe");
    }

    #[test]
    fn test_footer_social_shorthand() {
        let footer = FooterConfig::from_value(&json!({ "social": ["github"] }));
        assert_eq!(footer.social[0].icon, "github");
        assert_eq!(footer.social[0].url, "#");
    }
}
