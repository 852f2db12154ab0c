//! Whole-site configuration.

use crate::section::{
    ContactConfig, FeaturesConfig, FooterConfig, HeroConfig, NavConfig, PricingConfig,
    SectionConfig, TestimonialsConfig,
};
use crate::ConfigError;
use coolhtml_markup::loose::Fields;
use coolhtml_markup::Style;
use serde::Serialize;
use serde_json::Value;

pub const DEFAULT_PRIMARY: &str = "#0d6efd";
pub const DEFAULT_SECONDARY: &str = "#6c757d";

/// Theme colors and extra rules.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeConfig {
    pub primary: String,
    pub secondary: String,
    /// Navigation bar background. Falls back to `primary`.
    pub header: String,
    /// Footer background. Falls back to `primary`.
    pub footer: String,
    /// Extra rules: a tree merged over the generated one, or raw CSS appended
    /// after it.
    pub css: Option<Style>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self::from_value(&Value::Null)
    }
}

impl ThemeConfig {
    pub fn from_value(value: &Value) -> Self {
        let fields = Fields::new(value);
        let primary = fields.text_or(&["primary"], DEFAULT_PRIMARY);

        Self {
            header: fields.text_or(&["header", "primary"], DEFAULT_PRIMARY),
            footer: fields.text_or(&["footer", "primary"], DEFAULT_PRIMARY),
            secondary: fields.text_or(&["secondary"], DEFAULT_SECONDARY),
            primary,
            css: fields.get(&["css"]).map(Style::from_value),
        }
    }
}

/// Configuration for a whole page.
///
/// Every key is optional. Sections render in a fixed order regardless of
/// the order of keys in the source.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SiteConfig {
    pub theme: Option<ThemeConfig>,
    pub nav: Option<NavConfig>,
    pub hero: Option<HeroConfig>,
    pub features: Option<FeaturesConfig>,
    pub sections: Vec<SectionConfig>,
    pub pricing: Option<PricingConfig>,
    pub testimonials: Option<TestimonialsConfig>,
    pub contact: Option<ContactConfig>,
    pub footer: Option<FooterConfig>,
}

/// A borrowed section of a site, in render order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Section<'a> {
    Nav(&'a NavConfig),
    Hero(&'a HeroConfig),
    Features(&'a FeaturesConfig),
    Section(&'a SectionConfig),
    Pricing(&'a PricingConfig),
    Testimonials(&'a TestimonialsConfig),
    Contact(&'a ContactConfig),
    Footer(&'a FooterConfig),
}

impl Section<'_> {
    pub fn kind(&self) -> &'static str {
        match self {
            Section::Nav(_) => "nav",
            Section::Hero(_) => "hero",
            Section::Features(_) => "features",
            Section::Section(_) => "section",
            Section::Pricing(_) => "pricing",
            Section::Testimonials(_) => "testimonials",
            Section::Contact(_) => "contact",
            Section::Footer(_) => "footer",
        }
    }
}

impl SiteConfig {
    /// Parse a JSON site configuration.
    ///
    /// The top level must be an object. Nested values are never rejected;
    /// anything unrecognized falls back to defaults.
    pub fn parse(source: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_json::from_str(source).map_err(ConfigError::from)?;
        if !value.is_object() {
            return Err(ConfigError {
                message: format!(
                    "expected a site configuration object, found {}",
                    value_kind(&value)
                ),
                line: 1,
                column: 1,
            });
        }
        Ok(Self::from_value(&value))
    }

    pub fn from_value(value: &Value) -> Self {
        let fields = Fields::new(value);

        let sections = match fields.get(&["sections", "section"]) {
            Some(Value::Array(items)) => items.iter().map(SectionConfig::from_value).collect(),
            Some(single) => vec![SectionConfig::from_value(single)],
            None => Vec::new(),
        };

        Self {
            theme: fields.get(&["theme"]).map(ThemeConfig::from_value),
            nav: fields.get(&["nav", "navbar"]).map(NavConfig::from_value),
            hero: fields.get(&["hero"]).map(HeroConfig::from_value),
            features: fields.get(&["features"]).map(FeaturesConfig::from_value),
            sections,
            pricing: fields.get(&["pricing"]).map(PricingConfig::from_value),
            testimonials: fields
                .get(&["testimonials"])
                .map(TestimonialsConfig::from_value),
            contact: fields.get(&["contact"]).map(ContactConfig::from_value),
            footer: fields.get(&["footer"]).map(FooterConfig::from_value),
        }
    }

    /// The configured sections in render order.
    pub fn layout(&self) -> Vec<Section<'_>> {
        let mut layout = Vec::new();
        if let Some(nav) = &self.nav {
            layout.push(Section::Nav(nav));
        }
        if let Some(hero) = &self.hero {
            layout.push(Section::Hero(hero));
        }
        if let Some(features) = &self.features {
            layout.push(Section::Features(features));
        }
        layout.extend(self.sections.iter().map(Section::Section));
        if let Some(pricing) = &self.pricing {
            layout.push(Section::Pricing(pricing));
        }
        if let Some(testimonials) = &self.testimonials {
            layout.push(Section::Testimonials(testimonials));
        }
        if let Some(contact) = &self.contact {
            layout.push(Section::Contact(contact));
        }
        if let Some(footer) = &self.footer {
            layout.push(Section::Footer(footer));
        }
        layout
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn kinds(site: &SiteConfig) -> Vec<&'static str> {
        site.layout().iter().map(Section::kind).collect()
    }

    // =========================================================================
    // Parsing
    // =========================================================================

    #[test]
    fn test_parse_empty_object() {
        let site = SiteConfig::parse("{}").unwrap();
        assert_eq!(site, SiteConfig::default());
        assert!(site.layout().is_empty());
    }

    #[test]
    fn test_parse_rejects_non_object() {
        let err = SiteConfig::parse("[1, 2]").unwrap_err();
        assert!(err.message.contains("an array"));
        assert_eq!((err.line, err.column), (1, 1));
    }

    #[test]
    fn test_parse_reports_position() {
        let err = SiteConfig::parse("{\n  \"hero\": ,\n}").unwrap_err();
        assert_eq!(err.line, 2);
        assert!(!err.message.contains("at line"));
    }

    // =========================================================================
    // Layout
    // =========================================================================

    #[test]
    fn test_fixed_order() {
        let site = SiteConfig::from_value(&json!({
            "footer": {},
            "hero": "Hi",
            "contact": {},
            "navbar": "Acme",
            "sections": ["a", "b"],
            "pricing": {},
            "features": {},
            "testimonials": {}
        }));
        assert_eq!(
            kinds(&site),
            vec![
                "nav", "hero", "features", "section", "section", "pricing",
                "testimonials", "contact", "footer"
            ]
        );
    }

    #[test]
    fn test_single_section_object() {
        let site = SiteConfig::from_value(&json!({ "section": { "id": "about" } }));
        assert_eq!(site.sections.len(), 1);
        assert_eq!(site.sections[0].id.as_deref(), Some("about"));
    }

    #[test]
    fn test_falsy_sections_are_skipped() {
        let site = SiteConfig::from_value(&json!({ "hero": "", "nav": false, "footer": null }));
        assert!(site.layout().is_empty());
    }

    #[test]
    fn test_nav_beats_navbar() {
        let site = SiteConfig::from_value(&json!({ "nav": "A", "navbar": "B" }));
        assert_eq!(site.nav.unwrap().title, "A");
    }

    // =========================================================================
    // Theme
    // =========================================================================

    #[test]
    fn test_theme_fallbacks() {
        let theme = ThemeConfig::from_value(&json!({ "primary": "#111" }));
        assert_eq!(theme.header, "#111");
        assert_eq!(theme.footer, "#111");
        assert_eq!(theme.secondary, DEFAULT_SECONDARY);

        let defaults = ThemeConfig::default();
        assert_eq!(defaults.primary, DEFAULT_PRIMARY);
        assert_eq!(defaults.header, DEFAULT_PRIMARY);
    }

    #[test]
    fn test_theme_css_forms() {
        let tree = ThemeConfig::from_value(&json!({ "css": { "body": { "color": "red" } } }));
        assert!(matches!(tree.css, Some(Style::Tree(_))));

        let raw = ThemeConfig::from_value(&json!({ "css": "body { color: red; }" }));
        assert_eq!(raw.css, Some(Style::Raw("body { color: red; }".into())));
    }
}
