//! CoolHTML
//!
//! Builds Bootstrap page sections from loose configuration and appends them
//! to an owned host [`Document`].
//!
//! ```
//! use coolhtml::{CoolHtml, Options};
//!
//! let mut cool = CoolHtml::new(Options::default());
//! cool.site_json(r#"{ "hero": { "title": "Welcome" } }"#).unwrap();
//! assert!(cool.document().to_html().contains("<h1 class=\"display-4\">Welcome</h1>"));
//! ```
//!
//! Configuration strings are trusted: they are interpolated into markup and
//! CSS without escaping.

use serde_json::Value;

pub use coolhtml_codegen::theme::THEME_STYLE_ID;
pub use coolhtml_codegen::{compile, Fragment, RenderContext, SiteOutput};
pub use coolhtml_config::{
    Background, Button, ConfigError, ContactConfig, FeaturesConfig, FooterConfig, HeroConfig,
    Link, NavConfig, PricingConfig, SectionConfig, SiteConfig, TestimonialsConfig, ThemeConfig,
};
pub use coolhtml_dom::{
    AssetManifest, AssetStatus, Document, DomError, Element, Insert, Node, Target,
};
pub use coolhtml_markup::{Block, Content, Style, StyleTree, StyleValue};

use coolhtml_codegen as codegen;

/// Any failure of the high-level API.
#[derive(Debug, thiserror::Error)]
pub enum CoolError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Dom(#[from] DomError),
}

/// Construction options.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Default container for rendered sections.
    pub target: Target,
    /// Framework assets to install; `None` leaves the document untouched.
    pub assets: Option<AssetManifest>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            target: Target::Body,
            assets: Some(AssetManifest::default()),
        }
    }
}

impl Options {
    pub fn target(mut self, target: impl Into<Target>) -> Self {
        self.target = target.into();
        self
    }

    pub fn without_assets(mut self) -> Self {
        self.assets = None;
        self
    }
}

/// A page under construction.
///
/// Section methods render their configuration and append the markup to the
/// default target. They fail only when that target is an id the document
/// does not contain.
#[derive(Debug, Clone)]
pub struct CoolHtml {
    document: Document,
    target: Target,
    assets: AssetStatus,
    ctx: RenderContext,
}

impl Default for CoolHtml {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl CoolHtml {
    /// Start from an empty page.
    pub fn new(options: Options) -> Self {
        Self::with_document(Document::new(), options)
    }

    /// Render into an existing page. Assets are installed once per
    /// document.
    pub fn with_document(mut document: Document, options: Options) -> Self {
        let assets = match &options.assets {
            Some(manifest) => coolhtml_dom::ensure_assets(&mut document, manifest),
            None => AssetStatus::Skipped,
        };
        Self {
            document,
            target: options.target,
            assets,
            ctx: RenderContext::new(),
        }
    }

    /// Replace the render context, e.g. with
    /// [`RenderContext::deterministic`].
    pub fn with_context(mut self, ctx: RenderContext) -> Self {
        self.ctx = ctx;
        self
    }

    pub fn context_mut(&mut self) -> &mut RenderContext {
        &mut self.ctx
    }

    /// What asset installation did at construction.
    pub fn assets(&self) -> AssetStatus {
        self.assets
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    /// Compile a style value under `prefix`.
    pub fn css(&self, style: &Style, prefix: &str) -> String {
        style.compile(prefix)
    }

    /// Add CSS to the head. With an id, an existing element with that id is
    /// updated instead of adding another one.
    pub fn style(&mut self, css: &str, id: Option<&str>) -> &mut Self {
        match id {
            Some(id) => self.document.upsert_style(id, css),
            None => self.document.append_style(css),
        }
        self
    }

    /// Format inline markup.
    pub fn text(&self, source: &str) -> String {
        coolhtml_markup::text(source)
    }

    /// Render a content value.
    pub fn html(&self, content: &Content) -> String {
        content.render()
    }

    /// Append markup or a node to `target`, or to the default target.
    pub fn render(
        &mut self,
        insert: impl Into<Insert>,
        target: Option<&Target>,
    ) -> Result<&mut Self, DomError> {
        let target = target.unwrap_or(&self.target);
        let appended = self.document.append(target, insert.into())?;
        tracing::debug!(?target, appended, "rendered fragment");
        Ok(self)
    }

    fn insert_fragment(&mut self, fragment: Fragment) -> Result<&mut Self, DomError> {
        tracing::debug!(kind = fragment.kind, "insert section");
        self.render(fragment.html, None)
    }

    // =========================================================================
    // Sections
    // =========================================================================

    pub fn nav(&mut self, config: impl Into<NavConfig>) -> Result<&mut Self, DomError> {
        let html = codegen::nav::generate(&config.into());
        self.render(html, None)
    }

    pub fn hero(&mut self, config: impl Into<HeroConfig>) -> Result<&mut Self, DomError> {
        let html = codegen::hero::generate(&config.into());
        self.render(html, None)
    }

    pub fn features(&mut self, config: impl Into<FeaturesConfig>) -> Result<&mut Self, DomError> {
        let html = codegen::features::generate(&config.into());
        self.render(html, None)
    }

    pub fn section(&mut self, config: impl Into<SectionConfig>) -> Result<&mut Self, DomError> {
        let html = codegen::section::generate(&config.into());
        self.render(html, None)
    }

    pub fn pricing(&mut self, config: impl Into<PricingConfig>) -> Result<&mut Self, DomError> {
        let html = codegen::pricing::generate(&config.into());
        self.render(html, None)
    }

    pub fn testimonials(
        &mut self,
        config: impl Into<TestimonialsConfig>,
    ) -> Result<&mut Self, DomError> {
        let html = codegen::testimonials::generate(&config.into(), &mut self.ctx);
        self.render(html, None)
    }

    pub fn contact(&mut self, config: impl Into<ContactConfig>) -> Result<&mut Self, DomError> {
        let html = codegen::contact::generate(&config.into());
        self.render(html, None)
    }

    pub fn footer(&mut self, config: impl Into<FooterConfig>) -> Result<&mut Self, DomError> {
        let html = codegen::footer::generate(&config.into(), &self.ctx);
        self.render(html, None)
    }

    // =========================================================================
    // Whole site
    // =========================================================================

    /// Install or replace the theme stylesheet.
    pub fn theme(&mut self, theme: &ThemeConfig) -> &mut Self {
        let css = codegen::theme::generate(theme);
        self.style(&css, Some(THEME_STYLE_ID))
    }

    /// Apply a site configuration: theme first, then every configured
    /// section in render order.
    ///
    /// The default target is resolved before anything is written, so a
    /// missing target leaves the document untouched.
    pub fn site(&mut self, site: &SiteConfig) -> Result<&mut Self, DomError> {
        self.document.container_mut(&self.target)?;
        let output = codegen::compile(site, &mut self.ctx);
        if let Some(css) = &output.theme_css {
            self.style(css, Some(THEME_STYLE_ID));
        }
        for fragment in output.fragments {
            self.insert_fragment(fragment)?;
        }
        Ok(self)
    }

    /// [`site`](Self::site) from a loose JSON value.
    pub fn site_value(&mut self, value: &Value) -> Result<&mut Self, DomError> {
        self.site(&SiteConfig::from_value(value))
    }

    /// [`site`](Self::site) from JSON text.
    pub fn site_json(&mut self, source: &str) -> Result<&mut Self, CoolError> {
        let site = SiteConfig::parse(source)?;
        Ok(self.site(&site)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn bare() -> CoolHtml {
        CoolHtml::new(Options::default().without_assets())
            .with_context(RenderContext::deterministic(2025))
    }

    // =========================================================================
    // Construction
    // =========================================================================

    #[test]
    fn test_assets_installed_once_per_document() {
        let first = CoolHtml::new(Options::default());
        assert_eq!(first.assets(), AssetStatus::Installed);

        let second = CoolHtml::with_document(first.into_document(), Options::default());
        assert_eq!(second.assets(), AssetStatus::AlreadyPresent);
        let links = second.document().find_all(&|el| el.name == "link");
        assert_eq!(links.len(), 2);
    }

    #[test]
    fn test_assets_skipped() {
        let cool = bare();
        assert_eq!(cool.assets(), AssetStatus::Skipped);
        assert!(cool.document().head().children.is_empty());
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    #[test]
    fn test_text_and_html() {
        let cool = bare();
        assert_eq!(cool.text("*hi*"), "<strong>hi</strong>");
        assert_eq!(cool.text("hi _there_"), "<p>hi <em>there</em></p>");
        assert_eq!(cool.html(&Content::from_value(&json!(["a", "b"]))), "<p>a</p><p>b</p>");
    }

    #[test]
    fn test_css_with_prefix() {
        let cool = bare();
        let style = Style::from_value(&json!({ "color": "red" }));
        assert_eq!(cool.css(&style, "body"), "body { color: red; }");
    }

    #[test]
    fn test_style_without_id_appends() {
        let mut cool = bare();
        cool.style("a {}", None).style("a {}", None);
        assert_eq!(cool.document().find_all(&|el| el.name == "style").len(), 2);
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    #[test]
    fn test_render_to_default_target() {
        let mut doc = Document::parse("<div id=\"app\"></div>");
        doc.append(&Target::Body, "<p>outside</p>".into()).unwrap();
        let mut cool = CoolHtml::with_document(doc, Options::default().without_assets().target("app"));
        cool.render("<p>inside</p>", None).unwrap();
        assert_eq!(
            cool.document().element_by_id("app").unwrap().inner_html(),
            "<p>inside</p>"
        );
    }

    #[test]
    fn test_render_to_missing_target() {
        let mut cool = CoolHtml::new(Options::default().without_assets().target("missing"));
        assert!(matches!(
            cool.hero("Hi"),
            Err(DomError::TargetNotFound(id)) if id == "missing"
        ));
    }

    #[test]
    fn test_chained_sections() {
        let mut cool = bare();
        cool.nav("Acme").unwrap().hero("Hello").unwrap().footer("Bye").unwrap();
        let names: Vec<_> = cool.document().body().elements().map(|e| e.name.clone()).collect();
        assert_eq!(names, vec!["nav", "div", "footer"]);
    }

    #[test]
    fn test_theme_replaces() {
        let mut cool = bare();
        cool.theme(&ThemeConfig::from_value(&json!({ "primary": "#111" })));
        cool.theme(&ThemeConfig::from_value(&json!({ "primary": "#222" })));
        let theme = cool.document().element_by_id(THEME_STYLE_ID).unwrap();
        assert!(theme.text_content().contains("--bs-primary: #222;"));
        assert!(!theme.text_content().contains("#111"));
    }

    #[test]
    fn test_failed_site_leaves_document_unchanged() {
        let mut cool = CoolHtml::new(Options::default().without_assets().target("missing"));
        let err = cool
            .site_value(&json!({ "theme": { "primary": "#222" }, "hero": "Hi" }))
            .unwrap_err();
        assert_eq!(err, DomError::TargetNotFound("missing".into()));
        assert!(cool.document().head().children.is_empty());
        assert!(cool.document().element_by_id(THEME_STYLE_ID).is_none());
        assert!(cool.document().body().children.is_empty());
    }

    #[test]
    fn test_site_json_error() {
        let mut cool = bare();
        let err = cool.site_json("{ nope").unwrap_err();
        assert!(matches!(err, CoolError::Config(_)));
    }
}
