//! CoolHTML code generator
//!
//! Renders configuration records into markup fragments, one module per
//! section type, plus the theme stylesheet.
//!
//! ```text
//! SiteConfig → compile() → SiteOutput { theme_css, fragments }
//! ```
//!
//! Builders never fail. Configuration strings are interpolated without
//! escaping.

pub mod contact;
pub mod features;
pub mod footer;
pub mod hero;
pub mod nav;
pub mod pricing;
pub mod section;
pub mod testimonials;
pub mod theme;

use chrono::Datelike;
use coolhtml_config::{Background, Section, SiteConfig};
use uuid::Uuid;

/// A rendered section.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    /// Section type that produced the markup, e.g. `hero`.
    pub kind: &'static str,
    pub html: String,
}

/// Everything a site configuration renders to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteOutput {
    /// Theme stylesheet text, when the site has a theme.
    pub theme_css: Option<String>,
    /// Section fragments in render order.
    pub fragments: Vec<Fragment>,
}

/// How element ids are generated.
#[derive(Debug, Clone)]
enum IdSource {
    /// Short random suffix, so independently rendered widgets never clash.
    Random,
    /// `prefix-0`, `prefix-1`, … for reproducible output.
    Sequential { next: usize },
}

/// Per-render state shared by the section builders.
#[derive(Debug, Clone)]
pub struct RenderContext {
    year: i32,
    ids: IdSource,
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderContext {
    /// Random ids and the current local year.
    pub fn new() -> Self {
        Self {
            year: chrono::Local::now().year(),
            ids: IdSource::Random,
        }
    }

    /// Sequential ids and a fixed year.
    pub fn deterministic(year: i32) -> Self {
        Self {
            year,
            ids: IdSource::Sequential { next: 0 },
        }
    }

    /// Year used by the default copyright notice.
    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn set_year(&mut self, year: i32) {
        self.year = year;
    }

    /// Produce a fresh element id starting with `prefix`.
    pub fn assign_id(&mut self, prefix: &str) -> String {
        match &mut self.ids {
            IdSource::Random => {
                let suffix = Uuid::new_v4().simple().to_string();
                format!("{prefix}-{}", &suffix[..7])
            }
            IdSource::Sequential { next } => {
                let id = format!("{prefix}-{next}");
                *next += 1;
                id
            }
        }
    }
}

/// Render one section.
pub fn render_section(section: Section<'_>, ctx: &mut RenderContext) -> Fragment {
    let html = match section {
        Section::Nav(nav) => nav::generate(nav),
        Section::Hero(hero) => hero::generate(hero),
        Section::Features(features) => features::generate(features),
        Section::Section(config) => section::generate(config),
        Section::Pricing(pricing) => pricing::generate(pricing),
        Section::Testimonials(testimonials) => testimonials::generate(testimonials, ctx),
        Section::Contact(contact) => contact::generate(contact),
        Section::Footer(footer) => footer::generate(footer, ctx),
    };
    Fragment {
        kind: section.kind(),
        html,
    }
}

/// Render a whole site: theme stylesheet plus every configured section in
/// render order.
pub fn compile(site: &SiteConfig, ctx: &mut RenderContext) -> SiteOutput {
    let theme_css = site.theme.as_ref().map(theme::generate);
    let fragments: Vec<Fragment> = site
        .layout()
        .into_iter()
        .map(|section| render_section(section, ctx))
        .collect();

    tracing::debug!(
        sections = fragments.len(),
        themed = theme_css.is_some(),
        "compiled site"
    );

    SiteOutput {
        theme_css,
        fragments,
    }
}

/// ` style="…"` for an optional background, or nothing.
pub(crate) fn style_attr(background: Option<&Background>) -> String {
    background
        .map(|bg| format!(" style=\"{}\"", bg.to_css()))
        .unwrap_or_default()
}

/// Indented `\n` + `line`, or nothing when `line` is empty.
pub(crate) fn line(indent: usize, line: &str) -> String {
    if line.is_empty() {
        String::new()
    } else {
        format!("\n{}{line}", "  ".repeat(indent))
    }
}
