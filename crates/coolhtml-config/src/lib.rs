//! CoolHTML configuration
//!
//! Turns loosely-typed JSON configuration into strictly-typed records.
//! Synonym keys (`title`/`t`, `subtitle`/`st`, …) and per-key defaults are
//! resolved here, once, so section templates work on canonical fields only.
//!
//! ```
//! use coolhtml_config::SiteConfig;
//!
//! let site = SiteConfig::parse(r#"{ "hero": { "t": "Welcome" } }"#).unwrap();
//! assert_eq!(site.hero.unwrap().title.as_deref(), Some("Welcome"));
//! ```

pub mod common;
pub mod section;
pub mod site;

pub use common::{Background, Button, Link};
pub use section::{
    ContactConfig, ContactInfo, Feature, FeaturesConfig, FooterConfig, HeroConfig, Icon,
    NavConfig, Newsletter, Plan, PlanFeature, PricingConfig, SectionConfig, SocialLink,
    Testimonial, TestimonialLayout, TestimonialsConfig,
};
pub use site::{Section, SiteConfig, ThemeConfig};

/// Configuration error with position information.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Config error at line {line}, column {column}: {message}")]
pub struct ConfigError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        // serde_json appends the position to its message; it is kept separately.
        let full = err.to_string();
        let message = full
            .rsplit_once(" at line ")
            .map_or(full.as_str(), |(message, _)| message)
            .to_string();
        Self {
            message,
            line: err.line(),
            column: err.column(),
        }
    }
}
