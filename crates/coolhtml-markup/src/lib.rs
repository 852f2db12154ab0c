//! CoolHTML markup primitives
//!
//! Pure string transforms shared by every section builder:
//!
//! - [`inline`] turns lightweight inline markup into HTML.
//! - [`style`] compiles nested style objects into CSS text.
//! - [`content`] renders text, sequences and structured blocks.
//! - [`loose`] reads untyped JSON configuration with truthiness fallbacks.
//!
//! # Example
//!
//! ```
//! use coolhtml_markup::{text, StyleTree};
//!
//! assert_eq!(text("Hello *world*"), "<p>Hello <strong>world</strong></p>");
//! assert_eq!(StyleTree::new().with("fontSize", "2rem").compile(), "font-size: 2rem;");
//! ```
//!
//! Nothing here escapes its input. Configuration strings are trusted and
//! interpolated into markup verbatim.

pub mod content;
pub mod inline;
pub mod loose;
pub mod style;

pub use content::{Block, Content, ContentButton};
pub use loose::Fields;
pub use style::{Style, StyleTree, StyleValue};

/// Format inline markup as HTML.
pub fn text(source: &str) -> String {
    inline::format(source)
}

/// Render a content value as HTML.
pub fn html(content: &Content) -> String {
    content.render()
}

/// Compile a style value under an optional selector prefix.
pub fn css(style: &Style, prefix: &str) -> String {
    style.compile(prefix)
}
