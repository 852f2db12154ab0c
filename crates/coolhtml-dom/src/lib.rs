//! CoolHTML host document
//!
//! An owned, in-memory stand-in for the browser document the rendered
//! fragments are appended to.
//!
//! ```text
//! HTML string → html5ever → Vec<Node> → Document::append(target) → to_html()
//! ```
//!
//! The model is write-only: nodes are appended, the theme stylesheet is
//! upserted by id, and nothing is ever diffed or removed.

pub mod assets;
pub mod document;
pub mod node;
pub mod parser;

pub use assets::{ensure_assets, AssetManifest, AssetStatus};
pub use document::{Document, Insert, Target};
pub use node::{Element, Node};
pub use parser::{parse_fragment, parse_page};

/// Errors raised while mutating a [`Document`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// The insertion target names an id that no element carries.
    #[error("no element with id `{0}` in the document")]
    TargetNotFound(String),
}
