//! One-shot installation of the UI framework assets.

use crate::document::Document;
use crate::node::Element;

pub const BOOTSTRAP_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/bootstrap.min.css";
pub const BOOTSTRAP_JS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/js/bootstrap.bundle.min.js";
pub const BOOTSTRAP_ICONS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap-icons@1.10.0/font/bootstrap-icons.css";
pub const VIEWPORT: &str = "width=device-width, initial-scale=1";

/// The framework files a page needs, and how to recognize that they are
/// already there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetManifest {
    /// A `<link href>` containing this substring means the assets are
    /// installed.
    pub marker: String,
    pub stylesheet: String,
    pub script: String,
    pub icons: String,
    /// `content` of the viewport `<meta>`.
    pub viewport: String,
}

impl Default for AssetManifest {
    fn default() -> Self {
        Self {
            marker: "bootstrap".into(),
            stylesheet: BOOTSTRAP_CSS.into(),
            script: BOOTSTRAP_JS.into(),
            icons: BOOTSTRAP_ICONS.into(),
            viewport: VIEWPORT.into(),
        }
    }
}

/// Outcome of [`ensure_assets`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetStatus {
    /// The elements were added by this call.
    Installed,
    /// A matching stylesheet was already in the document.
    AlreadyPresent,
    /// Asset loading was turned off.
    Skipped,
}

/// Add the framework stylesheet, script, viewport meta and icon font unless
/// a stylesheet matching the manifest marker is already linked.
///
/// The stylesheet, viewport and icons go into the head, the script at the
/// end of the body. Calling this again on the same document is a no-op.
pub fn ensure_assets(document: &mut Document, manifest: &AssetManifest) -> AssetStatus {
    let installed = document
        .find(&|el| {
            el.name == "link"
                && el
                    .attr("href")
                    .is_some_and(|href| href.contains(manifest.marker.as_str()))
        })
        .is_some();
    if installed {
        tracing::debug!(marker = %manifest.marker, "assets already present");
        return AssetStatus::AlreadyPresent;
    }

    let head = document.head_mut();
    head.append(stylesheet(&manifest.stylesheet));
    head.append(
        Element::new("meta")
            .with_attr("name", "viewport")
            .with_attr("content", manifest.viewport.as_str()),
    );
    head.append(stylesheet(&manifest.icons));
    document
        .body_mut()
        .append(Element::new("script").with_attr("src", manifest.script.as_str()));

    tracing::debug!(stylesheet = %manifest.stylesheet, "installed assets");
    AssetStatus::Installed
}

fn stylesheet(href: &str) -> Element {
    Element::new("link")
        .with_attr("rel", "stylesheet")
        .with_attr("href", href)
}
