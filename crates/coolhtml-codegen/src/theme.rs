//! Theme stylesheet.

use coolhtml_config::ThemeConfig;
use coolhtml_markup::{Style, StyleTree};

/// Element id of the theme style block, so re-theming replaces it.
pub const THEME_STYLE_ID: &str = "coolhtml-theme";

/// The generated rule tree, before any `css` overrides.
pub fn base_tree(theme: &ThemeConfig) -> StyleTree {
    StyleTree::new()
        .rule(
            ":root",
            StyleTree::new()
                .with("--bs-primary", theme.primary.as_str())
                .with("--bs-secondary", theme.secondary.as_str())
                .with("--bs-header-bg", theme.header.as_str())
                .with("--bs-footer-bg", theme.footer.as_str()),
        )
        .rule(
            ".navbar",
            StyleTree::new().with("background-color", "var(--bs-header-bg) !important"),
        )
        .rule(
            ".footer, footer",
            StyleTree::new().with("background-color", "var(--bs-footer-bg) !important"),
        )
}

/// Compile the theme stylesheet.
///
/// A tree of overrides replaces top-level rules with the same selector and
/// appends the rest. Raw CSS is appended after the generated rules.
pub fn generate(theme: &ThemeConfig) -> String {
    let mut tree = base_tree(theme);
    match &theme.css {
        Some(Style::Tree(overrides)) => {
            tree.merge(overrides.clone());
            tree.compile()
        }
        Some(Style::Raw(css)) if !css.is_empty() => format!("{} {css}", tree.compile()),
        _ => tree.compile(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_default_theme() {
        assert_eq!(
            generate(&ThemeConfig::default()),
            ":root { --bs-primary: #0d6efd; --bs-secondary: #6c757d; --bs-header-bg: #0d6efd; --bs-footer-bg: #0d6efd; } \
.navbar { background-color: var(--bs-header-bg) !important; } \
.footer, footer { background-color: var(--bs-footer-bg) !important; }"
        );
    }

    #[test]
    fn test_custom_colors() {
        let css = generate(&ThemeConfig::from_value(&json!({ "primary": "#123", "footer": "#000" })));
        assert!(css.contains("--bs-primary: #123;"));
        assert!(css.contains("--bs-header-bg: #123;"));
        assert!(css.contains("--bs-footer-bg: #000;"));
    }

    #[test]
    fn test_tree_overrides_merge() {
        let css = generate(&ThemeConfig::from_value(&json!({
            "css": {
                ".navbar": { "backgroundColor": "black" },
                "body": { "fontFamily": "serif" }
            }
        })));
        assert!(css.contains(".navbar { background-color: black; }"));
        assert!(!css.contains("var(--bs-header-bg) !important"));
        assert!(css.ends_with("body { font-family: serif; }"));
        assert_eq!(css.matches(".navbar").count(), 1);
    }

    #[test]
    fn test_raw_css_appended() {
        let css = generate(&ThemeConfig::from_value(&json!({ "css": "h1 { color: red; }" })));
        assert!(css.starts_with(":root {"));
        assert!(css.ends_with("} h1 { color: red; }"));
    }
}
