//! CSS object compiler.
//!
//! A [`StyleTree`] mirrors a nested style object literal: leaf entries are
//! declarations, nested entries are rules whose selector is the descendant
//! join of the enclosing selector and the entry key.
//!
//! ```text
//! { color: red, ".card": { backgroundColor: blue } }
//!   → "color: red; .card { background-color: blue; }"
//! ```
//!
//! Values are emitted verbatim.

use crate::loose::scalar_text;
use regex::Regex;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;
use std::sync::LazyLock;

static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").unwrap());

/// A style value: raw CSS text or a declaration tree.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Style {
    Raw(String),
    Tree(StyleTree),
}

impl Style {
    /// Read a loose JSON style value. Strings are raw CSS, objects are trees,
    /// anything else compiles to nothing.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(css) => Style::Raw(css.clone()),
            Value::Object(_) => Style::Tree(StyleTree::from_value(value)),
            _ => Style::Tree(StyleTree::new()),
        }
    }

    /// Compile under `prefix`. Raw CSS is returned unchanged.
    pub fn compile(&self, prefix: &str) -> String {
        match self {
            Style::Raw(css) => css.clone(),
            Style::Tree(tree) => tree.compile_under(prefix),
        }
    }
}

impl From<&str> for Style {
    fn from(css: &str) -> Self {
        Style::Raw(css.to_string())
    }
}

impl From<StyleTree> for Style {
    fn from(tree: StyleTree) -> Self {
        Style::Tree(tree)
    }
}

/// One entry of a [`StyleTree`].
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum StyleValue {
    Declaration(String),
    Nested(StyleTree),
}

/// Ordered mapping of property names or selectors to values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleTree {
    entries: Vec<(String, StyleValue)>,
}

impl StyleTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree from a JSON object, keeping key order.
    ///
    /// `null` entries are dropped. Arrays are treated as declarations.
    pub fn from_value(value: &Value) -> Self {
        let mut tree = Self::new();
        if let Value::Object(map) = value {
            for (key, value) in map {
                match value {
                    Value::Null => {}
                    Value::Object(_) => {
                        tree.insert(key, StyleValue::Nested(Self::from_value(value)));
                    }
                    other => tree.insert(key, StyleValue::Declaration(scalar_text(other))),
                }
            }
        }
        tree
    }

    /// Set `key`, replacing an existing entry in place.
    pub fn insert(&mut self, key: &str, value: StyleValue) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key.to_string(), value)),
        }
    }

    /// Builder form of [`insert`](Self::insert) for a declaration.
    pub fn with(mut self, property: &str, value: impl Into<String>) -> Self {
        self.insert(property, StyleValue::Declaration(value.into()));
        self
    }

    /// Builder form of [`insert`](Self::insert) for a nested rule.
    pub fn rule(mut self, selector: &str, tree: StyleTree) -> Self {
        self.insert(selector, StyleValue::Nested(tree));
        self
    }

    /// Overlay `other` onto this tree, entry by entry.
    pub fn merge(&mut self, other: StyleTree) {
        for (key, value) in other.entries {
            self.insert(&key, value);
        }
    }

    /// Compile with no enclosing selector.
    pub fn compile(&self) -> String {
        self.compile_under("")
    }

    /// Compile with `prefix` as the enclosing selector.
    ///
    /// Consecutive declarations under one selector share a rule block.
    pub fn compile_under(&self, prefix: &str) -> String {
        let mut parts = Vec::new();
        self.compile_into(prefix, &mut parts);
        parts.join(" ")
    }

    fn compile_into(&self, prefix: &str, parts: &mut Vec<String>) {
        let mut run: Vec<String> = Vec::new();

        for (key, value) in &self.entries {
            match value {
                StyleValue::Declaration(v) => {
                    run.push(format!("{}: {v};", property_name(key)));
                }
                StyleValue::Nested(child) => {
                    flush_run(prefix, &mut run, parts);
                    let selector = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{prefix} {key}")
                    };
                    child.compile_into(&selector, parts);
                }
            }
        }

        flush_run(prefix, &mut run, parts);
    }
}

impl Serialize for StyleTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

fn flush_run(prefix: &str, run: &mut Vec<String>, parts: &mut Vec<String>) {
    if run.is_empty() {
        return;
    }
    let body = run.join(" ");
    run.clear();
    if prefix.is_empty() {
        parts.push(body);
    } else {
        parts.push(format!("{prefix} {{ {body} }}"));
    }
}

/// Convert a camel-case property name to a hyphenated lowercase CSS name.
///
/// Names that are already hyphenated, including custom properties, are only
/// lowercased.
pub fn property_name(key: &str) -> String {
    CAMEL_BOUNDARY.replace_all(key, "$1-$2").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn compile_json(value: Value) -> String {
        Style::from_value(&value).compile("")
    }

    // =========================================================================
    // Property names
    // =========================================================================

    #[test]
    fn test_property_name_camel_case() {
        assert_eq!(property_name("backgroundColor"), "background-color");
        assert_eq!(property_name("borderTopLeftRadius"), "border-top-left-radius");
    }

    #[test]
    fn test_property_name_digits() {
        assert_eq!(property_name("h1Size"), "h1-size");
    }

    #[test]
    fn test_property_name_passthrough() {
        assert_eq!(property_name("background-color"), "background-color");
        assert_eq!(property_name("--bs-primary"), "--bs-primary");
    }

    // =========================================================================
    // Compilation
    // =========================================================================

    #[test]
    fn test_raw_string_unchanged() {
        assert_eq!(compile_json(json!("a { b: c }")), "a { b: c }");
    }

    #[test]
    fn test_single_declaration() {
        assert_eq!(compile_json(json!({ "color": "red" })), "color: red;");
    }

    #[test]
    fn test_camel_case_declaration() {
        assert_eq!(
            compile_json(json!({ "backgroundColor": "red" })),
            "background-color: red;"
        );
    }

    #[test]
    fn test_nested_rule() {
        assert_eq!(
            compile_json(json!({ ".a": { "color": "red" } })),
            ".a { color: red; }"
        );
    }

    #[test]
    fn test_nested_selectors_join_with_space() {
        assert_eq!(
            compile_json(json!({ ".a": { ".b": { "color": "red" } } })),
            ".a .b { color: red; }"
        );
    }

    #[test]
    fn test_declarations_share_a_block() {
        assert_eq!(
            compile_json(json!({ ".a": { "color": "red", "margin": 0 } })),
            ".a { color: red; margin: 0; }"
        );
    }

    #[test]
    fn test_mixed_order_is_kept() {
        assert_eq!(
            compile_json(json!({
                "color": "red",
                ".x": { "padding": "1px" },
                "margin": "2px"
            })),
            "color: red; .x { padding: 1px; } margin: 2px;"
        );
    }

    #[test]
    fn test_prefix_applies_to_top_level() {
        let tree = StyleTree::new().with("color", "red");
        assert_eq!(tree.compile_under("body"), "body { color: red; }");
    }

    #[test]
    fn test_empty_tree() {
        assert_eq!(compile_json(json!({})), "");
    }

    // =========================================================================
    // Tree editing
    // =========================================================================

    #[test]
    fn test_merge_replaces_in_place() {
        let mut base = StyleTree::new()
            .with("color", "red")
            .with("margin", "0");
        base.merge(StyleTree::new().with("color", "blue").with("padding", "1px"));
        assert_eq!(base.compile(), "color: blue; margin: 0; padding: 1px;");
    }

    #[test]
    fn test_null_entries_are_dropped() {
        assert_eq!(compile_json(json!({ "color": null, "margin": 0 })), "margin: 0;");
    }
}
