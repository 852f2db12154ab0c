//! Building blocks shared by several section records.

use coolhtml_markup::loose::{scalar_text, Fields};
use serde::Serialize;
use serde_json::{Map, Value};
use std::borrow::Cow;

/// Expand the bare-string shorthand into `{ key: string }`.
pub(crate) fn shorthand<'a>(value: &'a Value, key: &str) -> Cow<'a, Value> {
    match value {
        Value::String(s) => {
            let mut map = Map::new();
            map.insert(key.to_string(), Value::String(s.clone()));
            Cow::Owned(Value::Object(map))
        }
        _ => Cow::Borrowed(value),
    }
}

/// A label that may be given as a string or as `{ text }`.
pub(crate) fn label(fields: &Fields<'_>, keys: &[&str], default: &str) -> String {
    match fields.get(keys) {
        Some(value @ Value::Object(_)) => Fields::new(value).text_or(&["text", "txt"], default),
        Some(value) => scalar_text(value),
        None => default.to_string(),
    }
}

/// A text link. Bare strings become `{ text }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    pub text: String,
    pub url: String,
    pub active: bool,
}

impl Link {
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: url.into(),
            active: false,
        }
    }

    pub fn from_value(value: &Value) -> Self {
        let value = shorthand(value, "text");
        let fields = Fields::new(&value);
        Self {
            text: fields.text_or(&["text", "txt"], ""),
            url: fields.text_or(&["url", "href"], "#"),
            active: fields.flag(&["active"]),
        }
    }

    pub(crate) fn list(values: &[Value]) -> Vec<Self> {
        values.iter().map(Self::from_value).collect()
    }
}

/// A section background.
///
/// Values that look like a color or gradient are used as a fill, anything
/// else is treated as an image URL scaled to cover.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Background {
    Fill(String),
    Image(String),
}

impl Background {
    pub fn parse(raw: &str) -> Self {
        if raw.contains('#') || raw.contains("rgb") || raw.contains("gradient") {
            Background::Fill(raw.to_string())
        } else {
            Background::Image(raw.to_string())
        }
    }

    pub(crate) fn lookup(fields: &Fields<'_>) -> Option<Self> {
        fields.text(&["background", "bg"]).map(|raw| Self::parse(&raw))
    }

    /// Inline style declarations for this background.
    pub fn to_css(&self) -> String {
        match self {
            Background::Fill(value) => format!("background: {value};"),
            Background::Image(url) => {
                format!("background-image: url({url}); background-size: cover;")
            }
        }
    }
}

/// A call-to-action button.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Button {
    pub text: String,
    pub url: String,
    /// Color variant, e.g. `primary` or `light`.
    pub variant: String,
    pub outline: bool,
    /// Size suffix, e.g. `lg` for `btn-lg`.
    pub size: Option<String>,
}

impl Button {
    /// Read a button, filling in `variant` and `text` when absent.
    ///
    /// A bare string is the button text.
    pub fn from_value(value: &Value, default_variant: &str, default_text: &str) -> Self {
        let value = shorthand(value, "text");
        let fields = Fields::new(&value);
        Self {
            text: fields.text_or(&["text", "txt"], default_text),
            url: fields.text_or(&["url", "href"], "#"),
            variant: fields.text_or(&["type"], default_variant),
            outline: fields.flag(&["outline"]),
            size: fields.text(&["size"]),
        }
    }

    /// The `btn btn-…` class list.
    pub fn class(&self) -> String {
        let outline = if self.outline { "outline-" } else { "" };
        match &self.size {
            Some(size) => format!("btn btn-{outline}{} btn-{size}", self.variant),
            None => format!("btn btn-{outline}{}", self.variant),
        }
    }
}
