//! Content values and their rendering.
//!
//! A content value is text, a sequence of content values, or a structured
//! block with well-known keys. Each variant renders to an HTML fragment.

use crate::inline;
use crate::loose::{is_truthy, scalar_text, Fields};
use serde::Serialize;
use serde_json::Value;

/// Renderable content.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Content {
    #[default]
    Empty,
    /// Inline markup, formatted by [`inline::format`].
    Text(String),
    /// Rendered element by element and concatenated.
    Sequence(Vec<Content>),
    Structured(Block),
    /// Any other scalar, emitted as-is.
    Scalar(String),
}

impl Content {
    /// Read a loose JSON content value.
    pub fn from_value(value: &Value) -> Self {
        if !is_truthy(value) {
            return Content::Empty;
        }
        match value {
            Value::String(s) => Content::Text(s.clone()),
            Value::Array(items) => Content::Sequence(items.iter().map(Content::from_value).collect()),
            Value::Object(_) => Content::Structured(Block::from_value(value)),
            other => Content::Scalar(scalar_text(other)),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Content::Empty)
    }

    /// Render to an HTML fragment.
    pub fn render(&self) -> String {
        match self {
            Content::Empty => String::new(),
            Content::Text(text) => inline::format(text),
            Content::Sequence(items) => items.iter().map(Content::render).collect(),
            Content::Structured(block) => block.render(),
            Content::Scalar(text) => text.clone(),
        }
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        if text.is_empty() {
            Content::Empty
        } else {
            Content::Text(text.to_string())
        }
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::from(text.as_str())
    }
}

impl From<Vec<Content>> for Content {
    fn from(items: Vec<Content>) -> Self {
        Content::Sequence(items)
    }
}

impl From<Block> for Content {
    fn from(block: Block) -> Self {
        Content::Structured(block)
    }
}

/// A structured content block.
///
/// Recognized parts render in a fixed order: heading, lead paragraph, fluid
/// image, formatted text, button. A block with none of them renders its
/// source object instead, so unrecognized input stays visible.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Block {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub image: Option<String>,
    pub alt: String,
    pub text: Option<String>,
    pub button: Option<ContentButton>,
    /// JSON text of the object this block was read from.
    #[serde(skip)]
    pub source: Option<String>,
}

/// Button link inside a [`Block`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentButton {
    pub text: String,
    pub class: String,
    pub url: String,
}

impl Default for ContentButton {
    fn default() -> Self {
        Self {
            text: "Button".into(),
            class: "primary".into(),
            url: "#".into(),
        }
    }
}

impl ContentButton {
    fn from_value(value: &Value) -> Self {
        let fields = Fields::new(value);
        Self {
            text: fields.text_or(&["text", "txt"], "Button"),
            class: fields.text_or(&["class", "cls"], "primary"),
            url: fields.text_or(&["url", "href"], "#"),
        }
    }
}

impl Block {
    pub fn from_value(value: &Value) -> Self {
        let fields = Fields::new(value);
        Self {
            title: fields.text(&["title", "t"]),
            subtitle: fields.text(&["subtitle", "st"]),
            image: fields.text(&["image", "img"]),
            alt: fields.text_or(&["alt"], ""),
            text: fields.text(&["text", "txt"]),
            button: fields.get(&["button", "btn"]).map(ContentButton::from_value),
            source: Some(value.to_string()),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn render(&self) -> String {
        let mut html = String::new();

        if let Some(title) = &self.title {
            html.push_str(&format!("<h2>{title}</h2>"));
        }
        if let Some(subtitle) = &self.subtitle {
            html.push_str(&format!("<p class=\"lead\">{subtitle}</p>"));
        }
        if let Some(image) = &self.image {
            html.push_str(&format!(
                "<img src=\"{image}\" class=\"img-fluid\" alt=\"{}\">",
                self.alt
            ));
        }
        if let Some(text) = &self.text {
            html.push_str(&inline::format(text));
        }
        if let Some(button) = &self.button {
            html.push_str(&format!(
                "<a href=\"{}\" class=\"btn btn-{}\">{}</a>",
                button.url, button.class, button.text
            ));
        }

        if html.is_empty() {
            return self.source.clone().unwrap_or_else(|| "{}".into());
        }
        html
    }
}
