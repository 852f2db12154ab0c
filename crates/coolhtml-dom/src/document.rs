//! The host document and fragment insertion.

use crate::node::{Element, Node};
use crate::parser::{parse_fragment, parse_page};
use crate::DomError;

/// Where rendered markup is appended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Target {
    #[default]
    Body,
    Head,
    /// The first element carrying this `id`.
    Id(String),
}

impl From<&str> for Target {
    fn from(id: &str) -> Self {
        Target::Id(id.to_string())
    }
}

/// Something to append to a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Insert {
    /// Markup, trimmed and parsed in body context into detached nodes.
    Html(String),
    /// A pre-built node, appended as is.
    Node(Node),
}

impl From<&str> for Insert {
    fn from(html: &str) -> Self {
        Insert::Html(html.to_string())
    }
}

impl From<String> for Insert {
    fn from(html: String) -> Self {
        Insert::Html(html)
    }
}

impl From<Node> for Insert {
    fn from(node: Node) -> Self {
        Insert::Node(node)
    }
}

impl From<Element> for Insert {
    fn from(element: Element) -> Self {
        Insert::Node(Node::Element(element))
    }
}

/// An HTML page: attributes of the root element plus `<head>` and `<body>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
    head: Element,
    body: Element,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// An empty page.
    pub fn new() -> Self {
        Self {
            root: Element::new("html"),
            head: Element::new("head"),
            body: Element::new("body"),
        }
    }

    /// Adopt an existing page.
    ///
    /// The page is parsed as HTML5, so missing `<html>`, `<head>` or
    /// `<body>` elements are implied and metadata seen before any body
    /// content lands in the head. Whitespace between the two sections is
    /// dropped.
    pub fn parse(source: &str) -> Self {
        let html = parse_page(source);
        let mut document = Self::new();
        document.root.attrs = html.attrs;
        for node in html.children {
            match node {
                Node::Element(el) if el.name == "head" => {
                    document.head.attrs = el.attrs;
                    document.head.children.extend(el.children);
                }
                Node::Element(el) if el.name == "body" => {
                    document.body.attrs = el.attrs;
                    document.body.children.extend(el.children);
                }
                Node::Text(text) if text.trim().is_empty() => {}
                other => document.body.children.push(other),
            }
        }
        document
    }

    pub fn head(&self) -> &Element {
        &self.head
    }

    pub fn body(&self) -> &Element {
        &self.body
    }

    pub fn head_mut(&mut self) -> &mut Element {
        &mut self.head
    }

    pub fn body_mut(&mut self) -> &mut Element {
        &mut self.body
    }

    /// First element, head before body, matching `predicate`.
    pub fn find(&self, predicate: &dyn Fn(&Element) -> bool) -> Option<&Element> {
        self.head
            .find(predicate)
            .or_else(|| self.body.find(predicate))
    }

    pub fn find_mut(&mut self, predicate: &dyn Fn(&Element) -> bool) -> Option<&mut Element> {
        match self.head.find_mut(predicate) {
            Some(found) => Some(found),
            None => self.body.find_mut(predicate),
        }
    }

    /// Every element, head before body, matching `predicate`.
    pub fn find_all(&self, predicate: &dyn Fn(&Element) -> bool) -> Vec<&Element> {
        let mut found = Vec::new();
        self.head.find_all(predicate, &mut found);
        self.body.find_all(predicate, &mut found);
        found
    }

    pub fn element_by_id(&self, id: &str) -> Option<&Element> {
        self.find(&|el| el.id() == Some(id))
    }

    pub fn element_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.find_mut(&|el| el.id() == Some(id))
    }

    /// Resolve a target to its container element.
    pub fn container_mut(&mut self, target: &Target) -> Result<&mut Element, DomError> {
        match target {
            Target::Body => Ok(&mut self.body),
            Target::Head => Ok(&mut self.head),
            Target::Id(id) => self
                .element_by_id_mut(id)
                .ok_or_else(|| DomError::TargetNotFound(id.clone())),
        }
    }

    /// Append to `target`. Markup is parsed and each top-level node is
    /// appended in order. Returns the number of nodes appended.
    pub fn append(&mut self, target: &Target, insert: Insert) -> Result<usize, DomError> {
        let container = self.container_mut(target)?;
        let nodes = match insert {
            Insert::Html(html) => parse_fragment(html.trim()),
            Insert::Node(node) => vec![node],
        };
        let count = nodes.len();
        for node in nodes {
            tracing::trace!(container = %container.name, "append node");
            container.children.push(node);
        }
        Ok(count)
    }

    /// Set the text of the element with `id`, or create it as a `<style>`
    /// at the end of the head.
    ///
    /// Applying the same id again replaces the previous content, so there is
    /// only ever one such element.
    pub fn upsert_style(&mut self, id: &str, css: &str) {
        match self.element_by_id_mut(id) {
            Some(element) => {
                tracing::debug!(id, "replace style");
                element.set_text(css);
            }
            None => {
                tracing::debug!(id, "install style");
                self.head.append(
                    Element::new("style")
                        .with_attr("id", id)
                        .with_child(Node::text(css)),
                );
            }
        }
    }

    /// Add an anonymous `<style>` block to the head.
    pub fn append_style(&mut self, css: &str) {
        self.head
            .append(Element::new("style").with_child(Node::text(css)));
    }

    /// Serialize the whole page, starting with an HTML5 doctype.
    pub fn to_html(&self) -> String {
        let mut out = String::from("<!DOCTYPE html>\n");
        let mut root = self.root.clone();
        root.children = vec![
            Node::Element(self.head.clone()),
            Node::text("\n"),
            Node::Element(self.body.clone()),
        ];
        root.write_html(&mut out);
        out.push('\n');
        out
    }
}
