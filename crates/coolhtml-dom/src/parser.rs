//! HTML5 parsing into [`Node`] trees.
//!
//! html5ever drives a [`TreeSink`] that builds reference-counted nodes;
//! the finished tree is then converted into owned [`Element`]s. Error
//! recovery is the HTML5 tree-construction algorithm: a stray `</p>` becomes
//! an empty paragraph, an open `<p>` closes before a block element, and a
//! missing `<html>`, `<head>` or `<body>` is implied.

use std::borrow::Cow;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

use html5ever::driver::ParseOpts;
use html5ever::parse_document;
use html5ever::tendril::{StrTendril, TendrilSink};
use html5ever::tree_builder::{ElementFlags, NodeOrText, QuirksMode, TreeSink};
use html5ever::{Attribute, QualName};

use crate::node::{Element, Node};

type Handle = Rc<SinkNode>;

enum SinkData {
    Document,
    Element {
        name: QualName,
        attrs: RefCell<Vec<Attribute>>,
    },
    Text(RefCell<String>),
    Comment(String),
}

struct SinkNode {
    data: SinkData,
    parent: RefCell<Option<Weak<SinkNode>>>,
    children: RefCell<Vec<Handle>>,
}

impl SinkNode {
    fn new(data: SinkData) -> Handle {
        Rc::new(Self {
            data,
            parent: RefCell::new(None),
            children: RefCell::new(Vec::new()),
        })
    }

    fn parent(&self) -> Option<Handle> {
        self.parent.borrow().as_ref().and_then(Weak::upgrade)
    }

    /// Convert into an owned node. The document node has no counterpart.
    fn to_node(&self) -> Option<Node> {
        match &self.data {
            SinkData::Document => None,
            SinkData::Element { name, attrs } => Some(Node::Element(Element {
                name: name.local.to_string(),
                attrs: attrs
                    .borrow()
                    .iter()
                    .map(|a| (attr_name(&a.name), a.value.to_string()))
                    .collect(),
                children: self.child_nodes(),
            })),
            SinkData::Text(text) => Some(Node::Text(text.borrow().clone())),
            SinkData::Comment(text) => Some(Node::Comment(text.clone())),
        }
    }

    fn child_nodes(&self) -> Vec<Node> {
        self.children
            .borrow()
            .iter()
            .filter_map(|child| child.to_node())
            .collect()
    }
}

fn attr_name(name: &QualName) -> String {
    match &name.prefix {
        Some(prefix) => format!("{}:{}", prefix, name.local),
        None => name.local.to_string(),
    }
}

/// Tree builder target for html5ever.
struct DomSink {
    document: Handle,
}

impl Default for DomSink {
    fn default() -> Self {
        Self {
            document: SinkNode::new(SinkData::Document),
        }
    }
}

impl DomSink {
    fn attach(parent: &Handle, child: &Handle) {
        *child.parent.borrow_mut() = Some(Rc::downgrade(parent));
    }

    /// Append text to `parent`, merging with a trailing text node.
    fn append_text(parent: &Handle, text: &str) {
        if let Some(last) = parent.children.borrow().last() {
            if let SinkData::Text(existing) = &last.data {
                existing.borrow_mut().push_str(text);
                return;
            }
        }
        let node = SinkNode::new(SinkData::Text(RefCell::new(text.to_string())));
        Self::attach(parent, &node);
        parent.children.borrow_mut().push(node);
    }
}

impl TreeSink for DomSink {
    type Handle = Handle;
    type Output = Self;
    type ElemName<'a>
        = &'a QualName
    where
        Self: 'a;

    fn finish(self) -> Self::Output {
        self
    }

    fn parse_error(&self, msg: Cow<'static, str>) {
        tracing::trace!(%msg, "html parse error");
    }

    fn get_document(&self) -> Self::Handle {
        self.document.clone()
    }

    fn elem_name<'a>(&'a self, target: &'a Self::Handle) -> Self::ElemName<'a> {
        static EMPTY: QualName = QualName {
            prefix: None,
            ns: html5ever::ns!(),
            local: html5ever::local_name!(""),
        };
        match &target.data {
            SinkData::Element { name, .. } => name,
            _ => &EMPTY,
        }
    }

    fn create_element(
        &self,
        name: QualName,
        attrs: Vec<Attribute>,
        _flags: ElementFlags,
    ) -> Self::Handle {
        SinkNode::new(SinkData::Element {
            name,
            attrs: RefCell::new(attrs),
        })
    }

    fn create_comment(&self, text: StrTendril) -> Self::Handle {
        SinkNode::new(SinkData::Comment(text.to_string()))
    }

    fn create_pi(&self, _target: StrTendril, data: StrTendril) -> Self::Handle {
        SinkNode::new(SinkData::Comment(data.to_string()))
    }

    fn append(&self, parent: &Self::Handle, child: NodeOrText<Self::Handle>) {
        match child {
            NodeOrText::AppendNode(node) => {
                Self::attach(parent, &node);
                parent.children.borrow_mut().push(node);
            }
            NodeOrText::AppendText(text) => Self::append_text(parent, &text),
        }
    }

    fn append_based_on_parent_node(
        &self,
        element: &Self::Handle,
        prev_element: &Self::Handle,
        child: NodeOrText<Self::Handle>,
    ) {
        if element.parent().is_some() {
            self.append_before_sibling(element, child);
        } else {
            self.append(prev_element, child);
        }
    }

    fn append_doctype_to_document(
        &self,
        _name: StrTendril,
        _public_id: StrTendril,
        _system_id: StrTendril,
    ) {
        // The serializer always writes its own doctype.
    }

    fn get_template_contents(&self, target: &Self::Handle) -> Self::Handle {
        target.clone()
    }

    fn same_node(&self, x: &Self::Handle, y: &Self::Handle) -> bool {
        Rc::ptr_eq(x, y)
    }

    fn set_quirks_mode(&self, _mode: QuirksMode) {}

    fn append_before_sibling(&self, sibling: &Self::Handle, new_node: NodeOrText<Self::Handle>) {
        let Some(parent) = sibling.parent() else {
            return;
        };
        let mut children = parent.children.borrow_mut();
        let Some(index) = children.iter().position(|c| Rc::ptr_eq(c, sibling)) else {
            return;
        };
        let node = match new_node {
            NodeOrText::AppendNode(node) => node,
            NodeOrText::AppendText(text) => {
                if let Some(prev) = index.checked_sub(1).map(|i| &children[i]) {
                    if let SinkData::Text(existing) = &prev.data {
                        existing.borrow_mut().push_str(&text);
                        return;
                    }
                }
                SinkNode::new(SinkData::Text(RefCell::new(text.to_string())))
            }
        };
        Self::attach(&parent, &node);
        children.insert(index, node);
    }

    fn add_attrs_if_missing(&self, target: &Self::Handle, attrs: Vec<Attribute>) {
        if let SinkData::Element { attrs: existing, .. } = &target.data {
            let mut existing = existing.borrow_mut();
            for attr in attrs {
                if !existing.iter().any(|a| a.name == attr.name) {
                    existing.push(attr);
                }
            }
        }
    }

    fn remove_from_parent(&self, target: &Self::Handle) {
        if let Some(parent) = target.parent() {
            parent
                .children
                .borrow_mut()
                .retain(|child| !Rc::ptr_eq(child, target));
        }
        *target.parent.borrow_mut() = None;
    }

    fn reparent_children(&self, node: &Self::Handle, new_parent: &Self::Handle) {
        let moved = std::mem::take(&mut *node.children.borrow_mut());
        for child in &moved {
            Self::attach(new_parent, child);
        }
        new_parent.children.borrow_mut().extend(moved);
    }
}

/// Parse a complete page. The result is always an `html` element holding
/// a `head` and a `body`.
pub fn parse_page(source: &str) -> Element {
    let sink = parse_document(DomSink::default(), ParseOpts::default())
        .from_utf8()
        .one(source.as_bytes());
    sink.document
        .child_nodes()
        .into_iter()
        .find_map(|node| match node {
            Node::Element(html) if html.name == "html" => Some(html),
            _ => None,
        })
        .unwrap_or_else(|| Element::new("html"))
}

/// Parse an HTML fragment, in body context, into detached top-level nodes.
pub fn parse_fragment(source: &str) -> Vec<Node> {
    let page = parse_page(&format!(
        "<!DOCTYPE html><html><head></head><body>{}</body></html>",
        source
    ));
    page.children
        .into_iter()
        .find_map(|node| match node {
            Node::Element(body) if body.name == "body" => Some(body.children),
            _ => None,
        })
        .unwrap_or_default()
}
