//! Render targets for the widgets.
//!
//! SYSTEM CONTEXT
//! ==============
//! Widgets never touch a concrete DOM. They read attributes through [`Host`]
//! and hand back a fresh list of [`Node`]s to install as children. The
//! browser bridge implements `Host` over `web_sys::Element`; [`Element`] is an
//! in-memory implementation used by the document runtime, the CLI and tests.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use std::fmt;

use crate::registry::AttributeMap;

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &["img", "br", "hr", "input", "link", "meta"];

/// Failure reported by a host while installing children.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    #[error("dom operation failed: {0}")]
    Dom(String),
}

/// The element a widget renders into.
pub trait Host {
    /// Current value of `name`, if the attribute is present.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Every attribute currently present, by name.
    fn attributes(&self) -> AttributeMap;

    /// Whether the host is attached to a document.
    fn is_connected(&self) -> bool;

    /// Replace all children with `children`. On error the previous children
    /// must be left in place.
    fn replace_children(&mut self, children: Vec<Node>) -> Result<(), HostError>;

    fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }
}

/// A node in the in-memory tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Element(_) => None,
            Self::Text(text) => Some(text),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

/// In-memory element: tag, ordered attributes, children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
    connected: bool,
}

impl Element {
    /// Create a detached element with no attributes or children.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into(), attributes: Vec::new(), children: Vec::new(), connected: false }
    }

    /// Builder form of [`Element::set_attribute`].
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Builder form of [`Element::append_child`].
    #[must_use]
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.append_child(child);
        self
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// Set `name` to `value`, keeping its original position if it already
    /// exists. Returns the previous value.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.attributes.push((name, value));
                None
            }
        }
    }

    /// Remove `name`, returning its value if it was present.
    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        let index = self.attributes.iter().position(|(n, _)| n == name)?;
        Some(self.attributes.remove(index).1)
    }

    /// Attributes in insertion order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Child elements, skipping text nodes.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    pub fn child_elements_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.children.iter_mut().filter_map(Node::as_element_mut)
    }

    pub fn append_child(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    /// Insert `child` before the current first child.
    pub fn prepend_child(&mut self, child: impl Into<Node>) {
        self.children.insert(0, child.into());
    }

    pub fn clear_children(&mut self) {
        self.children.clear();
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Mark this element and its whole subtree as (dis)connected.
    pub fn set_connected(&mut self, connected: bool) {
        self.connected = connected;
        for child in self.child_elements_mut() {
            child.set_connected(connected);
        }
    }

    pub(crate) fn set_connected_shallow(&mut self, connected: bool) {
        self.connected = connected;
    }

    /// Descendants (excluding `self`) with the given tag, in document order.
    #[must_use]
    pub fn elements_by_tag(&self, tag: &str) -> Vec<&Element> {
        let mut out = Vec::new();
        self.collect_by_tag(tag, &mut out);
        out
    }

    fn collect_by_tag<'a>(&'a self, tag: &str, out: &mut Vec<&'a Element>) {
        for child in self.child_elements() {
            if child.tag == tag {
                out.push(child);
            }
            child.collect_by_tag(tag, out);
        }
    }

    /// Concatenated text of all descendant text nodes.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(text) => out.push_str(text),
                Node::Element(element) => element.collect_text(out),
            }
        }
    }

    /// Serialize as HTML.
    #[must_use]
    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

impl Host for Element {
    fn attribute(&self, name: &str) -> Option<String> {
        Element::attribute(self, name).map(str::to_owned)
    }

    fn attributes(&self) -> AttributeMap {
        self.attributes.iter().cloned().collect()
    }

    fn is_connected(&self) -> bool {
        self.connected
    }

    fn replace_children(&mut self, children: Vec<Node>) -> Result<(), HostError> {
        self.children = children;
        Ok(())
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (name, value) in &self.attributes {
            write!(f, " {name}=\"{}\"", escape(value, true))?;
        }
        f.write_str(">")?;
        if VOID_ELEMENTS.contains(&self.tag.as_str()) {
            return Ok(());
        }
        for child in &self.children {
            write!(f, "{child}")?;
        }
        write!(f, "</{}>", self.tag)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element(element) => write!(f, "{element}"),
            Self::Text(text) => f.write_str(&escape(text, false)),
        }
    }
}

fn escape(raw: &str, in_attribute: bool) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if in_attribute => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
