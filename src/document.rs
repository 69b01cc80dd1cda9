//! In-memory custom-element runtime.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mirrors what the browser's `customElements` registry does for the real DOM:
//! definitions are keyed by tag and defined once, attaching a tree mounts every
//! defined element in it, and attribute changes are dispatched to the owning
//! definition. Elements created while rendering (the `<crdr-img>` icons of the
//! quick links) are upgraded as soon as they land in an attached tree.
//!
//! Used by the CLI for static rendering and by tests; the browser bridge relies
//! on the platform instead.

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

use std::collections::HashMap;
use std::rc::Rc;

use crate::dom::Element;
use crate::element::CustomElement;
use crate::image::ImageElement;
use crate::quicklinks::QuickLinksElement;
use crate::registry::ImageRegistry;

/// Outcome of [`Document::define`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Definition {
    Defined,
    /// The tag already had a definition; the new one was ignored.
    AlreadyDefined,
}

/// Custom-element definitions plus the operations that drive their lifecycle.
#[derive(Default)]
pub struct Document {
    definitions: HashMap<&'static str, Rc<dyn CustomElement>>,
}

impl Document {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A document with `crdr-img` and `crdr-quicklinks` defined against
    /// `registry`.
    #[must_use]
    pub fn with_widgets(registry: Rc<ImageRegistry>) -> Self {
        let mut document = Self::new();
        document.define(Rc::new(ImageElement::new(registry)));
        document.define(Rc::new(QuickLinksElement::new()));
        document
    }

    /// Define `element` under its tag unless the tag is already taken.
    pub fn define(&mut self, element: Rc<dyn CustomElement>) -> Definition {
        let tag = element.tag();
        if self.definitions.contains_key(tag) {
            tracing::debug!(tag, "custom element already defined");
            return Definition::AlreadyDefined;
        }
        self.definitions.insert(tag, element);
        tracing::debug!(tag, "custom element defined");
        Definition::Defined
    }

    #[must_use]
    pub fn is_defined(&self, tag: &str) -> bool {
        self.definitions.contains_key(tag)
    }

    /// Attach `root` (and its subtree) to the document, mounting every
    /// defined element that was not already attached.
    pub fn attach(&self, root: &mut Element) {
        self.upgrade(root);
    }

    /// Detach `root`. Widgets have no teardown, so this only clears the
    /// connected state; re-attaching mounts them again.
    pub fn detach(&self, root: &mut Element) {
        root.set_connected(false);
    }

    /// Set an attribute and notify the element's definition.
    pub fn set_attribute(&self, element: &mut Element, name: &str, value: &str) {
        let old = element.set_attribute(name, value);
        self.attribute_changed(element, name, old.as_deref(), Some(value));
    }

    /// Remove an attribute and notify the element's definition.
    pub fn remove_attribute(&self, element: &mut Element, name: &str) {
        if let Some(old) = element.remove_attribute(name) {
            self.attribute_changed(element, name, Some(old.as_str()), None);
        }
    }

    /// Build `<tag attrs...>`, attach it and return its HTML.
    #[must_use]
    pub fn render_html(&self, tag: &str, attrs: &[(&str, &str)]) -> String {
        let mut element = Element::new(tag);
        for (name, value) in attrs {
            element.set_attribute(*name, *value);
        }
        self.attach(&mut element);
        element.to_html()
    }

    fn attribute_changed(&self, element: &mut Element, name: &str, old: Option<&str>, new: Option<&str>) {
        if let Some(definition) = self.definitions.get(element.tag()) {
            definition.on_attribute_change(element, name, old, new);
        }
        if element.is_connected() {
            for child in element.child_elements_mut() {
                self.upgrade(child);
            }
        }
    }

    fn upgrade(&self, element: &mut Element) {
        if !element.is_connected() {
            element.set_connected_shallow(true);
            if let Some(definition) = self.definitions.get(element.tag()) {
                definition.on_mount(element);
            }
        }
        for child in element.child_elements_mut() {
            self.upgrade(child);
        }
    }
}
