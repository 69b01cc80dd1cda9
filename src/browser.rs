//! Browser bridge: defines the widgets as real custom elements.
//!
//! SYSTEM CONTEXT
//! ==============
//! A small JavaScript shim supplies the `HTMLElement` subclass (classes cannot
//! be declared from Rust) and forwards `connectedCallback` and
//! `attributeChangedCallback` to the Rust widgets, which render through
//! [`DomHost`]. JavaScript collaborators add kinds with `registerImage`.
//!
//! Nothing here is exercised by unit tests; the widget logic it forwards to is
//! covered through the in-memory document.

use std::rc::Rc;

use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::dom::{Host, HostError, Node};
use crate::element::CustomElement;
use crate::image::ImageElement;
use crate::quicklinks::QuickLinksElement;
use crate::registry::{AttributeMap, ImageEntry, ImageRegistry};

#[wasm_bindgen(inline_js = r#"
export function defineCrdrElement(tag, observed, mount, changed) {
    if (customElements.get(tag)) {
        return false;
    }
    customElements.define(tag, class extends HTMLElement {
        static get observedAttributes() {
            return observed;
        }
        connectedCallback() {
            mount(this);
        }
        attributeChangedCallback(name, oldValue, newValue) {
            changed(this, name, oldValue, newValue);
        }
    });
    return true;
}
"#)]
extern "C" {
    #[wasm_bindgen(js_name = defineCrdrElement)]
    fn define_crdr_element(tag: &str, observed: Array, mount: &Function, changed: &Function) -> bool;
}

/// [`Host`] over a live DOM element.
pub struct DomHost(pub web_sys::Element);

impl Host for DomHost {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn attributes(&self) -> AttributeMap {
        let attrs = self.0.attributes();
        (0..attrs.length())
            .filter_map(|i| attrs.item(i))
            .map(|attr| (attr.name(), attr.value()))
            .collect()
    }

    fn is_connected(&self) -> bool {
        self.0.is_connected()
    }

    fn replace_children(&mut self, children: Vec<Node>) -> Result<(), HostError> {
        let document = self
            .0
            .owner_document()
            .ok_or_else(|| HostError::Dom("element has no owner document".into()))?;
        // Build everything first so a failure leaves the old children intact.
        let nodes = children
            .iter()
            .map(|child| build_node(&document, child))
            .collect::<Result<Vec<_>, _>>()?;
        self.0.set_inner_html("");
        for node in &nodes {
            self.0.append_child(node).map_err(js_error)?;
        }
        Ok(())
    }
}

fn build_node(document: &web_sys::Document, node: &Node) -> Result<web_sys::Node, HostError> {
    match node {
        Node::Text(text) => Ok(document.create_text_node(text).into()),
        Node::Element(element) => {
            let dom = document.create_element(element.tag()).map_err(js_error)?;
            for (name, value) in element.attributes() {
                dom.set_attribute(name, value).map_err(js_error)?;
            }
            for child in element.children() {
                dom.append_child(&build_node(document, child)?).map_err(js_error)?;
            }
            Ok(dom.into())
        }
    }
}

fn js_error(value: JsValue) -> HostError {
    HostError::Dom(describe(&value))
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Define `crdr-img` and `crdr-quicklinks` against the global registry.
/// Tags already defined on the page are left alone.
pub fn define_elements() {
    define(Rc::new(ImageElement::new(ImageRegistry::global())));
    define(Rc::new(QuickLinksElement::new()));
}

fn define(element: Rc<dyn CustomElement>) {
    let tag = element.tag();
    let observed: Array = element.observed_attributes().iter().map(|name| JsValue::from_str(name)).collect();

    let on_mount = {
        let element = Rc::clone(&element);
        Closure::<dyn Fn(web_sys::Element)>::new(move |node: web_sys::Element| {
            element.on_mount(&mut DomHost(node));
        })
    };
    let on_change = {
        let element = Rc::clone(&element);
        Closure::<dyn Fn(web_sys::Element, String, Option<String>, Option<String>)>::new(
            move |node: web_sys::Element, name: String, old: Option<String>, new: Option<String>| {
                element.on_attribute_change(&mut DomHost(node), &name, old.as_deref(), new.as_deref());
            },
        )
    };

    if define_crdr_element(tag, observed, on_mount.as_ref().unchecked_ref(), on_change.as_ref().unchecked_ref()) {
        // Definitions live for the page lifetime.
        on_mount.forget();
        on_change.forget();
        tracing::debug!(tag, "custom element defined");
    } else {
        tracing::debug!(tag, "custom element already defined");
    }
}

/// Register an image kind from JavaScript: a string becomes a literal, a
/// function becomes a producer called with an object of the element's
/// attributes. Any other value is kept and reported when resolved.
#[wasm_bindgen(js_name = registerImage)]
pub fn register_image(kind: &str, entry: JsValue) {
    ImageRegistry::global().register(kind, entry_from_js(entry));
}

/// Sorted list of registered kinds.
#[wasm_bindgen(js_name = imageKinds)]
#[must_use]
pub fn image_kinds() -> Array {
    ImageRegistry::global().kinds().into_iter().map(JsValue::from).collect()
}

fn entry_from_js(value: JsValue) -> ImageEntry {
    if let Some(source) = value.as_string() {
        return ImageEntry::literal(source);
    }
    match value.dyn_into::<Function>() {
        Ok(function) => ImageEntry::fallible(move |attrs| call_producer(&function, attrs)),
        Err(other) => ImageEntry::unsupported(other.js_typeof().as_string().unwrap_or_default()),
    }
}

fn call_producer(function: &Function, attrs: &AttributeMap) -> Result<String, String> {
    let object = Object::new();
    for (name, value) in attrs {
        Reflect::set(&object, &JsValue::from_str(name), &JsValue::from_str(value)).map_err(|e| describe(&e))?;
    }
    let result = function.call1(&JsValue::NULL, &object).map_err(|e| describe(&e))?;
    result
        .as_string()
        .ok_or_else(|| format!("producer returned a non-string value: {}", describe(&result)))
}

/// Entry point when loaded as a browser module.
#[cfg(feature = "hydrate")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&JsValue::from_str("crdr: console logger already installed"));
    }
    define_elements();
    tracing::info!(kinds = ImageRegistry::global().len(), "crdr widgets ready");
}
