//! `<crdr-img>`: renders one `<img>` whose source comes from the registry.
//!
//! SYSTEM CONTEXT
//! ==============
//! The element's `kind` attribute selects a registry entry; every attribute
//! on the element (including `kind`) is passed to producers. `width` and
//! `height` are copied to the `<img>` verbatim, and `alt` falls back to the
//! kind. A failed resolution leaves the element's previous content intact.

#[cfg(test)]
#[path = "image_test.rs"]
mod image_test;

use std::rc::Rc;

use crate::dom::{Element, Host};
use crate::element::{CustomElement, RenderError};
use crate::registry::{AttributeMap, ImageRegistry};

pub const TAG: &str = "crdr-img";

/// Only `kind` changes trigger a re-render.
pub const OBSERVED_ATTRIBUTES: &[&str] = &["kind"];

/// Attributes copied from the element onto the rendered `<img>`.
const PASSTHROUGH: &[&str] = &["width", "height"];

/// The `<crdr-img>` widget, bound to the registry it resolves against.
pub struct ImageElement {
    registry: Rc<ImageRegistry>,
}

impl ImageElement {
    #[must_use]
    pub fn new(registry: Rc<ImageRegistry>) -> Self {
        Self { registry }
    }

    #[must_use]
    pub fn registry(&self) -> &ImageRegistry {
        &self.registry
    }

    /// Resolve the host's attributes into the `<img>` it should contain.
    pub fn build(&self, host: &dyn Host) -> Result<Element, RenderError> {
        let kind = host.attribute("kind").ok_or(RenderError::MissingKind)?;
        let attrs = host.attributes();
        let source = self.registry.resolve(&kind, &attrs)?;
        Ok(image_node(&kind, source, &attrs))
    }

    fn try_render(&self, host: &mut dyn Host) -> Result<(), RenderError> {
        let img = self.build(&*host)?;
        host.replace_children(vec![img.into()])?;
        Ok(())
    }
}

impl CustomElement for ImageElement {
    fn tag(&self) -> &'static str {
        TAG
    }

    fn observed_attributes(&self) -> &'static [&'static str] {
        OBSERVED_ATTRIBUTES
    }

    fn render(&self, host: &mut dyn Host) {
        if let Err(e) = self.try_render(host) {
            tracing::warn!(tag = TAG, kind = ?host.attribute("kind"), error = %e, "image render skipped");
        }
    }
}

/// Build the `<img>` for a resolved `source`.
#[must_use]
pub fn image_node(kind: &str, source: String, attrs: &AttributeMap) -> Element {
    let mut img = Element::new("img").with_attribute("src", source);
    for name in PASSTHROUGH {
        if let Some(value) = attrs.get(*name).filter(|v| !v.is_empty()) {
            img.set_attribute(*name, value.clone());
        }
    }
    let alt = attrs.get("alt").filter(|v| !v.is_empty()).map_or(kind, String::as_str);
    img.set_attribute("alt", alt);
    img
}
