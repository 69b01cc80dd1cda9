//! `<crdr-quicklinks>`: a row of icon links built from [`QUICK_LINKS`].
//!
//! SYSTEM CONTEXT
//! ==============
//! Each link becomes an `<a>` holding a `<crdr-img kind="logo:<icon>">`, which
//! the document upgrades into an image once attached. `classpass` is copied
//! verbatim onto every anchor and `uselabel` (presence only) adds a text
//! label after the icon. Rendering always rebuilds from scratch, so it is
//! safe to repeat.

#[cfg(test)]
#[path = "quicklinks_test.rs"]
mod quicklinks_test;

use crate::dom::{Element, Host, Node};
use crate::element::CustomElement;
use crate::image;
use crate::links::{LinkDescriptor, QUICK_LINKS};

pub const TAG: &str = "crdr-quicklinks";

pub const OBSERVED_ATTRIBUTES: &[&str] = &["classpass", "uselabel"];

/// The `<crdr-quicklinks>` widget.
pub struct QuickLinksElement {
    links: &'static [LinkDescriptor],
}

impl Default for QuickLinksElement {
    fn default() -> Self {
        Self { links: &QUICK_LINKS }
    }
}

impl QuickLinksElement {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Render a different link list.
    #[must_use]
    pub fn with_links(links: &'static [LinkDescriptor]) -> Self {
        Self { links }
    }

    #[must_use]
    pub fn links(&self) -> &'static [LinkDescriptor] {
        self.links
    }

    /// Anchors for the host's current `classpass`/`uselabel` settings.
    #[must_use]
    pub fn build(&self, host: &dyn Host) -> Vec<Node> {
        let classpass = host.attribute("classpass");
        let uselabel = host.has_attribute("uselabel");
        self.links
            .iter()
            .map(|link| Node::from(anchor(link, classpass.as_deref(), uselabel)))
            .collect()
    }
}

impl CustomElement for QuickLinksElement {
    fn tag(&self) -> &'static str {
        TAG
    }

    fn observed_attributes(&self) -> &'static [&'static str] {
        OBSERVED_ATTRIBUTES
    }

    fn render(&self, host: &mut dyn Host) {
        let anchors = self.build(&*host);
        if let Err(e) = host.replace_children(anchors) {
            tracing::warn!(tag = TAG, error = %e, "quick links render skipped");
        }
    }
}

fn anchor(link: &LinkDescriptor, classpass: Option<&str>, uselabel: bool) -> Element {
    let mut a = Element::new("a").with_attribute("href", link.url);
    if let Some(class) = classpass {
        a.set_attribute("class", class);
    }
    if uselabel {
        a.append_child(Node::text(format!(" {}", link.display_label())));
    }
    let icon = Element::new(image::TAG).with_attribute("kind", link.kind()).with_attribute("alt", link.icon);
    a.prepend_child(icon);
    a
}
