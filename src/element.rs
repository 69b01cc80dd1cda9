//! Custom-element lifecycle shared by every widget.
//!
//! A widget is mounted when its host is attached to a document and is told
//! about attribute changes afterwards. Rendering is always a full rebuild of
//! the host's children, so mounting and re-rendering are the same operation.

use crate::dom::{Host, HostError};
use crate::registry::ResolveError;

/// Why a render was skipped. Never escapes a widget; it is logged instead.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("missing `kind` attribute")]
    MissingKind,
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error(transparent)]
    Host(#[from] HostError),
}

/// Lifecycle hooks of a custom element.
pub trait CustomElement {
    /// Tag name the element is defined under, e.g. `crdr-img`.
    fn tag(&self) -> &'static str;

    /// Attributes whose changes are reported to [`CustomElement::on_attribute_change`].
    fn observed_attributes(&self) -> &'static [&'static str];

    /// Rebuild the host's children. Failures are logged and leave the
    /// previous children in place.
    fn render(&self, host: &mut dyn Host);

    /// Called when the host is attached to a document.
    fn on_mount(&self, host: &mut dyn Host) {
        self.render(host);
    }

    /// Called whenever an attribute of the host is set or removed.
    fn on_attribute_change(&self, host: &mut dyn Host, name: &str, old: Option<&str>, new: Option<&str>) {
        if should_rerender(self.observed_attributes(), host.is_connected(), name, old, new) {
            self.render(host);
        }
    }
}

/// Render guard for attribute changes: only an actual change of an observed
/// attribute on an attached host triggers a render. Unattached hosts render
/// on mount instead.
#[must_use]
pub fn should_rerender(observed: &[&str], connected: bool, name: &str, old: Option<&str>, new: Option<&str>) -> bool {
    connected && old != new && observed.contains(&name)
}
