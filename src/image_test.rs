use crate::builtins;
use crate::dom::{HostError, Node};
use crate::registry::{ImageEntry, ResolveError};

use super::*;

const WEB: &str = "data:image/png;base64,V0VC";

fn registry() -> Rc<ImageRegistry> {
    let registry = ImageRegistry::new();
    registry.register("logo:Web", ImageEntry::literal(WEB));
    Rc::new(registry)
}

fn connected(el: Element) -> Element {
    let mut el = el;
    el.set_connected(true);
    el
}

fn only_img(host: &Element) -> &Element {
    assert_eq!(host.children().len(), 1, "expected exactly one child");
    let img = host.children()[0].as_element().unwrap();
    assert_eq!(img.tag(), "img");
    img
}

/// Host whose `replace_children` always fails.
struct FailingHost(Element);

impl Host for FailingHost {
    fn attribute(&self, name: &str) -> Option<String> {
        Host::attribute(&self.0, name)
    }

    fn attributes(&self) -> AttributeMap {
        Host::attributes(&self.0)
    }

    fn is_connected(&self) -> bool {
        true
    }

    fn replace_children(&mut self, _children: Vec<Node>) -> Result<(), HostError> {
        Err(HostError::Dom("detached document".into()))
    }
}

// =============================================================
// render
// =============================================================

#[test]
fn renders_literal_with_alt() {
    let widget = ImageElement::new(registry());
    let mut host = connected(Element::new(TAG).with_attribute("kind", "logo:Web").with_attribute("alt", "CRDR"));
    widget.on_mount(&mut host);

    let img = only_img(&host);
    assert_eq!(img.attribute("src"), Some(WEB));
    assert_eq!(img.attribute("alt"), Some("CRDR"));
    assert_eq!(img.attribute("width"), None);
}

#[test]
fn alt_falls_back_to_kind() {
    let widget = ImageElement::new(registry());
    let mut host = connected(Element::new(TAG).with_attribute("kind", "logo:Web"));
    widget.on_mount(&mut host);
    assert_eq!(only_img(&host).attribute("alt"), Some("logo:Web"));
}

#[test]
fn empty_alt_falls_back_to_kind() {
    let widget = ImageElement::new(registry());
    let mut host = connected(Element::new(TAG).with_attribute("kind", "logo:Web").with_attribute("alt", ""));
    widget.on_mount(&mut host);
    assert_eq!(only_img(&host).attribute("alt"), Some("logo:Web"));
}

#[test]
fn width_and_height_pass_through_verbatim() {
    let widget = ImageElement::new(registry());
    let mut host = connected(
        Element::new(TAG)
            .with_attribute("kind", "logo:Web")
            .with_attribute("width", "2em")
            .with_attribute("height", "24"),
    );
    widget.on_mount(&mut host);
    let img = only_img(&host);
    assert_eq!(img.attribute("width"), Some("2em"));
    assert_eq!(img.attribute("height"), Some("24"));
}

#[test]
fn producer_sees_every_attribute() {
    let registry = registry();
    registry.register(
        "badge",
        ImageEntry::producer(|attrs| {
            let keys: Vec<&str> = attrs.keys().map(String::as_str).collect();
            keys.join(",")
        }),
    );
    let widget = ImageElement::new(registry);
    let mut host = connected(
        Element::new(TAG)
            .with_attribute("kind", "badge")
            .with_attribute("alt", "b")
            .with_attribute("data-tone", "warm"),
    );
    widget.on_mount(&mut host);
    assert_eq!(only_img(&host).attribute("src"), Some("alt,data-tone,kind"));
}

#[test]
fn rerender_replaces_previous_image() {
    let widget = ImageElement::new(registry());
    widget.registry().register("logo:User", ImageEntry::literal("data:,user"));
    let mut host = connected(Element::new(TAG).with_attribute("kind", "logo:Web"));
    widget.on_mount(&mut host);

    let old = host.set_attribute("kind", "logo:User");
    widget.on_attribute_change(&mut host, "kind", old.as_deref(), Some("logo:User"));

    let img = only_img(&host);
    assert_eq!(img.attribute("src"), Some("data:,user"));
    assert_eq!(img.attribute("alt"), Some("logo:User"));
}

#[test]
fn later_registration_is_seen_on_next_render() {
    let widget = ImageElement::new(registry());
    let mut host = connected(Element::new(TAG).with_attribute("kind", "logo:Late"));
    widget.on_mount(&mut host);
    assert!(host.children().is_empty());

    widget.registry().register("logo:Late", ImageEntry::literal("data:,late"));
    widget.render(&mut host);
    assert_eq!(only_img(&host).attribute("src"), Some("data:,late"));
}

// =============================================================
// failure paths
// =============================================================

#[test]
fn unknown_kind_leaves_first_render_empty() {
    let widget = ImageElement::new(registry());
    let mut host = connected(Element::new(TAG).with_attribute("kind", "nonexistent-kind"));
    widget.on_mount(&mut host);
    assert!(host.children().is_empty());
}

#[test]
fn failed_rerender_keeps_prior_content() {
    let widget = ImageElement::new(registry());
    let mut host = connected(Element::new(TAG).with_attribute("kind", "logo:Web"));
    widget.on_mount(&mut host);
    let before = host.clone();

    let old = host.set_attribute("kind", "logo:Missing");
    widget.on_attribute_change(&mut host, "kind", old.as_deref(), Some("logo:Missing"));

    assert_eq!(host.children(), before.children());
}

#[test]
fn missing_kind_is_reported() {
    let widget = ImageElement::new(registry());
    let host = Element::new(TAG).with_attribute("alt", "x");
    assert!(matches!(widget.build(&host), Err(RenderError::MissingKind)));
}

#[test]
fn invalid_entry_type_is_reported() {
    let registry = registry();
    registry.register("odd", ImageEntry::unsupported("object"));
    let widget = ImageElement::new(registry);
    let host = Element::new(TAG).with_attribute("kind", "odd");
    assert!(matches!(
        widget.build(&host),
        Err(RenderError::Resolve(ResolveError::InvalidEntryType { .. }))
    ));
}

#[test]
fn host_failure_does_not_escape() {
    let widget = ImageElement::new(registry());
    let mut host = FailingHost(Element::new(TAG).with_attribute("kind", "logo:Web"));
    widget.render(&mut host);
    assert!(host.0.children().is_empty());
}

// =============================================================
// render guard
// =============================================================

#[test]
fn attribute_change_before_mount_does_not_render() {
    let widget = ImageElement::new(registry());
    let mut host = Element::new(TAG);
    host.set_attribute("kind", "logo:Web");
    widget.on_attribute_change(&mut host, "kind", None, Some("logo:Web"));
    assert!(host.children().is_empty());
}

#[test]
fn unobserved_attribute_change_does_not_render() {
    let widget = ImageElement::new(registry());
    let mut host = connected(Element::new(TAG).with_attribute("kind", "logo:Web").with_attribute("alt", "a"));
    widget.on_mount(&mut host);

    host.set_attribute("alt", "b");
    widget.on_attribute_change(&mut host, "alt", Some("a"), Some("b"));
    assert_eq!(only_img(&host).attribute("alt"), Some("a"));
}

#[test]
fn builtin_logo_renders_as_data_uri() {
    let widget = ImageElement::new(Rc::new(ImageRegistry::with_builtins()));
    let mut host = connected(Element::new(TAG).with_attribute("kind", builtins::logo_kind("Web")).with_attribute("alt", "CRDR"));
    widget.on_mount(&mut host);
    let img = only_img(&host);
    assert!(img.attribute("src").is_some_and(|src| src.starts_with("data:image/png;base64,")));
    assert_eq!(img.attribute("alt"), Some("CRDR"));
}
