use std::cell::Cell;

use serde_json::json;

use super::*;

fn attrs(pairs: &[(&str, &str)]) -> AttributeMap {
    pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
}

// =============================================================
// resolve
// =============================================================

#[test]
fn literal_resolves_unchanged_regardless_of_attributes() {
    let registry = ImageRegistry::new();
    registry.register("logo:Test", ImageEntry::literal("data:image/png;base64,AAAA"));

    for map in [attrs(&[]), attrs(&[("kind", "logo:Test")]), attrs(&[("width", "64"), ("x-color", "red")])] {
        assert_eq!(registry.resolve("logo:Test", &map).unwrap(), "data:image/png;base64,AAAA");
    }
}

#[test]
fn producer_receives_the_attribute_map() {
    let registry = ImageRegistry::new();
    registry.register(
        "avatar",
        ImageEntry::producer(|attrs| {
            let user = attrs.get("user").map_or("anon", String::as_str);
            let size = attrs.get("width").map_or("32", String::as_str);
            format!("https://img.example/{user}?s={size}")
        }),
    );

    let map = attrs(&[("kind", "avatar"), ("user", "ada"), ("width", "48")]);
    assert_eq!(registry.resolve("avatar", &map).unwrap(), "https://img.example/ada?s=48");
    assert_eq!(registry.resolve("avatar", &attrs(&[])).unwrap(), "https://img.example/anon?s=32");
}

#[test]
fn unknown_kind_is_reported() {
    let registry = ImageRegistry::new();
    let err = registry.resolve("nonexistent-kind", &AttributeMap::new()).unwrap_err();
    assert_eq!(err, ResolveError::UnknownKind { kind: "nonexistent-kind".into() });
}

#[test]
fn unsupported_entry_is_invalid_entry_type() {
    let registry = ImageRegistry::new();
    registry.register("odd", ImageEntry::unsupported("number"));
    let err = registry.resolve("odd", &AttributeMap::new()).unwrap_err();
    assert_eq!(err, ResolveError::InvalidEntryType { kind: "odd".into(), found: "number".into() });
}

#[test]
fn failing_producer_is_reported_with_reason() {
    let registry = ImageRegistry::new();
    registry.register("broken", ImageEntry::fallible(|_| Err("boom".to_owned())));
    let err = registry.resolve("broken", &AttributeMap::new()).unwrap_err();
    assert_eq!(err, ResolveError::ProducerFailed { kind: "broken".into(), reason: "boom".into() });
    assert!(err.to_string().contains("boom"));
}

#[test]
fn error_messages_name_the_kind() {
    let err = ResolveError::UnknownKind { kind: "logo:Nope".into() };
    assert_eq!(err.to_string(), "no generator for kind=\"logo:Nope\"");
}

// =============================================================
// register
// =============================================================

#[test]
fn last_registration_wins() {
    let registry = ImageRegistry::new();
    registry.register("k", ImageEntry::literal("first"));
    registry.register("k", ImageEntry::producer(|_| "second".to_owned()));
    assert_eq!(registry.resolve("k", &AttributeMap::new()).unwrap(), "second");

    registry.register("k", ImageEntry::literal("third"));
    assert_eq!(registry.resolve("k", &AttributeMap::new()).unwrap(), "third");
    assert_eq!(registry.len(), 1);
}

#[test]
fn producer_may_register_while_resolving() {
    let registry = Rc::new(ImageRegistry::new());
    let inner = Rc::clone(&registry);
    registry.register(
        "lazy",
        ImageEntry::producer(move |_| {
            inner.register("lazy:cached", ImageEntry::literal("cached"));
            "computed".to_owned()
        }),
    );

    assert_eq!(registry.resolve("lazy", &AttributeMap::new()).unwrap(), "computed");
    assert_eq!(registry.resolve("lazy:cached", &AttributeMap::new()).unwrap(), "cached");
}

#[test]
fn producer_runs_on_every_resolution() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let registry = ImageRegistry::new();
    registry.register(
        "counted",
        ImageEntry::producer(move |_| {
            counter.set(counter.get() + 1);
            "x".to_owned()
        }),
    );

    registry.resolve("counted", &AttributeMap::new()).unwrap();
    registry.resolve("counted", &AttributeMap::new()).unwrap();
    assert_eq!(calls.get(), 2);
}

#[test]
fn kinds_are_sorted() {
    let registry = ImageRegistry::new();
    registry.register("b", ImageEntry::literal("b"));
    registry.register("a", ImageEntry::literal("a"));
    registry.register("c", ImageEntry::literal("c"));
    assert_eq!(registry.kinds(), vec!["a", "b", "c"]);
    assert!(registry.contains("a"));
    assert!(!registry.contains("d"));
}

#[test]
fn new_registry_is_empty() {
    let registry = ImageRegistry::new();
    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);
}

// =============================================================
// builtins / global
// =============================================================

#[test]
fn with_builtins_registers_every_logo() {
    let registry = ImageRegistry::with_builtins();
    for name in ["Web", "Email", "SMS", "Mastodon", "Facebook", "Instagram", "Pinterest", "YouTube", "LinkedIn", "BlueSky", "User"] {
        let source = registry.resolve(&format!("logo:{name}"), &AttributeMap::new()).unwrap();
        assert!(source.starts_with("data:image/png;base64,"), "logo:{name}");
    }
    assert_eq!(registry.len(), 11);
}

#[test]
fn global_is_shared_and_seeded() {
    let a = ImageRegistry::global();
    let b = ImageRegistry::global();
    assert!(Rc::ptr_eq(&a, &b));
    assert!(a.contains("logo:Web"));
}

// =============================================================
// manifest
// =============================================================

#[test]
fn manifest_strings_become_literals() {
    let registry = ImageRegistry::new();
    let count = registry
        .load_manifest(&json!({ "logo:Site": "https://example.org/site.png", "logo:Alt": "data:," }))
        .unwrap();
    assert_eq!(count, 2);
    assert_eq!(registry.resolve("logo:Site", &AttributeMap::new()).unwrap(), "https://example.org/site.png");
}

#[test]
fn manifest_non_strings_fail_on_resolve() {
    let registry = ImageRegistry::new();
    registry.load_manifest_str(r#"{ "logo:Num": 42, "logo:List": [] }"#).unwrap();
    assert_eq!(
        registry.resolve("logo:Num", &AttributeMap::new()).unwrap_err(),
        ResolveError::InvalidEntryType { kind: "logo:Num".into(), found: "number".into() }
    );
    assert_eq!(
        registry.resolve("logo:List", &AttributeMap::new()).unwrap_err(),
        ResolveError::InvalidEntryType { kind: "logo:List".into(), found: "array".into() }
    );
}

#[test]
fn manifest_must_be_an_object() {
    let registry = ImageRegistry::new();
    let err = registry.load_manifest(&json!(["logo:Web"])).unwrap_err();
    assert!(matches!(err, ManifestError::NotAnObject("array")));
    assert!(registry.is_empty());
}

#[test]
fn manifest_rejects_malformed_json() {
    let registry = ImageRegistry::new();
    assert!(matches!(registry.load_manifest_str("{ nope"), Err(ManifestError::Json(_))));
}

#[test]
fn debug_output_truncates_long_literals() {
    let entry = ImageEntry::literal("x".repeat(500));
    let rendered = format!("{entry:?}");
    assert!(rendered.len() < 100);
    assert_eq!(format!("{:?}", ImageEntry::producer(|_| String::new())), "Producer(..)");
}
