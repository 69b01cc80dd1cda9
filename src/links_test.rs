use crate::registry::ImageRegistry;

use super::*;

#[test]
fn every_icon_has_a_builtin_logo() {
    let registry = ImageRegistry::with_builtins();
    for link in QUICK_LINKS {
        assert!(registry.contains(&link.kind()), "missing logo for {}", link.icon);
    }
}

#[test]
fn display_label_falls_back_to_icon() {
    assert_eq!(QUICK_LINKS[0].display_label(), "www.crdrlabs.org");
    assert_eq!(QUICK_LINKS[3].display_label(), "Mastodon");
}

#[test]
fn order_is_fixed() {
    let icons: Vec<&str> = QUICK_LINKS.iter().map(|l| l.icon).collect();
    assert_eq!(
        icons,
        vec!["Web", "Email", "SMS", "Mastodon", "Facebook", "Instagram", "Pinterest", "YouTube", "LinkedIn", "BlueSky"]
    );
}

#[test]
fn serializes_without_missing_label() {
    let json = serde_json::to_value(QUICK_LINKS[3]).unwrap();
    assert_eq!(json, serde_json::json!({ "icon": "Mastodon", "url": "https://hachyderm.io/@crdrlabs" }));

    let json = serde_json::to_value(QUICK_LINKS[2]).unwrap();
    assert_eq!(json["label"], "425-610-7056");
}
