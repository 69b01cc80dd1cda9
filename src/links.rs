//! Static link descriptors rendered by `<crdr-quicklinks>`.

#[cfg(test)]
#[path = "links_test.rs"]
mod links_test;

use serde::Serialize;

use crate::builtins;

/// One quick link: an icon name, its target and an optional label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LinkDescriptor {
    /// Logo name; the icon kind is `logo:<icon>`.
    pub icon: &'static str,
    pub url: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'static str>,
}

impl LinkDescriptor {
    const fn labeled(icon: &'static str, url: &'static str, label: &'static str) -> Self {
        Self { icon, url, label: Some(label) }
    }

    const fn bare(icon: &'static str, url: &'static str) -> Self {
        Self { icon, url, label: None }
    }

    /// Text shown next to the icon: the label, or the icon name without one.
    #[must_use]
    pub fn display_label(&self) -> &'static str {
        self.label.unwrap_or(self.icon)
    }

    /// Registry kind of this link's icon.
    #[must_use]
    pub fn kind(&self) -> String {
        builtins::logo_kind(self.icon)
    }
}

/// Links in render order.
pub const QUICK_LINKS: [LinkDescriptor; 10] = [
    LinkDescriptor::labeled("Web", "https://www.crdrlabs.org/", "www.crdrlabs.org"),
    LinkDescriptor::labeled("Email", "mailto:crdrlabs@neniam.net", "crdrlabs@neniam.net"),
    LinkDescriptor::labeled("SMS", "sms:+14256107056", "425-610-7056"),
    LinkDescriptor::bare("Mastodon", "https://hachyderm.io/@crdrlabs"),
    LinkDescriptor::bare("Facebook", "https://www.facebook.com/profile.php?id=61581111038860"),
    LinkDescriptor::bare("Instagram", "https://www.instagram.com/crdrlabs/#"),
    LinkDescriptor::bare("Pinterest", "https://www.pinterest.com/crdrlabs"),
    LinkDescriptor::bare("YouTube", "https://www.youtube.com/channel/UCNPX5YtjukWeVPAQpmj2czQ/"),
    LinkDescriptor::bare("LinkedIn", "https://www.linkedin.com/company/crdrlabs"),
    LinkDescriptor::bare("BlueSky", "https://bsky.app/profile/crdrlabs.org"),
];
