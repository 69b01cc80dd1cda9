//! Image-kind registry: maps a `kind` string to the image source for it.
//!
//! SYSTEM CONTEXT
//! ==============
//! `<crdr-img>` elements look up their `kind` attribute here at render time.
//! An entry is either a literal source (usually a `data:` URI) or a producer
//! that computes the source from the element's attributes. Registration is
//! additive for the lifetime of the registry and the last write for a kind
//! wins.
//!
//! TRADE-OFFS
//! ==========
//! Widgets run on the single UI thread, so entries live behind a `RefCell`
//! and producers are `Rc` closures. The process-wide registry is therefore
//! thread-local rather than a locked static.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::rc::Rc;

use serde_json::Value;

use crate::builtins;

/// Attribute name → value, as collected from an element at render time.
pub type AttributeMap = BTreeMap<String, String>;

/// Computes an image source from an element's attributes.
///
/// Producers registered from Rust are infallible; producers bridged from
/// JavaScript may throw or return a non-string, which surfaces as `Err`.
pub type Producer = Rc<dyn Fn(&AttributeMap) -> Result<String, String>>;

/// One registered image kind.
#[derive(Clone)]
pub enum ImageEntry {
    /// Source returned unchanged for every resolution.
    Literal(String),
    /// Source computed from the element's attributes.
    Producer(Producer),
    /// A value registered through a dynamically typed surface that is neither
    /// a string nor a function. Holds the value's type name.
    Unsupported(String),
}

impl ImageEntry {
    #[must_use]
    pub fn literal(source: impl Into<String>) -> Self {
        Self::Literal(source.into())
    }

    /// Wrap an infallible producer.
    pub fn producer<F>(f: F) -> Self
    where
        F: Fn(&AttributeMap) -> String + 'static,
    {
        Self::Producer(Rc::new(move |attrs: &AttributeMap| -> Result<String, String> { Ok(f(attrs)) }))
    }

    /// Wrap a producer that can fail with a human-readable reason.
    pub fn fallible<F>(f: F) -> Self
    where
        F: Fn(&AttributeMap) -> Result<String, String> + 'static,
    {
        Self::Producer(Rc::new(f))
    }

    #[must_use]
    pub fn unsupported(type_name: impl Into<String>) -> Self {
        Self::Unsupported(type_name.into())
    }

    /// Convert a manifest value: strings become literals, everything else is
    /// kept as an unsupported entry so resolution reports it.
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::String(source) => Self::literal(source.clone()),
            other => Self::unsupported(json_type_name(other)),
        }
    }
}

impl fmt::Debug for ImageEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(source) => f.debug_tuple("Literal").field(&preview(source)).finish(),
            Self::Producer(_) => f.write_str("Producer(..)"),
            Self::Unsupported(type_name) => f.debug_tuple("Unsupported").field(type_name).finish(),
        }
    }
}

/// Reason a kind could not be turned into an image source.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("no generator for kind=\"{kind}\"")]
    UnknownKind { kind: String },
    #[error("generator for kind=\"{kind}\" has unsupported type `{found}`")]
    InvalidEntryType { kind: String, found: String },
    #[error("generator for kind=\"{kind}\" failed: {reason}")]
    ProducerFailed { kind: String, reason: String },
}

/// Error returned by [`ImageRegistry::load_manifest_str`] and
/// [`ImageRegistry::load_manifest`].
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("invalid manifest JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("manifest must be a JSON object mapping kind to source, found {0}")]
    NotAnObject(&'static str),
}

/// Mapping from kind to [`ImageEntry`].
#[derive(Debug, Default)]
pub struct ImageRegistry {
    entries: RefCell<HashMap<String, ImageEntry>>,
}

thread_local! {
    static GLOBAL: Rc<ImageRegistry> = Rc::new(ImageRegistry::with_builtins());
}

impl ImageRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in `logo:*` kinds.
    #[must_use]
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        builtins::install(&registry);
        registry
    }

    /// The shared registry for this thread, seeded with the built-ins on
    /// first access. Only the composition root should reach for this; widgets
    /// receive their registry explicitly.
    #[must_use]
    pub fn global() -> Rc<Self> {
        GLOBAL.with(Rc::clone)
    }

    /// Insert or overwrite the entry for `kind`.
    pub fn register(&self, kind: impl Into<String>, entry: ImageEntry) {
        let kind = kind.into();
        tracing::trace!(kind = %kind, entry = ?entry, "register image kind");
        if self.entries.borrow_mut().insert(kind.clone(), entry).is_some() {
            tracing::debug!(kind = %kind, "image kind re-registered; previous entry replaced");
        }
    }

    /// Turn `kind` plus the element's attributes into an image source.
    pub fn resolve(&self, kind: &str, attrs: &AttributeMap) -> Result<String, ResolveError> {
        // Clone out of the map so producers may register while running.
        let entry = self.entries.borrow().get(kind).cloned();
        match entry {
            None => Err(ResolveError::UnknownKind { kind: kind.to_owned() }),
            Some(ImageEntry::Literal(source)) => Ok(source),
            Some(ImageEntry::Producer(produce)) => {
                produce(attrs).map_err(|reason| ResolveError::ProducerFailed { kind: kind.to_owned(), reason })
            }
            Some(ImageEntry::Unsupported(found)) => Err(ResolveError::InvalidEntryType { kind: kind.to_owned(), found }),
        }
    }

    #[must_use]
    pub fn contains(&self, kind: &str) -> bool {
        self.entries.borrow().contains_key(kind)
    }

    /// All registered kinds in sorted order.
    #[must_use]
    pub fn kinds(&self) -> Vec<String> {
        let mut kinds: Vec<String> = self.entries.borrow().keys().cloned().collect();
        kinds.sort();
        kinds
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Register every `kind → source` pair of a JSON object. Returns the
    /// number of kinds registered.
    pub fn load_manifest(&self, manifest: &Value) -> Result<usize, ManifestError> {
        let Value::Object(map) = manifest else {
            return Err(ManifestError::NotAnObject(json_type_name(manifest)));
        };
        for (kind, value) in map {
            self.register(kind.clone(), ImageEntry::from_json(value));
        }
        tracing::debug!(count = map.len(), "loaded image manifest");
        Ok(map.len())
    }

    /// Parse and load a JSON manifest.
    pub fn load_manifest_str(&self, raw: &str) -> Result<usize, ManifestError> {
        let manifest: Value = serde_json::from_str(raw)?;
        self.load_manifest(&manifest)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Short prefix of a source for debug output; data URIs run to kilobytes.
fn preview(source: &str) -> &str {
    const MAX: usize = 48;
    match source.char_indices().nth(MAX) {
        Some((end, _)) => &source[..end],
        None => source,
    }
}
