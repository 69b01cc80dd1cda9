//! Image-kind registry and quick-links widgets for the CRDR site.
//!
//! The crate compiles to WebAssembly and defines two custom elements:
//! `<crdr-img kind="...">`, which resolves its `kind` against an
//! [`ImageRegistry`] and renders an `<img>`, and `<crdr-quicklinks>`, which
//! renders the site's contact links with a `<crdr-img>` icon each. The same
//! widget code renders into an in-memory tree for tests and static output.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`registry`] | Kind → literal/producer registry and resolution errors |
//! | [`builtins`] | Embedded `logo:*` images registered at load time |
//! | [`links`] | Static link descriptors |
//! | [`dom`] | `Host` trait and the in-memory element tree |
//! | [`element`] | Custom-element lifecycle trait and render guard |
//! | [`image`] | `<crdr-img>` widget |
//! | [`quicklinks`] | `<crdr-quicklinks>` widget |
//! | [`document`] | In-memory custom-element runtime |
//! | [`browser`] | wasm-bindgen bridge to the real DOM |

pub mod browser;
pub mod builtins;
pub mod document;
pub mod dom;
pub mod element;
pub mod image;
pub mod links;
pub mod quicklinks;
pub mod registry;

pub use document::Document;
pub use registry::{AttributeMap, ImageEntry, ImageRegistry, ResolveError};
