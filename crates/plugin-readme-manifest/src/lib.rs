//! Composer manifest handling for plugin-readme
//!
//! This crate loads `composer.json`, exposes typed views over the fields a
//! README cares about, and derives the ordered placeholder map that the
//! renderer substitutes into templates.

pub mod errors;
pub mod manifest;
pub mod placeholders;
pub mod types;

pub use errors::ManifestError;
pub use manifest::MANIFEST_FILE;
pub use placeholders::{
    normalize_long_description, read_long_description, render_keywords, Placeholder,
    PlaceholderMap, AUTOGENERATED_COMMENT, LONG_DESCRIPTION_FILE,
};
pub use types::{Author, ComposerManifest, PluginIdentity};
