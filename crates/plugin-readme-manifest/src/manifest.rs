//! Manifest loading
//!
//! composer.json is read fresh on every run; nothing is cached between
//! invocations.

use crate::errors::ManifestError;
use crate::types::ComposerManifest;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

/// Manifest file name inside a project root
pub const MANIFEST_FILE: &str = "composer.json";

impl ComposerManifest {
    /// Path of the manifest for a project root
    pub fn path_in(root: &Path) -> PathBuf {
        root.join(MANIFEST_FILE)
    }

    /// Load `<root>/composer.json`
    pub fn load_from_root(root: &Path) -> Result<Self, ManifestError> {
        Self::load_from_path(&Self::path_in(root))
    }

    /// Load a manifest from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, ManifestError> {
        debug!("Reading manifest from {:?}", path);

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(ManifestError::NotFound(path.to_path_buf()));
            }
            Err(err) => return Err(ManifestError::Io(err)),
        };

        content.parse()
    }
}

impl FromStr for ComposerManifest {
    type Err = ManifestError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let document: Value = serde_json::from_str(content)?;
        if !document.is_object() {
            return Err(ManifestError::NotAnObject);
        }
        Ok(ComposerManifest { document })
    }
}
