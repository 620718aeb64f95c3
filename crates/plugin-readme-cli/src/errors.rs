//! Centralized error types for plugin-readme
//!
//! Manifest problems and configuration problems are kept apart so callers
//! can tell a broken composer.json from a missing template.

use plugin_readme_config::ConfigFileError;
use plugin_readme_manifest::ManifestError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Template selection problems
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Please configure a template name: pass --template or set composer.json > extra > generate_plugin_readme_template")]
    MissingTemplateName,

    #[error("Invalid template reference '{name}': none of {} exist", format_candidates(.searched))]
    InvalidTemplate { name: String, searched: Vec<PathBuf> },
}

fn format_candidates(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors that abort a README generation run
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Settings error: {0}")]
    Settings(#[from] ConfigFileError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to build placeholder pattern: {0}")]
    Template(#[from] regex::Error),

    #[error("Failed to serialize placeholders: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GenerateError>;
