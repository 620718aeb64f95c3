use std::io;
use thiserror::Error;

/// Errors that can occur while loading or saving the tool configuration
#[derive(Error, Debug)]
pub enum ConfigFileError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config file: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Unknown config key '{0}' (expected one of: templates-dir, default-template)")]
    UnknownKey(String),

    #[error("Could not determine home directory")]
    NoHomeDir,
}
