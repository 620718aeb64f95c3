use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading composer.json and its companion files
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Manifest not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse manifest: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid manifest: top-level value must be a JSON object")]
    NotAnObject,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display_includes_path() {
        let err = ManifestError::NotFound(PathBuf::from("/project/composer.json"));
        assert_eq!(err.to_string(), "Manifest not found: /project/composer.json");
    }
}
