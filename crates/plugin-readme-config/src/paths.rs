//! Platform-specific default locations
//!
//! This module resolves the default config file and built-in template
//! directory. Both can be overridden through environment variables so that
//! tests and CI runs stay isolated from the user's home directory.

use crate::errors::ConfigFileError;
use std::path::{Path, PathBuf};

/// Name of the directory used under the platform config/data directories
pub const APP_DIR: &str = "plugin-readme";

/// Config file name inside the config directory
pub const CONFIG_FILE_NAME: &str = "plugin-readme.toml";

/// Env var pointing at an explicit config file
pub const CONFIG_ENV: &str = "PLUGIN_README_CONFIG";

/// Env var pointing at the built-in template directory
pub const TEMPLATES_DIR_ENV: &str = "PLUGIN_README_TEMPLATES_DIR";

/// Read an env var, treating empty or whitespace-only values as unset
pub fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Default config directory
///
/// - **Unix/macOS**: `~/.config/plugin-readme`
/// - **Windows**: `%APPDATA%\plugin-readme`
pub fn default_config_dir() -> Result<PathBuf, ConfigFileError> {
    #[cfg(not(target_os = "windows"))]
    let dir = dirs::home_dir()
        .ok_or(ConfigFileError::NoHomeDir)?
        .join(".config")
        .join(APP_DIR);

    #[cfg(target_os = "windows")]
    let dir = dirs::config_dir()
        .ok_or(ConfigFileError::NoHomeDir)?
        .join(APP_DIR);

    Ok(dir)
}

/// Default built-in template directory
///
/// - **Unix/macOS**: `~/.local/share/plugin-readme/templates`
/// - **Windows**: `%APPDATA%\plugin-readme\templates`
pub fn default_templates_dir() -> Result<PathBuf, ConfigFileError> {
    #[cfg(not(target_os = "windows"))]
    let dir = dirs::home_dir()
        .ok_or(ConfigFileError::NoHomeDir)?
        .join(".local")
        .join("share")
        .join(APP_DIR)
        .join("templates");

    #[cfg(target_os = "windows")]
    let dir = dirs::data_dir()
        .ok_or(ConfigFileError::NoHomeDir)?
        .join(APP_DIR)
        .join("templates");

    Ok(dir)
}

/// Resolve the config file path from an optional explicit override
pub fn resolve_config_path(explicit: Option<&str>) -> Result<PathBuf, ConfigFileError> {
    match explicit {
        Some(path) => Ok(PathBuf::from(path)),
        None => Ok(default_config_dir()?.join(CONFIG_FILE_NAME)),
    }
}

/// Pick the first available template directory
///
/// Order: CLI flag, env var, config file value, platform default.
pub fn resolve_templates_dir(
    cli: Option<&Path>,
    env: Option<&str>,
    configured: Option<&str>,
) -> Result<PathBuf, ConfigFileError> {
    if let Some(dir) = cli {
        return Ok(dir.to_path_buf());
    }
    if let Some(dir) = env {
        return Ok(PathBuf::from(dir));
    }
    if let Some(dir) = configured.filter(|d| !d.trim().is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    default_templates_dir()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_config_path_wins() {
        let path = resolve_config_path(Some("/tmp/custom.toml"));
        assert!(path.is_ok_and(|p| p == PathBuf::from("/tmp/custom.toml")));
    }

    #[test]
    fn test_default_config_path_file_name() {
        let Ok(path) = resolve_config_path(None) else {
            return;
        };
        assert!(path.ends_with(Path::new(APP_DIR).join(CONFIG_FILE_NAME)));
    }

    #[test]
    fn test_templates_dir_precedence() {
        let cli = PathBuf::from("/from/cli");
        let resolved = resolve_templates_dir(Some(&cli), Some("/from/env"), Some("/from/config"));
        assert!(resolved.is_ok_and(|p| p == cli));

        let resolved = resolve_templates_dir(None, Some("/from/env"), Some("/from/config"));
        assert!(resolved.is_ok_and(|p| p == PathBuf::from("/from/env")));

        let resolved = resolve_templates_dir(None, None, Some("/from/config"));
        assert!(resolved.is_ok_and(|p| p == PathBuf::from("/from/config")));
    }

    #[test]
    fn test_blank_configured_dir_falls_back_to_default() {
        let Ok(default) = default_templates_dir() else {
            return;
        };
        let resolved = resolve_templates_dir(None, None, Some("  "));
        assert!(resolved.is_ok_and(|p| p == default));
    }
}
