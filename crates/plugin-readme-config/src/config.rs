use crate::errors::ConfigFileError;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Keys accepted by `get`/`set`, in display order
pub const CONFIG_KEYS: [&str; 2] = ["templates-dir", "default-template"];

/// Persistent tool settings
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Built-in template directory, checked before the project root
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templates_dir: Option<String>,
    /// Template used when neither the CLI nor composer.json names one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_template: Option<String>,
}

impl Config {
    /// Config file location, honoring `PLUGIN_README_CONFIG`
    pub fn path() -> Result<PathBuf, ConfigFileError> {
        let explicit = paths::non_empty_env(paths::CONFIG_ENV);
        paths::resolve_config_path(explicit.as_deref())
    }

    pub fn load() -> Result<Self, ConfigFileError> {
        Self::load_from(&Self::path()?)
    }

    /// Load from a specific file. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn save(&self) -> Result<PathBuf, ConfigFileError> {
        let path = Self::path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigFileError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<Option<String>, ConfigFileError> {
        match key {
            "templates-dir" => Ok(self.templates_dir.clone()),
            "default-template" => Ok(self.default_template.clone()),
            _ => Err(ConfigFileError::UnknownKey(key.to_string())),
        }
    }

    pub fn set(&mut self, key: &str, value: String) -> Result<(), ConfigFileError> {
        match key {
            "templates-dir" => self.templates_dir = Some(value),
            "default-template" => self.default_template = Some(value),
            _ => return Err(ConfigFileError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.templates_dir.is_none() && self.default_template.is_none()
    }

    pub fn values_iter(&self) -> Vec<(&str, String)> {
        let mut values = Vec::new();
        if let Some(ref val) = self.templates_dir {
            values.push(("templates-dir", val.clone()));
        }
        if let Some(ref val) = self.default_template {
            values.push(("default-template", val.clone()));
        }
        values
    }

    /// Built-in template directory for this run
    ///
    /// A CLI flag wins over `PLUGIN_README_TEMPLATES_DIR`, which wins over
    /// the config file, which wins over the platform default.
    pub fn templates_dir(&self, cli: Option<&Path>) -> Result<PathBuf, ConfigFileError> {
        let env = paths::non_empty_env(paths::TEMPLATES_DIR_ENV);
        paths::resolve_templates_dir(cli, env.as_deref(), self.templates_dir.as_deref())
    }

    /// Configured fallback template name, ignoring blank values
    pub fn default_template(&self) -> Option<&str> {
        self.default_template
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}
