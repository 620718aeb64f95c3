//! Template lookup and placeholder substitution
//!
//! Substitution is a single left-to-right pass: inserted values are never
//! scanned again, and tokens that are not placeholder names stay as they are.

use crate::errors::{ConfigError, GenerateError};
use plugin_readme_manifest::PlaceholderMap;
use regex::{Captures, Regex};
use std::path::{Path, PathBuf};

/// Suffix appended to a template name to form its file name
pub const TEMPLATE_SUFFIX: &str = "_README.md";

/// File name for a template name, e.g. `ilias` -> `ilias_README.md`
pub fn template_file_name(name: &str) -> String {
    format!("{}{}", name, TEMPLATE_SUFFIX)
}

/// Candidate template files in lookup order
pub fn template_candidates(name: &str, templates_dir: &Path, project_root: &Path) -> Vec<PathBuf> {
    let file_name = template_file_name(name);
    vec![templates_dir.join(&file_name), project_root.join(&file_name)]
}

/// Find a template: built-in directory first, then the project root
pub fn resolve_template(
    name: &str,
    templates_dir: &Path,
    project_root: &Path,
) -> Result<PathBuf, ConfigError> {
    let searched = template_candidates(name, templates_dir, project_root);
    searched
        .iter()
        .find(|candidate| candidate.is_file())
        .cloned()
        .ok_or_else(|| ConfigError::InvalidTemplate {
            name: name.to_string(),
            searched,
        })
}

/// Replace every `__KEY__` token for the keys in `placeholders`
pub fn render(template: &str, placeholders: &PlaceholderMap) -> Result<String, GenerateError> {
    if placeholders.is_empty() {
        return Ok(template.to_string());
    }

    let alternatives = placeholders
        .iter()
        .map(|(key, _)| regex::escape(key.as_str()))
        .collect::<Vec<_>>()
        .join("|");
    let pattern = Regex::new(&format!("__({})__", alternatives))?;

    let rendered = pattern.replace_all(template, |caps: &Captures| {
        let key = caps.get(1).map_or("", |m| m.as_str());
        placeholders
            .iter()
            .find(|(k, _)| k.as_str() == key)
            .map(|(_, value)| value.to_string())
            .unwrap_or_default()
    });

    Ok(rendered.into_owned())
}
