//! README generation
//!
//! A `ReadmeGenerator` is built per run for one project root. It reads
//! composer.json, the previous README and the optional long description,
//! renders the selected template and writes README.md only when the
//! rendered text differs from what is already on disk.

use crate::errors::{ConfigError, Result};
use crate::template;
use plugin_readme_logger as logger;
use plugin_readme_manifest::{ComposerManifest, PlaceholderMap};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Output file name inside the project root
pub const README_FILE: &str = "README.md";

/// What a generation run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// README.md was (re)written
    Written(PathBuf),
    /// Rendered text matched the existing file; nothing was written
    Unchanged,
}

/// A rendered README plus what it would replace
#[derive(Debug, Clone)]
pub struct RenderedReadme {
    pub template_path: PathBuf,
    pub content: String,
    /// Raw bytes of the existing README.md, empty if absent
    pub previous: Vec<u8>,
}

impl RenderedReadme {
    pub fn is_changed(&self) -> bool {
        self.content.as_bytes() != self.previous.as_slice()
    }
}

#[derive(Debug, Clone)]
pub struct ReadmeGenerator {
    project_root: PathBuf,
    templates_dir: PathBuf,
    default_template: Option<String>,
}

impl ReadmeGenerator {
    pub fn new(project_root: impl Into<PathBuf>, templates_dir: impl Into<PathBuf>) -> Self {
        ReadmeGenerator {
            project_root: project_root.into(),
            templates_dir: templates_dir.into(),
            default_template: None,
        }
    }

    /// Template used when neither the caller nor composer.json names one
    pub fn with_default_template(mut self, name: Option<String>) -> Self {
        self.default_template = name.filter(|n| !n.trim().is_empty());
        self
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn readme_path(&self) -> PathBuf {
        self.project_root.join(README_FILE)
    }

    /// Render the README without touching the filesystem
    pub fn render(&self, template_name: Option<&str>) -> Result<RenderedReadme> {
        let manifest = ComposerManifest::load_from_root(&self.project_root)?;
        let previous = read_optional(&self.readme_path())?;

        logger::progress(&format!("(Re)generate {}", README_FILE));

        let long_description =
            plugin_readme_manifest::read_long_description(&self.project_root)?;
        let placeholders = PlaceholderMap::build(&manifest, &long_description);
        logger::step(&format!("Resolved {} placeholders", placeholders.len()));

        let name = self.select_template_name(template_name, &manifest)?;
        let template_path =
            template::resolve_template(&name, &self.templates_dir, &self.project_root)?;
        logger::progress(&format!("Use template {}", template_path.display()));

        let template_text = std::fs::read_to_string(&template_path)?;
        let content = template::render(&template_text, &placeholders)?;

        Ok(RenderedReadme {
            template_path,
            content,
            previous,
        })
    }

    /// Render and store README.md if it changed
    pub fn generate(&self, template_name: Option<&str>) -> Result<GenerateOutcome> {
        let rendered = self.render(template_name)?;
        let readme_path = self.readme_path();

        if !rendered.is_changed() {
            logger::info(&format!("No changes in {}", README_FILE));
            return Ok(GenerateOutcome::Unchanged);
        }

        logger::progress(&format!("Store changes in {}", README_FILE));
        write_atomic(&readme_path, &rendered.content)?;
        logger::success(&format!("Updated {}", readme_path.display()));
        Ok(GenerateOutcome::Written(readme_path))
    }

    fn select_template_name(
        &self,
        explicit: Option<&str>,
        manifest: &ComposerManifest,
    ) -> std::result::Result<String, ConfigError> {
        if let Some(name) = explicit.map(str::trim).filter(|n| !n.is_empty()) {
            logger::debug(&format!("Template '{}' given on the command line", name));
            return Ok(name.to_string());
        }
        if let Some(name) = manifest.template_name() {
            logger::debug(&format!("Template '{}' configured in composer.json", name));
            return Ok(name);
        }
        if let Some(name) = &self.default_template {
            logger::debug(&format!("Template '{}' taken from tool config", name));
            return Ok(name.clone());
        }
        Err(ConfigError::MissingTemplateName)
    }
}

/// Read a file as raw bytes, treating a missing file as empty
fn read_optional(path: &Path) -> std::io::Result<Vec<u8>> {
    match std::fs::read(path) {
        Ok(content) => Ok(content),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(err) => Err(err),
    }
}

/// Write to a uniquely named temp file next to `path`, then rename over it.
///
/// The temp file is deleted when any step fails.
fn write_atomic(path: &Path, content: &str) -> std::io::Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut temp = tempfile::Builder::new()
        .prefix(".README.md.")
        .suffix(".tmp")
        .tempfile_in(dir)?;
    temp.write_all(content.as_bytes())?;
    temp.flush()?;
    temp.persist(path).map_err(|err| err.error)?;
    Ok(())
}
