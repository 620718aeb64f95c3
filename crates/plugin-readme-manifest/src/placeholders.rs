//! Placeholder map construction
//!
//! Every placeholder is a `__KEY__` token. The map is built once per run
//! from the manifest and the optional long description, then handed to the
//! renderer unchanged.

use crate::errors::ManifestError;
use crate::manifest::MANIFEST_FILE;
use crate::types::ComposerManifest;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Long description file, relative to the project root
pub const LONG_DESCRIPTION_FILE: &str = "src/LONG_DESCRIPTION.md";

/// Prefix of the plugin install path inside the host application
pub const PLUGIN_BASE_PATH_PREFIX: &str = "Customizing/global/plugins/";

/// Warning embedded into generated files
pub const AUTOGENERATED_COMMENT: &str =
    "Autogenerated from composer.json - All changes will be overridden if generated again!";

/// Placeholder names in map order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    AuthorEmail,
    AuthorHomepage,
    AuthorName,
    AutogeneratedComment,
    GithubRepo,
    Homepage,
    Keywords,
    IliasPluginBaseSlotPath,
    IliasPluginId,
    IliasPluginMaxIliasVersion,
    IliasPluginMinIliasVersion,
    IliasPluginName,
    IliasPluginSlot,
    License,
    LongDescription,
    Name,
    PhpVersion,
    ShortDescription,
    SupportLink,
    Version,
}

impl Placeholder {
    pub const ALL: [Placeholder; 20] = [
        Placeholder::AuthorEmail,
        Placeholder::AuthorHomepage,
        Placeholder::AuthorName,
        Placeholder::AutogeneratedComment,
        Placeholder::GithubRepo,
        Placeholder::Homepage,
        Placeholder::Keywords,
        Placeholder::IliasPluginBaseSlotPath,
        Placeholder::IliasPluginId,
        Placeholder::IliasPluginMaxIliasVersion,
        Placeholder::IliasPluginMinIliasVersion,
        Placeholder::IliasPluginName,
        Placeholder::IliasPluginSlot,
        Placeholder::License,
        Placeholder::LongDescription,
        Placeholder::Name,
        Placeholder::PhpVersion,
        Placeholder::ShortDescription,
        Placeholder::SupportLink,
        Placeholder::Version,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Placeholder::AuthorEmail => "AUTHOR_EMAIL",
            Placeholder::AuthorHomepage => "AUTHOR_HOMEPAGE",
            Placeholder::AuthorName => "AUTHOR_NAME",
            Placeholder::AutogeneratedComment => "AUTOGENERATED_COMMENT",
            Placeholder::GithubRepo => "GITHUB_REPO",
            Placeholder::Homepage => "HOMEPAGE",
            Placeholder::Keywords => "KEYWORDS",
            Placeholder::IliasPluginBaseSlotPath => "ILIAS_PLUGIN_BASE_SLOT_PATH",
            Placeholder::IliasPluginId => "ILIAS_PLUGIN_ID",
            Placeholder::IliasPluginMaxIliasVersion => "ILIAS_PLUGIN_MAX_ILIAS_VERSION",
            Placeholder::IliasPluginMinIliasVersion => "ILIAS_PLUGIN_MIN_ILIAS_VERSION",
            Placeholder::IliasPluginName => "ILIAS_PLUGIN_NAME",
            Placeholder::IliasPluginSlot => "ILIAS_PLUGIN_SLOT",
            Placeholder::License => "LICENSE",
            Placeholder::LongDescription => "LONG_DESCRIPTION",
            Placeholder::Name => "NAME",
            Placeholder::PhpVersion => "PHP_VERSION",
            Placeholder::ShortDescription => "SHORT_DESCRIPTION",
            Placeholder::SupportLink => "SUPPORT_LINK",
            Placeholder::Version => "VERSION",
        }
    }

    /// Template token, e.g. `__NAME__`
    pub fn token(self) -> String {
        format!("__{}__", self.as_str())
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered placeholder name to value mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderMap {
    entries: Vec<(Placeholder, String)>,
}

impl PlaceholderMap {
    /// Derive all placeholder values from a manifest and long description
    pub fn build(manifest: &ComposerManifest, long_description: &str) -> Self {
        let author = manifest.first_author();
        let identity = manifest.plugin_identity();
        let homepage = manifest.homepage();

        let entries = Placeholder::ALL
            .into_iter()
            .map(|key| {
                let value = match key {
                    Placeholder::AuthorEmail => author.email.clone(),
                    Placeholder::AuthorHomepage => author.homepage.clone(),
                    Placeholder::AuthorName => author.name.clone(),
                    Placeholder::AutogeneratedComment => AUTOGENERATED_COMMENT.to_string(),
                    Placeholder::GithubRepo => format!("{}.git", homepage),
                    Placeholder::Homepage => homepage.clone(),
                    Placeholder::Keywords => render_keywords(&manifest.keywords()),
                    Placeholder::IliasPluginBaseSlotPath => {
                        format!("{}{}", PLUGIN_BASE_PATH_PREFIX, identity.slot)
                    }
                    Placeholder::IliasPluginId => identity.id.clone(),
                    Placeholder::IliasPluginMaxIliasVersion => identity.max_version.clone(),
                    Placeholder::IliasPluginMinIliasVersion => identity.min_version.clone(),
                    Placeholder::IliasPluginName => identity.name.clone(),
                    Placeholder::IliasPluginSlot => identity.slot.clone(),
                    Placeholder::License => manifest.license(),
                    Placeholder::LongDescription => long_description.to_string(),
                    Placeholder::Name => manifest.name(),
                    Placeholder::PhpVersion => manifest.php_version(),
                    Placeholder::ShortDescription => manifest.description(),
                    Placeholder::SupportLink => manifest.support_link(),
                    Placeholder::Version => manifest.version(),
                };
                (key, value)
            })
            .collect();

        PlaceholderMap { entries }
    }

    /// Load the manifest and long description of a project root and build the map
    pub fn from_root(root: &Path) -> Result<(ComposerManifest, Self), ManifestError> {
        let manifest = ComposerManifest::load_from_root(root)?;
        let long_description = read_long_description(root)?;
        let map = Self::build(&manifest, &long_description);
        debug!(
            "Built {} placeholders from {}",
            map.len(),
            root.join(MANIFEST_FILE).display()
        );
        Ok((manifest, map))
    }

    pub fn get(&self, key: Placeholder) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Placeholder, &str)> {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for PlaceholderMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key.as_str(), value)?;
        }
        map.end()
    }
}

/// One `- keyword` line per keyword, newline separated
pub fn render_keywords(keywords: &[String]) -> String {
    keywords
        .iter()
        .map(|keyword| format!("- {}", keyword))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Trim the long description and rebase `../docs/` links to `./doc/`
pub fn normalize_long_description(raw: &str) -> String {
    raw.trim().replace("../docs/", "./doc/")
}

pub fn long_description_path(root: &Path) -> PathBuf {
    root.join(LONG_DESCRIPTION_FILE)
}

/// Read `<root>/src/LONG_DESCRIPTION.md`; a missing file yields ""
pub fn read_long_description(root: &Path) -> Result<String, ManifestError> {
    let path = long_description_path(root);
    match std::fs::read_to_string(&path) {
        Ok(raw) => {
            debug!("Read long description from {:?}", path);
            Ok(normalize_long_description(&raw))
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(String::new()),
        Err(err) => Err(ManifestError::Io(err)),
    }
}
