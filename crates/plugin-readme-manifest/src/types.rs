//! Typed views over composer.json
//!
//! Composer manifests are loosely typed in practice: `license` may be a
//! string or a list, versions are sometimes numbers, and optional objects
//! are often missing entirely. The document is therefore kept as a
//! `serde_json::Value` and every field is read through a JSON pointer and
//! stringified, so an odd field never aborts a run.

use serde_json::Value;

// =============================================================================
// MANIFEST DOCUMENT
// =============================================================================

/// Parsed composer.json, guaranteed to be a JSON object
#[derive(Debug, Clone, PartialEq)]
pub struct ComposerManifest {
    pub(crate) document: Value,
}

/// Composer `extra` key holding the template name
pub const TEMPLATE_NAME_KEY: &str = "generate_plugin_readme_template";

/// Composer `extra` key holding the plugin identity object
pub const PLUGIN_IDENTITY_KEY: &str = "ilias_plugin";

impl ComposerManifest {
    /// Raw value at a JSON pointer such as `/authors/0/email`
    pub fn lookup(&self, pointer: &str) -> Option<&Value> {
        self.document.pointer(pointer)
    }

    /// Stringified value at a JSON pointer; absent paths yield ""
    pub fn text(&self, pointer: &str) -> String {
        self.lookup(pointer).map(stringify).unwrap_or_default()
    }

    pub fn name(&self) -> String {
        self.text("/name")
    }

    pub fn version(&self) -> String {
        self.text("/version")
    }

    pub fn description(&self) -> String {
        self.text("/description")
    }

    pub fn homepage(&self) -> String {
        self.text("/homepage")
    }

    pub fn license(&self) -> String {
        self.text("/license")
    }

    /// `require.php` version constraint
    pub fn php_version(&self) -> String {
        self.text("/require/php")
    }

    /// `support.issues` URL
    pub fn support_link(&self) -> String {
        self.text("/support/issues")
    }

    /// Keywords as strings. A scalar counts as a one-element list.
    pub fn keywords(&self) -> Vec<String> {
        match self.lookup("/keywords") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items.iter().map(stringify).collect(),
            Some(Value::Object(map)) => map.values().map(stringify).collect(),
            Some(scalar) => vec![stringify(scalar)],
        }
    }

    /// First entry of `authors`, or an empty author
    pub fn first_author(&self) -> Author {
        Author {
            name: self.text("/authors/0/name"),
            email: self.text("/authors/0/email"),
            homepage: self.text("/authors/0/homepage"),
        }
    }

    /// `extra.ilias_plugin`, with missing fields left empty
    pub fn plugin_identity(&self) -> PluginIdentity {
        let field = |name: &str| self.text(&format!("/extra/{}/{}", PLUGIN_IDENTITY_KEY, name));
        PluginIdentity {
            id: field("id"),
            name: field("name"),
            slot: field("slot"),
            min_version: field("ilias_min_version"),
            max_version: field("ilias_max_version"),
        }
    }

    /// Template name configured under `extra`, if non-empty
    pub fn template_name(&self) -> Option<String> {
        let name = self.text(&format!("/extra/{}", TEMPLATE_NAME_KEY));
        if name.trim().is_empty() {
            None
        } else {
            Some(name)
        }
    }
}

// =============================================================================
// NESTED VIEWS
// =============================================================================

/// One `authors` entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub email: String,
    pub homepage: String,
}

/// Installable extension identity and its compatible host-version range
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluginIdentity {
    pub id: String,
    pub name: String,
    pub slot: String,
    pub min_version: String,
    pub max_version: String,
}

/// Render a manifest value as placeholder text
///
/// Strings are used verbatim, numbers use their JSON text, `true` is "1",
/// `false`/`null`/objects are "", and lists are joined with ", ".
pub fn stringify(value: &Value) -> String {
    match value {
        Value::Null | Value::Bool(false) | Value::Object(_) => String::new(),
        Value::Bool(true) => "1".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(stringify)
            .collect::<Vec<_>>()
            .join(", "),
    }
}
