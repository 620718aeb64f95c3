use crate::commands::generate::project_root;
use crate::errors::Result;
use crate::GlobalOpts;
use clap::Parser;
use colored::Colorize;
use plugin_readme_logger as logger;
use plugin_readme_manifest::PlaceholderMap;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Default)]
pub struct PlaceholdersCommand {
    /// Project root containing composer.json (default: current directory)
    #[arg(short, long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Print the placeholder map as a JSON object
    #[arg(long)]
    pub json: bool,
}

/// Render the map as `KEY = value` lines; multi-line values are indented
pub fn format_placeholders(map: &PlaceholderMap, color: bool) -> String {
    let mut output = String::new();
    for (key, value) in map.iter() {
        let token = key.token();
        let key = if color {
            token.cyan().to_string()
        } else {
            token
        };
        let value = value.replace('\n', "\n    ");
        output.push_str(&format!("{} = {}\n", key, value));
    }
    output
}

pub fn handle_placeholders(cmd: PlaceholdersCommand, _opts: &GlobalOpts) -> Result<()> {
    let root = project_root(cmd.root)?;
    logger::debug(&format!("Reading placeholders for {}", root.display()));

    let (_, map) = PlaceholderMap::from_root(&root)?;

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&map)?);
    } else {
        print!("{}", format_placeholders(&map, true));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use plugin_readme_manifest::ComposerManifest;

    #[test]
    fn test_format_placeholders_plain() {
        let Ok(manifest) = r#"{"name":"acme/plugin","keywords":["a","b"]}"#.parse::<ComposerManifest>()
        else {
            return;
        };
        let map = PlaceholderMap::build(&manifest, "");
        let text = format_placeholders(&map, false);

        assert_eq!(text.lines().filter(|l| l.starts_with("__")).count(), map.len());
        assert!(text.contains("__NAME__ = acme/plugin\n"));
        assert!(text.contains("__KEYWORDS__ = - a\n    - b\n"));
    }
}
