use crate::errors::Result;
use crate::GlobalOpts;
use clap::Subcommand;
use colored::Colorize;
use plugin_readme_config::{Config, CONFIG_KEYS};
use plugin_readme_logger as logger;

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show all configured values
    Show,
    /// Print a single value
    Get { key: String },
    /// Set a value and save the config file
    Set { key: String, value: String },
    /// Print the path to the config file
    Path,
}

pub fn handle_config(action: Option<ConfigAction>, opts: &GlobalOpts) -> Result<()> {
    match action.unwrap_or(ConfigAction::Show) {
        ConfigAction::Show => {
            let config = Config::load()?;
            println!("{}", "Configuration:".bold().green());
            if config.is_empty() {
                if opts.verbosity_level() >= logger::NORMAL {
                    println!("  {}", "(empty)".yellow());
                }
            } else {
                for (key, value) in config.values_iter() {
                    println!("  {}: {}", key.cyan(), value);
                }
            }
        }
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            match config.get(&key)? {
                Some(value) => println!("{}", value),
                None => logger::info(&format!("{} is not set", key)),
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, value.clone())?;
            let path = config.save()?;
            logger::success(&format!("Set {} = {} in {}", key, value, path.display()));
        }
        ConfigAction::Path => {
            let path = Config::path()?;
            logger::debug(&format!("Known keys: {}", CONFIG_KEYS.join(", ")));
            println!("{}", path.display());
        }
    }
    Ok(())
}
