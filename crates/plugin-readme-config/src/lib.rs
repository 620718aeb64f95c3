//! Configuration management for the plugin-readme CLI
//!
//! Settings live in a small TOML file. Every value is optional and can be
//! overridden per run from the command line or the environment.

pub mod config;
pub mod errors;
pub mod paths;

pub use config::{Config, CONFIG_KEYS};
pub use errors::ConfigFileError;
