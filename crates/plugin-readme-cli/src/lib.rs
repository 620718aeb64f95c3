//! plugin-readme library - README generation from composer.json
//!
//! The binary is a thin clap front end over [`generator::ReadmeGenerator`];
//! the modules are exposed for integration tests and for hook runners that
//! want to call the generator directly.

pub mod commands;
pub mod common;
pub mod errors;
pub mod generator;
pub mod template;

pub use common::GlobalOpts;
pub use plugin_readme_logger as logger;
