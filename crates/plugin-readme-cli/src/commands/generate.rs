use crate::errors::Result;
use crate::generator::{GenerateOutcome, ReadmeGenerator};
use crate::GlobalOpts;
use clap::Parser;
use plugin_readme_config::Config;
use plugin_readme_logger as logger;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Default)]
pub struct GenerateCommand {
    /// Project root containing composer.json (default: current directory)
    #[arg(short, long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Template name, overriding composer.json > extra > generate_plugin_readme_template
    #[arg(short, long, value_name = "NAME")]
    pub template: Option<String>,

    /// Built-in template directory (overrides PLUGIN_README_TEMPLATES_DIR and the config file)
    #[arg(long, value_name = "DIR")]
    pub templates_dir: Option<PathBuf>,

    /// Print the rendered README instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

/// Project root from `--root`, falling back to the working directory
pub(crate) fn project_root(root: Option<PathBuf>) -> Result<PathBuf> {
    match root {
        Some(root) => Ok(root),
        None => Ok(std::env::current_dir()?),
    }
}

/// Build a generator from CLI flags and the tool configuration
pub fn build_generator(cmd: &GenerateCommand) -> Result<ReadmeGenerator> {
    let config = Config::load()?;
    let root = project_root(cmd.root.clone())?;
    let templates_dir = config.templates_dir(cmd.templates_dir.as_deref())?;
    logger::debug(&format!("Built-in templates: {}", templates_dir.display()));

    Ok(ReadmeGenerator::new(root, templates_dir)
        .with_default_template(config.default_template().map(str::to_string)))
}

pub fn handle_generate(cmd: GenerateCommand, _opts: &GlobalOpts) -> Result<()> {
    logger::debug("Handling generate command");
    let generator = build_generator(&cmd)?;
    logger::step(&format!(
        "Project root: {}",
        generator.project_root().display()
    ));

    if cmd.dry_run {
        let rendered = generator.render(cmd.template.as_deref())?;
        print!("{}", rendered.content);
        if rendered.is_changed() {
            logger::info(&format!(
                "Dry run: {} would be updated",
                generator.readme_path().display()
            ));
        } else {
            logger::info("Dry run: no changes");
        }
        return Ok(());
    }

    match generator.generate(cmd.template.as_deref())? {
        GenerateOutcome::Written(path) => logger::debug(&format!("Wrote {}", path.display())),
        GenerateOutcome::Unchanged => logger::debug("README left untouched"),
    }
    Ok(())
}
