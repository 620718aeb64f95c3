use clap::{Parser, Subcommand};
use plugin_readme::{
    commands::{
        config::{self, ConfigAction},
        generate::{self, GenerateCommand},
        placeholders::{self, PlaceholdersCommand},
    },
    logger, GlobalOpts,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "plugin-readme")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Generate README.md from composer.json and a template",
    long_about = "plugin-readme fills __PLACEHOLDER__ tokens in a README template with values from composer.json and rewrites README.md only when the result changed."
)]
struct Cli {
    #[command(flatten)]
    global: GlobalOpts,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// (Re)generate README.md for a project
    Generate(GenerateCommand),
    /// Show the placeholder values derived from composer.json
    Placeholders(PlaceholdersCommand),
    /// Show or change tool configuration
    #[command(subcommand_required = false, arg_required_else_help = false)]
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "plugin_readme=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
        .try_init();
}

fn main() {
    let cli = Cli::parse();

    init_tracing();
    if let Err(e) = logger::init_with_verbosity(cli.global.verbosity_level(), cli.global.log_file.clone()) {
        eprintln!("Warning: Failed to initialize logger: {}", e);
    }

    let result = match cli.command {
        Commands::Generate(cmd) => generate::handle_generate(cmd, &cli.global),
        Commands::Placeholders(cmd) => placeholders::handle_placeholders(cmd, &cli.global),
        Commands::Config { action } => config::handle_config(action, &cli.global),
    };

    if let Err(e) = result {
        logger::error(&e.to_string());
        std::process::exit(1);
    }
}
