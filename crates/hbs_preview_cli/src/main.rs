use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use hbs_preview_cli::commands::{
    analyze_cmd::{self, AnalyzeArgs, InitArgs},
    config_cmd::{self, ConfigCommands},
    render_cmd::{self, RenderArgs, WatchArgs},
};
use hbs_preview_cli::config::resolve_config;
use hbs_preview_cli::errors::Error;

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;

/// hbs-preview: Preview Handlebars templates with generated mock data
#[derive(Parser)]
#[command(name = "hbs-preview")]
#[command(about = "Preview Handlebars templates with generated mock data", long_about = None)]
struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the mock data inferred from a template
    Analyze(AnalyzeArgs),

    /// Create the template's JSON data file if it does not exist
    Init(InitArgs),

    /// Render a template to an HTML page
    Render(RenderArgs),

    /// Re-render a template whenever it or its data file changes
    Watch(WatchArgs),

    #[command(subcommand)]
    Config(ConfigCommands),

    /// Show the CLI version
    Version,
}

async fn run(cli: Cli) -> Result<(), Error> {
    match &cli.command {
        Commands::Config(cmd) => config_cmd::execute(cmd),
        Commands::Version => {
            println!(
                "hbs-preview version {}",
                option_env!("HBS_PREVIEW_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
            );
            Ok(())
        }
        command => {
            let config = resolve_config(cli.config.as_deref())?;
            match command {
                Commands::Analyze(args) => analyze_cmd::execute_analyze(args, &config),
                Commands::Init(args) => analyze_cmd::execute_init(args, &config),
                Commands::Render(args) => render_cmd::execute_render(args, &config),
                Commands::Watch(args) => render_cmd::execute_watch(args, &config).await,
                Commands::Config(_) | Commands::Version => Ok(()),
            }
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().pretty().with_writer(std::io::stderr))
        .with(EnvFilter::from_env("HBS_PREVIEW_LOG"))
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        error!("Error: {e}");
        eprintln!("{} {e}", "Error:".red().bold());
        std::process::exit(1);
    }
}
