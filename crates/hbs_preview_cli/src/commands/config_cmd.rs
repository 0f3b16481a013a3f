use clap::Subcommand;
use std::path::PathBuf;
use tracing::{debug, error, info, instrument};

use crate::config::{get_config_path, resolve_config, AppConfig};
use crate::errors::Error;

#[cfg(test)]
#[path = "config_cmd_tests.rs"]
mod tests;

/// Subcommands for the config command
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Create initial configuration file
    Init {
        /// Path to save the configuration file
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Show the effective configuration
    Show {
        /// Path to the configuration file
        #[arg(short, long)]
        path: Option<String>,
    },
}

/// Execute the config command
#[instrument]
pub fn execute(cmd: &ConfigCommands) -> Result<(), Error> {
    match cmd {
        ConfigCommands::Init { path } => {
            let config_path = init_config(path.as_deref())?;
            println!("Configuration initialized at {:?}", config_path);
            Ok(())
        }
        ConfigCommands::Show { path } => {
            println!("{}", show_config(path.as_deref())?);
            Ok(())
        }
    }
}

/// Writes a default configuration file; refuses to overwrite one.
#[instrument]
pub fn init_config(path: Option<&str>) -> Result<PathBuf, Error> {
    let config_path = get_config_path(path);
    debug!(message = "Initializing configuration", path = ?config_path);

    if config_path.exists() {
        let err = Error::Config(format!(
            "Configuration file already exists at {:?}",
            config_path
        ));
        error!(
            message = "Configuration file already exists",
            path = ?config_path,
            error = ?err
        );
        return Err(err);
    }

    AppConfig::default().save(&config_path)?;

    info!(message = "Configuration initialized", path = ?config_path);
    Ok(config_path)
}

/// Renders the effective configuration as TOML.
#[instrument]
pub fn show_config(path: Option<&str>) -> Result<String, Error> {
    let config = resolve_config(path)?;
    toml::to_string_pretty(&config)
        .map_err(|e| Error::Config(format!("Failed to serialize configuration: {}", e)))
}
