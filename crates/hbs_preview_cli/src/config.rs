//! Configuration management for the hbs-preview CLI.
//!
//! The configuration is stored in TOML format. It is looked up in the current
//! directory by default; a missing default file simply means "use defaults",
//! while a missing file that was asked for explicitly is an error.
//!
//! # Example TOML Configuration
//!
//! ```toml
//! placeholder_policy = "name_aware"
//! output_dir = "target/preview"
//! poll_interval_ms = 1000
//! max_template_size = 1048576
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use template_analyzer::PlaceholderPolicy;
use template_preview::RenderConfig;
use tracing::{debug, info};

use crate::errors::Error;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "hbs-preview.toml";

/// Default delay between change checks while watching
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Main configuration structure for the hbs-preview CLI application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// How leaf values of generated mock data are chosen.
    pub placeholder_policy: PlaceholderPolicy,

    /// Directory for rendered HTML pages. Defaults to a folder in the system
    /// temp directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,

    /// Delay between change checks in `watch` mode.
    pub poll_interval_ms: u64,

    /// Templates larger than this many bytes are refused.
    pub max_template_size: usize,
}

impl AppConfig {
    /// Loads configuration from a TOML file at the specified path.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The specified file does not exist (`Error::Config`)
    /// - The file cannot be read (`Error::LoadFile`)
    /// - The file contains invalid TOML (`Error::ParseTomlFile`)
    pub fn load(path: &Path) -> Result<Self, Error> {
        debug!("Loading configuration from {:?}", path);

        if !path.exists() {
            return Err(Error::Config(format!(
                "Configuration file not found: {:?}",
                path
            )));
        }

        let content = fs::read_to_string(path).map_err(Error::LoadFile)?;
        toml::from_str(&content).map_err(Error::ParseTomlFile)
    }

    /// Saves the configuration to a TOML file, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        debug!("Saving configuration to {:?}", path);

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize configuration: {}", e)))?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| Error::Config(format!("Failed to create directory: {}", e)))?;
            }
        }

        fs::write(path, content)
            .map_err(|e| Error::Config(format!("Failed to write configuration file: {}", e)))?;

        info!("Configuration saved to {:?}", path);
        Ok(())
    }

    /// Returns the directory rendered pages are written to.
    pub fn resolved_output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("hbs-preview"))
    }

    /// Returns the renderer configuration derived from this configuration.
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            max_template_size: self.max_template_size,
            ..Default::default()
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            placeholder_policy: PlaceholderPolicy::default(),
            output_dir: None,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            max_template_size: RenderConfig::default().max_template_size,
        }
    }
}

/// Resolves the path to the configuration file.
///
/// - If `config_path` is `Some(path)`, returns that path as a `PathBuf`
/// - If `config_path` is `None`, returns `./hbs-preview.toml` in the current directory
pub fn get_config_path(config_path: Option<&str>) -> PathBuf {
    if let Some(path) = config_path {
        PathBuf::from(path)
    } else {
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        current_dir.join(DEFAULT_CONFIG_FILENAME)
    }
}

/// Loads the effective configuration.
///
/// An explicitly requested file must exist. Without one, the default file is
/// used when present and built-in defaults otherwise.
pub fn resolve_config(config_path: Option<&str>) -> Result<AppConfig, Error> {
    let path = get_config_path(config_path);
    if config_path.is_none() && !path.exists() {
        debug!("No configuration file at {:?}, using defaults", path);
        return Ok(AppConfig::default());
    }

    AppConfig::load(&path)
}
