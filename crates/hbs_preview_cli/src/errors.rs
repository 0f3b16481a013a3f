use std::io;

use template_preview::PreviewError;
use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur in the hbs-preview CLI application.
///
/// This enum represents all possible error conditions that can arise during
/// CLI operations, including configuration issues, file access problems and
/// failures reported by the preview pipeline.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error occurred while loading or saving configuration.
    ///
    /// This error is returned when there are issues with the configuration file,
    /// such as a missing explicitly requested file or a file that cannot be written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid command-line arguments were provided.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Failed to load a file from the filesystem.
    ///
    /// This error wraps underlying I/O errors that occur when reading files,
    /// such as permission issues or missing files.
    #[error("Failed to load file: {0}")]
    LoadFile(io::Error),

    /// Failed to parse a TOML configuration file.
    #[error("Failed to parse TOML configuration file: {0}")]
    ParseTomlFile(toml::de::Error),

    /// The preview pipeline failed (data bootstrap, rendering, output).
    #[error(transparent)]
    Preview(#[from] PreviewError),

    /// Command output could not be serialized.
    #[error("Failed to serialize output: {0}")]
    Serialization(#[from] serde_json::Error),
}
