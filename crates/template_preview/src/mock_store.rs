//! Create-once persistence of mock data.
//!
//! A template's data file lives next to it with the same base name and a
//! `.json` extension. It is generated from the analyzer only when it does not
//! exist yet; from then on it belongs to the user and is read as-is.

use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use template_analyzer::{analyze_template_with, PlaceholderPolicy};
use tracing::{debug, info};

use crate::errors::PreviewError;

#[cfg(test)]
#[path = "mock_store_tests.rs"]
mod tests;

/// What [`ensure_mock_data`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockDataOutcome {
    /// A new data file was generated from the template.
    Created(PathBuf),
    /// A data file already existed and was left untouched.
    Existing(PathBuf),
}

impl MockDataOutcome {
    pub fn path(&self) -> &Path {
        match self {
            MockDataOutcome::Created(path) | MockDataOutcome::Existing(path) => path,
        }
    }

    pub fn was_created(&self) -> bool {
        matches!(self, MockDataOutcome::Created(_))
    }
}

/// Returns the data file path for a template: `invoice.hbs` → `invoice.json`.
pub fn mock_data_path(template_path: &Path) -> PathBuf {
    template_path.with_extension("json")
}

/// Generates the template's data file unless one already exists.
///
/// The template is only read when a new file has to be generated.
///
/// # Errors
///
/// - `PreviewError::Io`: the template cannot be read or the data file cannot
///   be written
/// - `PreviewError::Serialization`: the mock object cannot be serialized
pub fn ensure_mock_data(
    template_path: &Path,
    policy: PlaceholderPolicy,
) -> Result<MockDataOutcome, PreviewError> {
    let data_path = mock_data_path(template_path);

    if data_path.exists() {
        debug!(path = ?data_path, "Mock data already exists, skipping analysis");
        return Ok(MockDataOutcome::Existing(data_path));
    }

    let template = fs::read_to_string(template_path)?;
    let mock = analyze_template_with(&template, policy);

    match write_new_mock_data(&data_path, &mock) {
        Ok(()) => {
            info!(path = ?data_path, "Generated mock data");
            Ok(MockDataOutcome::Created(data_path))
        }
        // Another writer got there first; theirs stands.
        Err(PreviewError::Io(e)) if e.kind() == io::ErrorKind::AlreadyExists => {
            debug!(path = ?data_path, "Mock data appeared concurrently");
            Ok(MockDataOutcome::Existing(data_path))
        }
        Err(e) => Err(e),
    }
}

/// Reads and parses a mock data file.
///
/// # Errors
///
/// - `PreviewError::Io`: the file cannot be read
/// - `PreviewError::InvalidMockData`: the file is not valid JSON
pub fn load_mock_data(data_path: &Path) -> Result<Value, PreviewError> {
    let content = fs::read_to_string(data_path)?;
    serde_json::from_str(&content).map_err(|e| PreviewError::InvalidMockData {
        path: data_path.display().to_string(),
        message: e.to_string(),
    })
}

/// Writes pretty-printed JSON to a file that must not exist yet.
fn write_new_mock_data(data_path: &Path, mock: &Value) -> Result<(), PreviewError> {
    let mut content = serde_json::to_string_pretty(mock)?;
    content.push('\n');

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(data_path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}
