use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Error types that can occur while preparing or rendering a template preview.
///
/// The analyzer itself never fails; every variant here belongs to the work
/// around it: reading files, parsing a hand-edited mock data file, and
/// rendering the template. All of them are meant to be shown to the user
/// without bringing the previewer down.
///
/// # Examples
///
/// ```rust,ignore
/// use template_preview::{PreviewError, PreviewSession};
///
/// match session.render() {
///     Ok(path) => println!("Preview written to {}", path.display()),
///     Err(PreviewError::InvalidMockData { path, message }) => {
///         eprintln!("Fix the data file {path}: {message}");
///     }
///     Err(e) => eprintln!("Preview failed: {e}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum PreviewError {
    /// I/O operation failed while reading the template or data file, or
    /// while writing the rendered output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The given file is not a Handlebars template.
    ///
    /// Only files with a `.hbs` or `.handlebars` extension are previewed.
    #[error("Not a Handlebars template (expected .hbs or .handlebars): {0}")]
    NotATemplate(String),

    /// The mock data file exists but does not contain valid JSON.
    ///
    /// Data files are user-owned once created, so this usually means a hand
    /// edit left the file in a broken state.
    #[error("Invalid mock data in {path}: {message}")]
    InvalidMockData {
        /// Path of the offending data file
        path: String,
        /// Parser error message
        message: String,
    },

    /// Generated mock data could not be serialized.
    #[error("Failed to serialize mock data: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Template compilation failed due to syntax errors.
    ///
    /// # Examples
    ///
    /// - `{{#if unclosed block`
    /// - `{{/each}}` without a matching opener
    #[error("Template compilation failed: {message}")]
    Compilation {
        /// Detailed error message from the Handlebars parser
        message: String,
    },

    /// Template rendering failed during execution.
    #[error("Template rendering failed: {message}")]
    Render {
        /// Detailed error message from the Handlebars renderer
        message: String,
    },

    /// Template processing exceeded resource limits.
    #[error("Resource limit exceeded: {limit_type} - {message}")]
    ResourceLimit {
        /// Type of resource limit that was exceeded
        limit_type: String,
        /// Detailed message about the limit violation
        message: String,
    },
}
