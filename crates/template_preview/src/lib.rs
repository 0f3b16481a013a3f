//! Handlebars template previews.
//!
//! This crate wraps the template analyzer with everything needed to preview a
//! template: a create-once mock data file next to the template, a lenient
//! Handlebars renderer producing an HTML page, and change detection for
//! re-rendering while the user edits.
//!
//! ## Examples
//!
//! ```rust,no_run
//! use std::path::Path;
//! use template_preview::{PreviewSession, PlaceholderPolicy};
//!
//! # fn main() -> Result<(), template_preview::PreviewError> {
//! let session = PreviewSession::new(
//!     "templates/invoice.hbs",
//!     Path::new("target/preview"),
//!     PlaceholderPolicy::NameAware,
//! )?;
//!
//! session.prepare()?; // writes templates/invoice.json on first run only
//! let page = session.render()?;
//! println!("Preview at {}", page.display());
//! # Ok(())
//! # }
//! ```

use std::path::Path;

mod change_tracker;
mod errors;
mod mock_store;
mod renderer;
mod session;

pub use change_tracker::ChangeTracker;
pub use errors::PreviewError;
pub use mock_store::{ensure_mock_data, load_mock_data, mock_data_path, MockDataOutcome};
pub use renderer::{DocumentOptions, PreviewRenderer, RenderConfig, DEFAULT_NOW_FORMAT};
pub use session::PreviewSession;
pub use template_analyzer::PlaceholderPolicy;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// File extensions recognized as Handlebars templates.
pub const TEMPLATE_EXTENSIONS: [&str; 2] = ["hbs", "handlebars"];

/// Returns `true` if the path has a Handlebars template extension.
pub fn is_template_file(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| {
            TEMPLATE_EXTENSIONS
                .iter()
                .any(|known| extension.eq_ignore_ascii_case(known))
        })
}
