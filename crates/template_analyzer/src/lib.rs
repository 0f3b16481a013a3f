//! Template variable analyzer for Handlebars previews.
//!
//! This crate inspects Handlebars source text and produces a mock data object
//! shaped like the data the template expects. It is a best-effort heuristic,
//! not a Handlebars parser: malformed or non-template input simply yields
//! fewer variables, never an error.
//!
//! Analysis runs in three steps, each in its own module:
//!
//! 1. [`scan_expressions`] finds the `{{ ... }}` binding expressions.
//! 2. [`classify`] drops control-flow syntax and recovers variable paths from
//!    bare references and helper arguments.
//! 3. [`build_mock_structure`] folds the paths into nested JSON with
//!    placeholder leaves.
//!
//! ## Examples
//!
//! ```rust
//! use template_analyzer::{analyze_template_with, PlaceholderPolicy};
//! use serde_json::json;
//!
//! let template = "Hello {{name}}, you are {{age}} years old. {{#each items}}{{this}}{{/each}}";
//! let mock = analyze_template_with(template, PlaceholderPolicy::Constant);
//! assert_eq!(mock, json!({"name": "Example Value", "age": "Example Value"}));
//! ```

use serde_json::Value;
use tracing::debug;

mod builder;
mod classifier;
mod path;
mod placeholders;
mod scanner;

pub use builder::{build_mock_structure, insert_path};
pub use classifier::{classify, expression_kind, ExpressionKind};
pub use path::VariablePath;
pub use placeholders::{PlaceholderPolicy, DEFAULT_PLACEHOLDER};
pub use scanner::scan_expressions;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Extracts every variable path referenced by the template, in source order.
///
/// Duplicates are kept; the builder treats repeated paths as no-ops.
pub fn extract_variables(template: &str) -> Vec<VariablePath> {
    scan_expressions(template).flat_map(classify).collect()
}

/// Analyzes a template with the default [`PlaceholderPolicy`].
pub fn analyze_template(template: &str) -> Value {
    analyze_template_with(template, PlaceholderPolicy::default())
}

/// Analyzes a template and builds its mock data object.
pub fn analyze_template_with(template: &str, policy: PlaceholderPolicy) -> Value {
    let variables = extract_variables(template);
    debug!(
        variables = variables.len(),
        policy = ?policy,
        "Extracted template variables"
    );
    build_mock_structure(&variables, policy)
}
