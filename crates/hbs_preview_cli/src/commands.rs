//! Command modules for the hbs-preview CLI.
//!
//! - `analyze_cmd`: inspect a template and bootstrap its mock data file
//! - `render_cmd`: render a template to HTML once, or keep re-rendering on change
//! - `config_cmd`: create and show the CLI configuration

use clap::ValueEnum;
use template_analyzer::PlaceholderPolicy;

pub mod analyze_cmd;
pub mod config_cmd;
pub mod render_cmd;

/// Placeholder policy as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Every leaf is "Example Value"
    Constant,
    /// Leaves are typed by their name (email, edad, price, ...)
    NameAware,
}

impl From<PolicyArg> for PlaceholderPolicy {
    fn from(value: PolicyArg) -> Self {
        match value {
            PolicyArg::Constant => PlaceholderPolicy::Constant,
            PolicyArg::NameAware => PlaceholderPolicy::NameAware,
        }
    }
}

/// Picks the command-line policy over the configured one.
pub fn effective_policy(
    argument: Option<PolicyArg>,
    configured: PlaceholderPolicy,
) -> PlaceholderPolicy {
    argument.map(PlaceholderPolicy::from).unwrap_or(configured)
}
