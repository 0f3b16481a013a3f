//! Template analysis commands.
//!
//! ```bash
//! # Print the mock data a template would get, without writing anything
//! hbs-preview analyze templates/invoice.hbs --policy constant
//!
//! # Write templates/invoice.json unless it already exists
//! hbs-preview init templates/invoice.hbs
//! ```

use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;
use template_analyzer::analyze_template_with;
use template_preview::{ensure_mock_data, is_template_file, MockDataOutcome, PreviewError};
use tracing::{debug, instrument};

use super::{effective_policy, PolicyArg};
use crate::config::AppConfig;
use crate::errors::Error;

#[cfg(test)]
#[path = "analyze_cmd_tests.rs"]
mod tests;

/// Arguments for the analyze command
#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Template file to analyze
    pub template: PathBuf,

    /// Placeholder policy for leaf values
    #[arg(long, value_enum)]
    pub policy: Option<PolicyArg>,
}

/// Arguments for the init command
#[derive(Args, Debug, Clone)]
pub struct InitArgs {
    /// Template file whose data file should be created
    pub template: PathBuf,

    /// Placeholder policy for leaf values
    #[arg(long, value_enum)]
    pub policy: Option<PolicyArg>,
}

/// Analyzes a template and returns its mock data as pretty JSON.
#[instrument(skip(config))]
pub fn analyze(args: &AnalyzeArgs, config: &AppConfig) -> Result<String, Error> {
    let template = fs::read_to_string(&args.template).map_err(Error::LoadFile)?;
    let policy = effective_policy(args.policy, config.placeholder_policy);

    let mock = analyze_template_with(&template, policy);
    debug!(template = ?args.template, policy = ?policy, "Analyzed template");

    Ok(serde_json::to_string_pretty(&mock)?)
}

/// Execute the analyze command
pub fn execute_analyze(args: &AnalyzeArgs, config: &AppConfig) -> Result<(), Error> {
    println!("{}", analyze(args, config)?);
    Ok(())
}

/// Creates the template's data file unless it already exists.
#[instrument(skip(config))]
pub fn init_data(args: &InitArgs, config: &AppConfig) -> Result<MockDataOutcome, Error> {
    if !is_template_file(&args.template) {
        return Err(PreviewError::NotATemplate(args.template.display().to_string()).into());
    }

    let policy = effective_policy(args.policy, config.placeholder_policy);
    Ok(ensure_mock_data(&args.template, policy)?)
}

/// Execute the init command
pub fn execute_init(args: &InitArgs, config: &AppConfig) -> Result<(), Error> {
    match init_data(args, config)? {
        MockDataOutcome::Created(path) => {
            println!("{} {}", "Created".green().bold(), path.display());
        }
        MockDataOutcome::Existing(path) => {
            println!(
                "{} {} (left untouched)",
                "Exists".yellow().bold(),
                path.display()
            );
        }
    }
    Ok(())
}
