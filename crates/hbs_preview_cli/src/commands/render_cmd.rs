//! Rendering commands.
//!
//! `render` produces a single HTML page. `watch` renders once, then polls the
//! template and its data file and re-renders whenever either changes; the
//! page carries a meta refresh so an open browser tab follows along.
//!
//! ```bash
//! hbs-preview render templates/invoice.hbs -o target/preview
//! hbs-preview watch templates/invoice.hbs --interval-ms 500
//! ```

use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use std::time::Duration;
use template_preview::{ChangeTracker, PreviewRenderer, PreviewSession};
use tracing::{info, instrument, warn};

use super::{effective_policy, PolicyArg};
use crate::config::AppConfig;
use crate::errors::Error;

#[cfg(test)]
#[path = "render_cmd_tests.rs"]
mod tests;

/// Arguments for the render command
#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// Template file to render
    pub template: PathBuf,

    /// Directory for the HTML page (overrides the configured one)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Placeholder policy used if the data file has to be generated
    #[arg(long, value_enum)]
    pub policy: Option<PolicyArg>,
}

/// Arguments for the watch command
#[derive(Args, Debug, Clone)]
pub struct WatchArgs {
    #[command(flatten)]
    pub render: RenderArgs,

    /// Milliseconds between change checks (overrides the configured value)
    #[arg(long)]
    pub interval_ms: Option<u64>,
}

/// Builds a preview session from the arguments and configuration.
pub fn build_session(args: &RenderArgs, config: &AppConfig) -> Result<PreviewSession, Error> {
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| config.resolved_output_dir());
    let policy = effective_policy(args.policy, config.placeholder_policy);

    let session = PreviewSession::new(&args.template, &output_dir, policy)?
        .with_renderer(PreviewRenderer::with_config(config.render_config()));
    Ok(session)
}

/// Renders a template once and returns the path of the written page.
#[instrument(skip(config))]
pub fn render(args: &RenderArgs, config: &AppConfig) -> Result<PathBuf, Error> {
    let session = build_session(args, config)?;
    let outcome = session.prepare()?;
    if outcome.was_created() {
        info!(data = ?outcome.path(), "Generated mock data");
    }

    Ok(session.render()?)
}

/// Execute the render command
pub fn execute_render(args: &RenderArgs, config: &AppConfig) -> Result<(), Error> {
    let output = render(args, config)?;
    println!("{} {}", "Rendered".green().bold(), output.display());
    Ok(())
}

/// Returns the polling interval for watch mode.
///
/// # Errors
///
/// Returns `Error::InvalidArguments` for a zero interval.
pub fn poll_interval(args: &WatchArgs, config: &AppConfig) -> Result<Duration, Error> {
    let millis = args.interval_ms.unwrap_or(config.poll_interval_ms);
    if millis == 0 {
        return Err(Error::InvalidArguments(
            "Polling interval must be greater than zero".to_string(),
        ));
    }
    Ok(Duration::from_millis(millis))
}

/// Seconds between browser reloads for a given polling interval.
fn refresh_seconds(interval: Duration) -> u64 {
    interval.as_secs().max(1)
}

/// Renders once for watch mode and returns the tracker for later changes.
///
/// Tracking starts before the render, so edits saved while it runs are
/// picked up by the first poll.
fn initial_render(session: &PreviewSession) -> ChangeTracker {
    let tracker = ChangeTracker::new();
    match session.render() {
        Ok(output) => println!("{} {}", "Watching".cyan().bold(), output.display()),
        Err(e) => warn!(error = %e, "Initial render failed, waiting for changes"),
    }
    tracker
}

/// Execute the watch command; runs until Ctrl-C.
#[instrument(skip(config))]
pub async fn execute_watch(args: &WatchArgs, config: &AppConfig) -> Result<(), Error> {
    let interval = poll_interval(args, config)?;
    let session = build_session(&args.render, config)?.with_auto_refresh(refresh_seconds(interval));

    session.prepare()?;
    let mut tracker = initial_render(&session);

    let mut ticker = tokio::time::interval(interval);
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                match session.refresh_if_changed(&mut tracker) {
                    Ok(Some(output)) => info!(output = ?output, "Preview refreshed"),
                    Ok(None) => {}
                    Err(e) => warn!(error = %e, "Refresh failed"),
                }
            }
            result = tokio::signal::ctrl_c() => {
                if let Err(e) = result {
                    warn!(error = %e, "Failed to listen for Ctrl-C");
                }
                info!("Stopping watch");
                return Ok(());
            }
        }
    }
}
