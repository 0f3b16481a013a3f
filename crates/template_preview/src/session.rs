use std::fs;
use std::path::{Path, PathBuf};
use template_analyzer::PlaceholderPolicy;
use tracing::{debug, info, instrument};

use crate::change_tracker::ChangeTracker;
use crate::errors::PreviewError;
use crate::mock_store::{ensure_mock_data, load_mock_data, mock_data_path, MockDataOutcome};
use crate::renderer::{DocumentOptions, PreviewRenderer};
use crate::is_template_file;

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;

/// One template being previewed: where it lives, where its data lives, and
/// where the rendered HTML goes.
///
/// Every render re-reads both the template and the data file, so edits to
/// either are picked up without restarting the session.
pub struct PreviewSession {
    template_path: PathBuf,
    data_path: PathBuf,
    output_path: PathBuf,
    policy: PlaceholderPolicy,
    renderer: PreviewRenderer,
    refresh_seconds: Option<u64>,
}

impl PreviewSession {
    /// Creates a session for a template, writing HTML into `output_dir`.
    ///
    /// # Errors
    ///
    /// Returns `PreviewError::NotATemplate` if the file does not have a
    /// `.hbs` or `.handlebars` extension.
    pub fn new(
        template_path: impl Into<PathBuf>,
        output_dir: &Path,
        policy: PlaceholderPolicy,
    ) -> Result<Self, PreviewError> {
        let template_path = template_path.into();
        if !is_template_file(&template_path) {
            return Err(PreviewError::NotATemplate(
                template_path.display().to_string(),
            ));
        }

        let data_path = mock_data_path(&template_path);
        let output_path = output_dir.join(format!("{}.html", template_base_name(&template_path)));

        Ok(Self {
            template_path,
            data_path,
            output_path,
            policy,
            renderer: PreviewRenderer::new(),
            refresh_seconds: None,
        })
    }

    /// Replaces the renderer, e.g. to apply a custom [`crate::RenderConfig`].
    pub fn with_renderer(mut self, renderer: PreviewRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Makes the generated page reload itself every `seconds` seconds.
    pub fn with_auto_refresh(mut self, seconds: u64) -> Self {
        self.refresh_seconds = Some(seconds);
        self
    }

    pub fn template_path(&self) -> &Path {
        &self.template_path
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Makes sure the template has a data file, generating it if needed.
    #[instrument(skip(self), fields(template = ?self.template_path))]
    pub fn prepare(&self) -> Result<MockDataOutcome, PreviewError> {
        ensure_mock_data(&self.template_path, self.policy)
    }

    /// Renders the template with its data and writes the HTML page.
    ///
    /// Returns the path of the written page.
    #[instrument(skip(self), fields(template = ?self.template_path))]
    pub fn render(&self) -> Result<PathBuf, PreviewError> {
        let template = fs::read_to_string(&self.template_path)?;
        let data = load_mock_data(&self.data_path)?;

        let options = DocumentOptions {
            title: format!("Handlebars Preview - {}", template_base_name(&self.template_path)),
            refresh_seconds: self.refresh_seconds,
        };
        let html = self.renderer.render_document(&template, &data, &options)?;

        if let Some(parent) = self.output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.output_path, html)?;

        info!(output = ?self.output_path, "Rendered preview");
        Ok(self.output_path.clone())
    }

    /// Re-renders only when the template or its data file changed since the
    /// tracker's last positive check.
    ///
    /// The data file is regenerated first if it has gone missing.
    pub fn refresh_if_changed(
        &self,
        tracker: &mut ChangeTracker,
    ) -> Result<Option<PathBuf>, PreviewError> {
        if !tracker.has_changed(&[&self.template_path, &self.data_path]) {
            return Ok(None);
        }

        debug!(template = ?self.template_path, "Change detected");
        let outcome = self.prepare()?;
        if outcome.was_created() {
            info!(data = ?outcome.path(), "Regenerated missing mock data");
        }
        self.render().map(Some)
    }
}

fn template_base_name(template_path: &Path) -> String {
    template_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "preview".to_string())
}
