//! # Preview Renderer
//!
//! Renders Handlebars templates to HTML for previewing. The registry is set up
//! to be forgiving: undefined variables render as empty strings and calls to
//! helpers that are not registered render nothing, so a template written for
//! a richer helper library can still be previewed.
//!
//! ## Helpers
//!
//! - `now`: current timestamp, optional strftime format (`{{now "%Y"}}`)
//! - `helperMissing`: swallows unknown helper calls
//! - `blockHelperMissing`: treats `{{#name}}...{{/name}}` as a section over the
//!   value of `name` (skipped when falsy, repeated for arrays); unknown block
//!   helpers called with arguments render nothing
//!
//! ## Examples
//!
//! ```rust
//! # use template_preview::PreviewRenderer;
//! # use serde_json::json;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let renderer = PreviewRenderer::new();
//! let html = renderer.render("<p>{{customer.name}} {{shout customer.name}}</p>", &json!({
//!     "customer": {"name": "John Doe"}
//! }))?;
//! assert_eq!(html, "<p>John Doe </p>");
//! # Ok(())
//! # }
//! ```

use chrono::Utc;
use handlebars::{
    html_escape, BlockContext, Context, Handlebars, Helper, HelperDef, HelperResult, JsonTruthy,
    Output, RenderContext, RenderErrorReason, Renderable, Template,
};
use serde_json::Value;
use std::fmt::Write as _;
use tracing::debug;

use crate::errors::PreviewError;

#[cfg(test)]
#[path = "renderer_tests.rs"]
mod tests;

/// Format used by `{{now}}` when no format argument is given.
pub const DEFAULT_NOW_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ================================
// Helpers
// ================================

/// Renders nothing; registered for inline helper misses.
struct MissingHelper;

impl HelperDef for MissingHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
        _: &mut dyn Output,
    ) -> HelperResult {
        debug!(helper = h.name(), "Skipping unknown helper");
        Ok(())
    }
}

/// Mustache-style sections for block names that are not helpers.
///
/// `{{#user}}{{name}}{{/user}}` renders its body with `user` as context,
/// once per item for arrays, and falls back to the `{{else}}` branch when the
/// value is falsy or an empty array.
struct SectionHelper;

impl HelperDef for SectionHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        r: &'reg Handlebars<'reg>,
        ctx: &'rc Context,
        rc: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        if !h.params().is_empty() || !h.hash().is_empty() {
            debug!(helper = h.name(), "Skipping unknown block helper");
            return Ok(());
        }

        let value = rc.evaluate(ctx, h.name())?.as_json().clone();
        let items = match value {
            Value::Array(items) => items,
            Value::Bool(true) => {
                if let Some(template) = h.template() {
                    template.render(r, ctx, rc, out)?;
                }
                return Ok(());
            }
            other if other.is_truthy(false) => vec![other],
            _ => Vec::new(),
        };

        if items.is_empty() {
            if let Some(inverse) = h.inverse() {
                inverse.render(r, ctx, rc, out)?;
            }
            return Ok(());
        }

        let Some(template) = h.template() else {
            return Ok(());
        };
        for item in items {
            let mut block = BlockContext::new();
            block.set_base_value(item);
            rc.push_block(block);
            let rendered = template.render(r, ctx, rc, out);
            rc.pop_block();
            rendered?;
        }
        Ok(())
    }
}

/// Helper to render the current timestamp.
struct NowHelper;

impl HelperDef for NowHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let format = h
            .param(0)
            .and_then(|v| v.value().as_str())
            .unwrap_or(DEFAULT_NOW_FORMAT);

        let mut formatted = String::new();
        write!(formatted, "{}", Utc::now().format(format)).map_err(|_| {
            RenderErrorReason::Other(format!("now helper received an invalid format: {format}"))
        })?;

        out.write(&formatted)?;
        Ok(())
    }
}

// ================================
// Configuration
// ================================

/// Configuration for preview rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Whether to fail on undefined variables (true) or render them empty.
    ///
    /// **Default**: `false`; previews should survive incomplete data.
    pub strict_variables: bool,

    /// Maximum size of template content in bytes.
    ///
    /// **Default**: 1MB (1,048,576 bytes)
    pub max_template_size: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            strict_variables: false,
            max_template_size: 1_048_576, // 1MB
        }
    }
}

/// Options for wrapping a rendered fragment into a standalone HTML page.
#[derive(Debug, Clone, Default)]
pub struct DocumentOptions {
    /// Page title, HTML-escaped before use.
    pub title: String,

    /// When set, the page asks the browser to reload itself every N seconds.
    pub refresh_seconds: Option<u64>,
}

// ================================
// Renderer
// ================================

/// Handlebars renderer configured for previews.
pub struct PreviewRenderer {
    handlebars: Handlebars<'static>,
    config: RenderConfig,
}

impl PreviewRenderer {
    /// Creates a renderer with the default configuration.
    pub fn new() -> Self {
        Self::with_config(RenderConfig::default())
    }

    /// Creates a renderer with a custom configuration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use template_preview::{PreviewRenderer, RenderConfig};
    ///
    /// let renderer = PreviewRenderer::with_config(RenderConfig {
    ///     max_template_size: 4096,
    ///     ..Default::default()
    /// });
    /// assert_eq!(renderer.config().max_template_size, 4096);
    /// ```
    pub fn with_config(config: RenderConfig) -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(config.strict_variables);

        handlebars.register_helper("helperMissing", Box::new(MissingHelper));
        handlebars.register_helper("blockHelperMissing", Box::new(SectionHelper));
        handlebars.register_helper("now", Box::new(NowHelper));

        Self { handlebars, config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Renders a template string with the given data.
    ///
    /// # Errors
    ///
    /// - `PreviewError::ResourceLimit`: template exceeds `max_template_size`
    /// - `PreviewError::Compilation`: template syntax is invalid
    /// - `PreviewError::Render`: rendering failed at runtime
    pub fn render(&self, template: &str, data: &Value) -> Result<String, PreviewError> {
        if template.len() > self.config.max_template_size {
            return Err(PreviewError::ResourceLimit {
                limit_type: "template_size".to_string(),
                message: format!(
                    "Template size {} bytes exceeds limit of {} bytes",
                    template.len(),
                    self.config.max_template_size
                ),
            });
        }

        Template::compile(template).map_err(|e| PreviewError::Compilation {
            message: e.to_string(),
        })?;

        self.handlebars
            .render_template(template, data)
            .map_err(|e| PreviewError::Render {
                message: e.to_string(),
            })
    }

    /// Renders a template and makes sure the result is a complete HTML page.
    ///
    /// Output that already starts with `<!DOCTYPE` or `<html` is kept as is
    /// (apart from the refresh tag); anything else is wrapped in a minimal
    /// document.
    pub fn render_document(
        &self,
        template: &str,
        data: &Value,
        options: &DocumentOptions,
    ) -> Result<String, PreviewError> {
        let body = self.render(template, data)?;
        Ok(wrap_document(&body, options))
    }
}

impl Default for PreviewRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn wrap_document(body: &str, options: &DocumentOptions) -> String {
    let refresh = options
        .refresh_seconds
        .map(|seconds| format!("<meta http-equiv=\"refresh\" content=\"{seconds}\">"))
        .unwrap_or_default();

    if is_full_document(body) {
        if refresh.is_empty() {
            return body.to_string();
        }
        return match body.find("<head>") {
            Some(index) => {
                let insert_at = index + "<head>".len();
                format!("{}{}{}", &body[..insert_at], refresh, &body[insert_at..])
            }
            None => body.to_string(),
        };
    }

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n{refresh}<title>{title}</title>\n</head>\n<body>\n{body}\n</body>\n</html>\n",
        title = html_escape(&options.title),
    )
}

fn is_full_document(html: &str) -> bool {
    let start = html.trim_start();
    let prefix: String = start.chars().take(9).collect::<String>().to_ascii_lowercase();
    prefix.starts_with("<!doctype") || prefix.starts_with("<html")
}
