//! Binding expression scanner.
//!
//! Finds every `{{ ... }}` region in a template and hands back the trimmed
//! inner text. Brace nesting is not tracked: the shortest `{{`/`}}` span that
//! contains no brace character wins, so a literal `}` inside a quoted helper
//! argument stops that expression from being recognized at all.

use regex::Regex;
use std::sync::LazyLock;

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;

static EXPRESSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{([^{}]*)\}\}").expect("expression pattern is a valid regex")
});

/// Scans template text for binding expressions.
///
/// Expressions are yielded lazily in source order with surrounding whitespace
/// and Handlebars whitespace-control markers (`~`) removed. Empty expressions
/// are skipped.
///
/// # Examples
///
/// ```rust
/// use template_analyzer::scan_expressions;
///
/// let found: Vec<&str> = scan_expressions("Hi {{ name }}, {{~#if vip~}}!{{/if}}").collect();
/// assert_eq!(found, vec!["name", "#if vip", "/if"]);
/// ```
pub fn scan_expressions(text: &str) -> impl Iterator<Item = &str> + '_ {
    EXPRESSION_PATTERN
        .captures_iter(text)
        .filter_map(|captures| captures.get(1))
        .map(|inner| strip_whitespace_control(inner.as_str()))
        .filter(|expression| !expression.is_empty())
}

fn strip_whitespace_control(raw: &str) -> &str {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('~').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix('~').unwrap_or(trimmed);
    trimmed.trim()
}
