//! # Expression Classifier
//!
//! Decides what a single binding expression contributes to the mock data.
//! Each expression is classified on its own, with no state carried between
//! expressions, by walking an ordered rule list:
//!
//! | Priority | Kind                | Matches                                          | Contributes          |
//! |----------|---------------------|--------------------------------------------------|----------------------|
//! | 1        | `CommentOrPartial`  | `! ...`, `> ...`                                 | nothing              |
//! | 2        | `ConditionalBlock`  | `#if ...`, `#unless ...`                         | condition arguments  |
//! | 3        | `BlockMarker`       | `#...`, `/...`, `^...`, `else...`                | nothing              |
//! | 4        | `ControlHelper`     | `if `, `each `, `unless `, `with ` (with space)  | nothing              |
//! | 5        | `BarePath`          | no whitespace                                    | the path itself (*)  |
//! | 6        | `HelperCall`        | anything else                                    | qualifying arguments |
//!
//! (*) unless it is `this`, a `@data` variable, a parent reference, a literal
//! or a helper known to take no data such as `now`.
//!
//! The first matching rule wins. Malformed input never errors; it simply
//! yields fewer paths.

use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

use crate::path::VariablePath;

#[cfg(test)]
#[path = "classifier_tests.rs"]
mod tests;

static NUMERIC_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?$")
        .expect("numeric literal pattern is a valid regex")
});

/// Inline helpers that only steer control flow.
const CONTROL_HELPERS: [&str; 4] = ["if", "each", "unless", "with"];

/// Block helpers whose arguments are conditions on the current context.
const CONDITIONAL_BLOCKS: [&str; 2] = ["#if", "#unless"];

/// Helpers that never take data arguments worth tracing, even when called bare.
const NO_ARGUMENT_HELPERS: [&str; 1] = ["now"];

const KEYWORD_LITERALS: [&str; 4] = ["true", "false", "null", "undefined"];

/// The shape of a binding expression, as decided by the classification rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpressionKind {
    /// A comment (`{{! ...}}`) or partial call (`{{> ...}}`).
    CommentOrPartial,
    /// An `#if`/`#unless` block opener whose condition references data.
    ConditionalBlock,
    /// Any other block open, close, inverse or else marker.
    BlockMarker,
    /// An inline `if`/`each`/`unless`/`with` invocation.
    ControlHelper,
    /// A single path with no arguments.
    BarePath,
    /// A helper invocation followed by arguments.
    HelperCall,
}

struct Rule {
    kind: ExpressionKind,
    matches: fn(&str) -> bool,
}

/// Classification rules in priority order. `HelperCall` is the fallback.
const RULES: [Rule; 5] = [
    Rule {
        kind: ExpressionKind::CommentOrPartial,
        matches: is_comment_or_partial,
    },
    Rule {
        kind: ExpressionKind::ConditionalBlock,
        matches: is_conditional_block,
    },
    Rule {
        kind: ExpressionKind::BlockMarker,
        matches: is_block_marker,
    },
    Rule {
        kind: ExpressionKind::ControlHelper,
        matches: is_control_helper,
    },
    Rule {
        kind: ExpressionKind::BarePath,
        matches: is_bare_path,
    },
];

fn is_comment_or_partial(expr: &str) -> bool {
    expr.starts_with('!') || expr.starts_with('>')
}

fn is_conditional_block(expr: &str) -> bool {
    CONDITIONAL_BLOCKS.iter().any(|name| starts_with_word(expr, name))
}

fn is_block_marker(expr: &str) -> bool {
    expr.starts_with('#')
        || expr.starts_with('/')
        || expr.starts_with('^')
        || expr.starts_with("else")
}

fn is_control_helper(expr: &str) -> bool {
    CONTROL_HELPERS.iter().any(|name| starts_with_word(expr, name))
}

fn is_bare_path(expr: &str) -> bool {
    !expr.contains(char::is_whitespace)
}

/// Returns the kind of the given expression according to the rule list.
pub fn expression_kind(expr: &str) -> ExpressionKind {
    kind_of(strip_unescape_marker(expr))
}

fn kind_of(expr: &str) -> ExpressionKind {
    RULES
        .iter()
        .find(|rule| (rule.matches)(expr))
        .map(|rule| rule.kind)
        .unwrap_or(ExpressionKind::HelperCall)
}

/// Extracts the variable paths a binding expression refers to.
///
/// # Examples
///
/// ```rust
/// use template_analyzer::classify;
///
/// let paths = classify(r#"formatDate createdAt "YYYY-MM-DD""#);
/// assert_eq!(paths.len(), 1);
/// assert_eq!(paths[0].as_str(), "createdAt");
///
/// assert!(classify("#each items").is_empty());
/// assert!(classify(r#"now "%Y""#).is_empty());
/// ```
pub fn classify(expr: &str) -> Vec<VariablePath> {
    let expr = strip_unescape_marker(expr);
    let kind = kind_of(expr);

    let paths: Vec<VariablePath> = match kind {
        ExpressionKind::CommentOrPartial
        | ExpressionKind::BlockMarker
        | ExpressionKind::ControlHelper => Vec::new(),
        ExpressionKind::ConditionalBlock => helper_arguments(&expr[1..]),
        ExpressionKind::BarePath => data_reference(expr)
            .filter(|path| !NO_ARGUMENT_HELPERS.contains(path))
            .map(VariablePath::from)
            .into_iter()
            .collect(),
        ExpressionKind::HelperCall => helper_arguments(expr),
    };

    trace!(expression = expr, kind = ?kind, found = paths.len(), "Classified expression");
    paths
}

/// Collects the data references among a helper invocation's arguments.
fn helper_arguments(expr: &str) -> Vec<VariablePath> {
    let tokens = tokenize(expr);
    let Some((helper, arguments)) = tokens.split_first() else {
        return Vec::new();
    };
    let Some(first) = arguments.first() else {
        return Vec::new();
    };

    if NO_ARGUMENT_HELPERS.contains(helper)
        || is_string_literal(first)
        || is_sub_expression_call(first)
    {
        return Vec::new();
    }

    arguments
        .iter()
        .filter_map(|token| argument_reference(token))
        .map(VariablePath::from)
        .collect()
}

fn argument_reference(token: &str) -> Option<&str> {
    // Hash arguments (`key=value`) are judged by their value.
    let token = match token.split_once('=') {
        Some((key, value)) if is_identifier(key) => value,
        _ => token,
    };

    if is_string_literal(token) || is_numeric_literal(token) {
        return None;
    }

    let inner = unwrap_parentheses(token);
    if inner.contains(['(', ')']) {
        return None;
    }

    data_reference(inner)
}

/// Normalizes a token to a path in the current context, or rejects it when
/// it cannot name data the mock object should provide.
fn data_reference(token: &str) -> Option<&str> {
    if token.is_empty()
        || token == "this"
        || token == "."
        || token.starts_with('@')
        || token.starts_with("../")
        || KEYWORD_LITERALS.contains(&token)
        || is_string_literal(token)
        || is_numeric_literal(token)
    {
        return None;
    }

    let token = token
        .strip_prefix("this.")
        .or_else(|| token.strip_prefix("./"))
        .unwrap_or(token);

    is_identifier_path(token).then_some(token)
}

/// A dotted sequence of identifier segments with at least one segment.
/// Stray dots are tolerated; pipes, brackets and other punctuation are not.
fn is_identifier_path(token: &str) -> bool {
    let mut segments = token.split('.').filter(|segment| !segment.is_empty());
    let Some(first) = segments.next() else {
        return false;
    };
    is_path_segment(first) && segments.all(is_path_segment)
}

fn is_path_segment(segment: &str) -> bool {
    segment
        .chars()
        .all(|ch| ch.is_alphanumeric() || matches!(ch, '_' | '-' | '$'))
}

/// Splits on whitespace, keeping quoted strings together as one token.
fn tokenize(expr: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;
    let mut quote: Option<char> = None;

    for (index, ch) in expr.char_indices() {
        match quote {
            Some(open) => {
                if ch == open {
                    quote = None;
                }
            }
            None if ch.is_whitespace() => {
                if let Some(begin) = start.take() {
                    tokens.push(&expr[begin..index]);
                }
            }
            None => {
                if start.is_none() {
                    start = Some(index);
                }
                if ch == '"' || ch == '\'' {
                    quote = Some(ch);
                }
            }
        }
    }

    if let Some(begin) = start {
        tokens.push(&expr[begin..]);
    }

    tokens
}

/// Strips exactly one surrounding pair of parentheses.
fn unwrap_parentheses(token: &str) -> &str {
    token
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .unwrap_or(token)
}

fn is_sub_expression_call(token: &str) -> bool {
    token.starts_with('(') && unwrap_parentheses(token).contains(['(', ')'])
}

fn is_string_literal(token: &str) -> bool {
    token.starts_with('"') || token.starts_with('\'')
}

fn is_numeric_literal(token: &str) -> bool {
    NUMERIC_LITERAL.is_match(token)
}

fn is_identifier(token: &str) -> bool {
    !token.is_empty()
        && token
            .chars()
            .all(|ch| ch.is_alphanumeric() || ch == '_' || ch == '-')
}

fn starts_with_word(expr: &str, word: &str) -> bool {
    expr.strip_prefix(word)
        .is_some_and(|rest| rest.starts_with(char::is_whitespace))
}

/// `{{& name}}` renders unescaped; the marker is irrelevant to the data shape.
fn strip_unescape_marker(expr: &str) -> &str {
    expr.strip_prefix('&').map(str::trim_start).unwrap_or(expr)
}
