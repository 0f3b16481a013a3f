//! Mock structure builder.
//!
//! Folds variable paths into one nested JSON object. Intermediate segments are
//! created on demand and every final segment receives a placeholder.
//!
//! When a path is used both as a leaf and as a prefix (`a.b` and `a.b.c`),
//! the nested path wins regardless of insertion order: a scalar standing in
//! the way of a deeper path is replaced by an object, and a later shorter path
//! never overwrites an existing object.

use serde_json::{Map, Value};
use tracing::trace;

use crate::path::VariablePath;
use crate::placeholders::PlaceholderPolicy;

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;

/// Builds the mock data object for a sequence of variable paths.
///
/// # Examples
///
/// ```rust
/// use template_analyzer::{build_mock_structure, PlaceholderPolicy, VariablePath};
/// use serde_json::json;
///
/// let paths = [VariablePath::from("user.name"), VariablePath::from("user.city")];
/// let mock = build_mock_structure(&paths, PlaceholderPolicy::Constant);
/// assert_eq!(mock, json!({"user": {"name": "Example Value", "city": "Example Value"}}));
/// ```
pub fn build_mock_structure<'a, I>(paths: I, policy: PlaceholderPolicy) -> Value
where
    I: IntoIterator<Item = &'a VariablePath>,
{
    let mut root = Map::new();
    for path in paths {
        insert_path(&mut root, path, policy);
    }
    Value::Object(root)
}

/// Inserts a single path into an existing mock object.
///
/// Paths without any segments are ignored.
pub fn insert_path(root: &mut Map<String, Value>, path: &VariablePath, policy: PlaceholderPolicy) {
    let segments: Vec<&str> = path.segments().collect();
    let Some((leaf, parents)) = segments.split_last() else {
        trace!(path = %path, "Ignoring path without segments");
        return;
    };

    let mut current = root;
    for segment in parents {
        let slot = current
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !slot.is_object() {
            trace!(path = %path, segment = *segment, "Replacing placeholder with nested object");
            *slot = Value::Object(Map::new());
        }
        let Some(map) = slot.as_object_mut() else {
            return;
        };
        current = map;
    }

    match current.get(*leaf) {
        Some(Value::Object(_)) => {
            trace!(path = %path, "Keeping nested object over leaf placeholder");
        }
        _ => {
            current.insert(leaf.to_string(), policy.placeholder_for(leaf));
        }
    }
}
