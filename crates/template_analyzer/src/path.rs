use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(test)]
#[path = "path_tests.rs"]
mod tests;

/// A dotted reference into the data object a template expects at render time.
///
/// Paths are stored exactly as extracted (`user.address.city`). Empty
/// segments produced by stray dots are ignored by [`VariablePath::segments`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariablePath(String);

impl VariablePath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the non-empty, dot-separated segments of the path.
    pub fn segments(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.split('.').filter(|segment| !segment.is_empty())
    }

    /// Returns the final segment, if the path has any segments at all.
    pub fn leaf(&self) -> Option<&str> {
        self.segments().last()
    }
}

impl fmt::Display for VariablePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VariablePath {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for VariablePath {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for VariablePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
