use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::{debug, trace};

#[cfg(test)]
#[path = "change_tracker_tests.rs"]
mod tests;

/// Detects modifications of watched files by comparing modification times
/// against the moment of the last positive check.
///
/// Files seen at an earlier check are remembered, so a deletion also counts
/// as a change.
#[derive(Debug, Clone)]
pub struct ChangeTracker {
    last_check: SystemTime,
    present: HashSet<PathBuf>,
}

impl ChangeTracker {
    /// Starts tracking from the current time.
    pub fn new() -> Self {
        Self::since(SystemTime::now())
    }

    /// Starts tracking from the given instant.
    pub fn since(last_check: SystemTime) -> Self {
        Self {
            last_check,
            present: HashSet::new(),
        }
    }

    pub fn last_check(&self) -> SystemTime {
        self.last_check
    }

    /// Returns `true` if any of the paths was modified after the last check
    /// or has disappeared since an earlier check, and moves the last check to
    /// now when it does.
    ///
    /// Paths that were never readable (missing files, permission problems)
    /// count as unchanged. Every path is inspected on each call.
    pub fn has_changed<P: AsRef<Path>>(&mut self, paths: &[P]) -> bool {
        let mut changed = false;
        for path in paths {
            let path = path.as_ref();
            match fs::metadata(path).and_then(|metadata| metadata.modified()) {
                Ok(modified) => {
                    self.present.insert(path.to_path_buf());
                    changed |= modified > self.last_check;
                }
                Err(e) => {
                    trace!(path = ?path, error = %e, "Cannot read modification time");
                    if self.present.remove(path) {
                        debug!(path = ?path, "Watched file disappeared");
                        changed = true;
                    }
                }
            }
        }

        if changed {
            self.last_check = SystemTime::now();
        }
        changed
    }
}

impl Default for ChangeTracker {
    fn default() -> Self {
        Self::new()
    }
}
