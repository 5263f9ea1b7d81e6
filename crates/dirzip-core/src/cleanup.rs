//! Scoped removal of partial output.
//!
//! Both guards delete what they track when dropped, unless `commit` was
//! called first. Removal errors are logged and otherwise ignored, since the
//! job is already failing with a more useful error.

use std::path::Path;
use std::path::PathBuf;

/// Removes one file on drop unless committed.
#[derive(Debug)]
pub struct PartialFile {
    path: PathBuf,
    armed: bool,
}

impl PartialFile {
    /// Starts guarding `path`. The file should be created right after.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            armed: true,
        }
    }

    /// Returns the guarded path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Keeps the file and returns its path.
    #[must_use]
    pub fn commit(mut self) -> PathBuf {
        self.armed = false;
        std::mem::take(&mut self.path)
    }
}

impl Drop for PartialFile {
    fn drop(&mut self) {
        if self.armed {
            remove_quietly(&self.path);
        }
    }
}

/// Removes every file created by an extraction job on drop unless committed.
#[derive(Debug)]
pub struct CreatedFiles {
    paths: Vec<PathBuf>,
    armed: bool,
}

impl CreatedFiles {
    /// Creates an empty, armed tracker.
    #[must_use]
    pub fn new() -> Self {
        Self {
            paths: Vec::new(),
            armed: true,
        }
    }

    /// Records a file that did not exist before this job.
    pub fn track(&mut self, path: PathBuf) {
        self.paths.push(path);
    }

    /// Returns the number of tracked files.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Returns `true` if nothing is tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Keeps every tracked file.
    pub fn commit(mut self) {
        self.armed = false;
    }
}

impl Default for CreatedFiles {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CreatedFiles {
    fn drop(&mut self) {
        if self.armed {
            for path in self.paths.iter().rev() {
                remove_quietly(path);
            }
        }
    }
}

fn remove_quietly(path: &Path) {
    match std::fs::remove_file(path) {
        Ok(()) => tracing::debug!(path = %path.display(), "removed partial output"),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "cannot remove partial output");
        }
    }
}
