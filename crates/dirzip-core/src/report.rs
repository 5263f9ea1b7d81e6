//! Failure and progress reporting hooks.
//!
//! The archiver and extractor never talk to a logger directly. Failures go
//! through a [`FailureReporter`] and per-entry progress through a
//! [`ProgressCallback`], so an embedding application can route both wherever
//! it likes.

use crate::ArchiveError;
use std::fmt;
use std::path::Path;

/// Which job a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Zipping a folder.
    Archive,
    /// Unzipping an archive.
    Extract,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Archive => f.write_str("zip folder"),
            Self::Extract => f.write_str("unzip file"),
        }
    }
}

/// Receives every failed job exactly once, before the error is returned to
/// the caller.
pub trait FailureReporter: Send + Sync {
    /// Reports a failed job.
    ///
    /// `path` is the operand the caller passed in: the source folder for
    /// [`Operation::Archive`], the archive file for [`Operation::Extract`].
    fn report_failure(&self, operation: Operation, path: &Path, error: &ArchiveError);
}

/// Default reporter that emits one `tracing` error event per failure.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl FailureReporter for TracingReporter {
    fn report_failure(&self, operation: Operation, path: &Path, error: &ArchiveError) {
        tracing::error!(
            operation = %operation,
            path = %path.display(),
            kind = ?error.kind(),
            "Failed to {operation} {}: {error}",
            path.display()
        );
    }
}

/// Callback trait for progress reporting during archive operations.
///
/// Implement this trait to receive progress updates while a folder is zipped
/// or an archive is unzipped.
pub trait ProgressCallback: Send {
    /// Called when starting to process an entry.
    ///
    /// # Arguments
    ///
    /// * `path` - Entry name inside the archive
    /// * `total` - Total number of entries in the job
    /// * `current` - Current entry number (1-indexed)
    fn on_entry_start(&mut self, path: &Path, total: usize, current: usize);

    /// Called for each chunk of file data copied into or out of the archive.
    fn on_bytes_written(&mut self, bytes: u64);

    /// Called when an entry has been completely processed.
    fn on_entry_complete(&mut self, path: &Path);

    /// Called once when the entire job is complete.
    fn on_complete(&mut self);
}

/// No-op implementation of `ProgressCallback`.
#[derive(Debug, Default)]
pub struct NoopProgress;

impl ProgressCallback for NoopProgress {
    fn on_entry_start(&mut self, _path: &Path, _total: usize, _current: usize) {}

    fn on_bytes_written(&mut self, _bytes: u64) {}

    fn on_entry_complete(&mut self, _path: &Path) {}

    fn on_complete(&mut self) {}
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Archive.to_string(), "zip folder");
        assert_eq!(Operation::Extract.to_string(), "unzip file");
    }

    #[test]
    fn test_tracing_reporter_does_not_panic_without_subscriber() {
        let err = ArchiveError::InvalidCompressionLevel { level: 0 };
        TracingReporter.report_failure(Operation::Archive, Path::new("/src"), &err);
    }

    #[test]
    fn test_noop_progress() {
        let mut progress = NoopProgress;
        progress.on_entry_start(Path::new("a.txt"), 1, 1);
        progress.on_bytes_written(10);
        progress.on_entry_complete(Path::new("a.txt"));
        progress.on_complete();
    }
}
