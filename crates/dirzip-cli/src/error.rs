//! Error conversion utilities for CLI.
//!
//! Converts dirzip-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use dirzip_core::ArchiveError;
use dirzip_core::FailureReporter;
use dirzip_core::Operation;
use std::path::Path;

/// Failure reporter for the CLI.
///
/// The command prints the failure itself through the output formatter, so
/// the core's report is only kept as a debug event for `--verbose` runs.
pub struct CliReporter;

impl FailureReporter for CliReporter {
    fn report_failure(&self, operation: Operation, path: &Path, error: &ArchiveError) {
        tracing::debug!(
            operation = %operation,
            path = %path.display(),
            kind = ?error.kind(),
            "job failed: {error}"
        );
    }
}

/// Converts `ArchiveError` to user-friendly anyhow error with context
pub fn convert_archive_error(err: ArchiveError, operation: Operation, path: &Path) -> anyhow::Error {
    match err {
        ArchiveError::SourceNotFound { path: resolved } => {
            anyhow!(
                "Source folder not found: {}\n\
                 HINT: Check the path; relative paths are resolved against the current directory.",
                resolved.display()
            )
        }
        ArchiveError::SourceNotDirectory { path: resolved } => {
            anyhow!(
                "Source is not a folder: {}\n\
                 HINT: Only folders can be zipped.",
                resolved.display()
            )
        }
        ArchiveError::UnsafeEntryPath { name } => {
            anyhow!(
                "Security violation: Archive '{}' contains an entry that escapes the target: '{name}'\n\
                 HINT: This archive may be malicious. Do not extract from untrusted sources.",
                path.display()
            )
        }
        ArchiveError::InvalidExcludePattern { pattern, source } => {
            anyhow!(
                "Invalid exclude pattern '{pattern}': {source}\n\
                 HINT: Patterns are regular expressions; escape special characters such as '.', '(' or '['."
            )
        }
        ArchiveError::Zip(zip_err) => {
            anyhow!(
                "Invalid archive '{}': {zip_err}\n\
                 HINT: The archive may be corrupted or is not a zip file.",
                path.display()
            )
        }
        ArchiveError::Io(io_err) => {
            anyhow!(
                "I/O error while trying to {operation} '{}': {io_err}",
                path.display()
            )
        }
        _ => anyhow::Error::from(err)
            .context(format!("Failed to {operation} '{}'", path.display())),
    }
}

/// Adds context to a core result for the job on `path`
pub fn add_job_context<T>(
    result: Result<T, ArchiveError>,
    operation: Operation,
    path: &Path,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_archive_error(e, operation, path))
}
