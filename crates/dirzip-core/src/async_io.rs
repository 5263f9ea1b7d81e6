//! Async wrappers for use from a Tokio runtime.
//!
//! Each job runs unchanged on the blocking thread pool, so the calling task
//! is free while the filesystem work happens. Independent calls run as
//! independent tasks.
//!
//! # Feature Flag
//!
//! This module is only available when the `async-io` feature is enabled:
//!
//! ```toml
//! [dependencies]
//! dirzip-core = { version = "0.1.0", features = ["async-io"] }
//! ```

use crate::ArchiveError;
use crate::ArchiveOptions;
use crate::ExtractOptions;
use crate::FailureReporter;
use crate::Operation;
use crate::Result;
use crate::TracingReporter;
use std::path::PathBuf;
use tokio::task::JoinError;

/// Async version of [`zip_folder`](crate::zip_folder).
///
/// # Errors
///
/// See [`zip_folder`](crate::zip_folder). A panic inside the job surfaces
/// as [`ArchiveError::Join`].
pub async fn zip_folder_async(
    source: impl Into<PathBuf>,
    target_dir: impl Into<PathBuf>,
    archive_name: impl Into<String>,
    options: ArchiveOptions,
) -> Result<PathBuf> {
    let source = source.into();
    let target_dir = target_dir.into();
    let archive_name = archive_name.into();
    let operand = source.clone();

    tokio::task::spawn_blocking(move || {
        crate::zip_folder(&source, &target_dir, &archive_name, &options)
    })
    .await
    .unwrap_or_else(|e| Err(join_failure(Operation::Archive, operand, &e)))
}

/// Async version of [`unzip_file`](crate::unzip_file).
///
/// # Errors
///
/// See [`unzip_file`](crate::unzip_file). A panic inside the job surfaces
/// as [`ArchiveError::Join`].
pub async fn unzip_file_async(
    archive: impl Into<PathBuf>,
    target_dir: impl Into<PathBuf>,
    options: ExtractOptions,
) -> Result<Vec<PathBuf>> {
    let archive = archive.into();
    let target_dir = target_dir.into();
    let operand = archive.clone();

    tokio::task::spawn_blocking(move || crate::unzip_file(&archive, &target_dir, &options))
        .await
        .unwrap_or_else(|e| Err(join_failure(Operation::Extract, operand, &e)))
}

fn join_failure(operation: Operation, operand: PathBuf, e: &JoinError) -> ArchiveError {
    let error = ArchiveError::Join(e.to_string());
    TracingReporter.report_failure(operation, &operand, &error);
    error
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_async_round_trip() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("src");
        fs::create_dir(&source).unwrap();
        fs::write(source.join("one.txt"), "1").unwrap();

        let archive = zip_folder_async(&source, temp.path(), "async", ArchiveOptions::default())
            .await
            .unwrap();
        let written = unzip_file_async(&archive, temp.path().join("out"), ExtractOptions::default())
            .await
            .unwrap();

        assert_eq!(written, vec![temp.path().join("out/one.txt")]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_concurrent_jobs_are_independent() {
        let temp = TempDir::new().unwrap();
        let mut jobs = Vec::new();

        for i in 0..4 {
            let source = temp.path().join(format!("src{i}"));
            fs::create_dir(&source).unwrap();
            fs::write(source.join("data.txt"), format!("job {i}")).unwrap();
            jobs.push(tokio::spawn(zip_folder_async(
                source,
                temp.path().join("archives"),
                format!("job{i}"),
                ArchiveOptions::default(),
            )));
        }

        for (i, job) in jobs.into_iter().enumerate() {
            let archive = job.await.unwrap().unwrap();
            assert_eq!(archive, temp.path().join(format!("archives/job{i}.zip")));
        }
    }

    #[tokio::test]
    async fn test_async_error_propagates() {
        let temp = TempDir::new().unwrap();
        let err = zip_folder_async(
            temp.path().join("missing"),
            temp.path(),
            "x",
            ArchiveOptions::default(),
        )
        .await
        .unwrap_err();

        assert_eq!(err.kind(), crate::ErrorKind::NotFound);
    }
}
