//! Folder-to-zip and zip-to-folder helpers.
//!
//! `dirzip-core` provides two independent, one-shot operations:
//!
//! - [`zip_folder`] walks a directory, drops entries that match the
//!   exclusion patterns, and writes a DEFLATE zip archive.
//! - [`unzip_file`] extracts a zip archive into a directory, optionally
//!   leaving existing files alone.
//!
//! Failures are reported once through a [`FailureReporter`] (by default a
//! `tracing` error event) and then returned to the caller. Partial output
//! from a failed job is removed.
//!
//! # Examples
//!
//! ```no_run
//! use dirzip_core::ArchiveOptions;
//! use dirzip_core::ExtractOptions;
//! use dirzip_core::unzip_file;
//! use dirzip_core::zip_folder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let archive = zip_folder("project", "out", "app", &ArchiveOptions::default())?;
//! let files = unzip_file(&archive, "restore", &ExtractOptions::default())?;
//! println!("restored {} files", files.len());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
#[cfg(feature = "async-io")]
pub mod async_io;
pub mod cleanup;
pub mod creation;
pub mod error;
pub mod extraction;
pub mod paths;
pub mod report;

// Re-export main API types
pub use api::unzip_file;
pub use api::unzip_file_detailed;
pub use api::unzip_file_with;
pub use api::zip_folder;
pub use api::zip_folder_with;
#[cfg(feature = "async-io")]
pub use async_io::unzip_file_async;
#[cfg(feature = "async-io")]
pub use async_io::zip_folder_async;
pub use creation::ArchiveOptions;
pub use error::ArchiveError;
pub use error::ErrorKind;
pub use error::Result;
pub use extraction::ExtractOptions;
pub use extraction::ExtractedFiles;
pub use report::FailureReporter;
pub use report::NoopProgress;
pub use report::Operation;
pub use report::ProgressCallback;
pub use report::TracingReporter;
