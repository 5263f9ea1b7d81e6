//! Error types for archive creation and extraction.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `ArchiveError`.
pub type Result<T> = std::result::Result<T, ArchiveError>;

/// Coarse classification of an [`ArchiveError`].
///
/// Callers that only need to decide how to present a failure can match on
/// this instead of on every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The source directory was absent (or not a directory) at archive time.
    NotFound,
    /// An underlying read, write, walk or zip stream error, including
    /// malformed archive contents.
    IoFailure,
    /// Anything not otherwise classified, such as invalid options.
    Unknown,
}

/// Errors that can occur while zipping a folder or unzipping an archive.
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// Source directory does not exist.
    #[error("source folder not found: {path}")]
    SourceNotFound {
        /// Resolved source path.
        path: PathBuf,
    },

    /// Source path exists but is not a directory.
    #[error("source is not a folder: {path}")]
    SourceNotDirectory {
        /// Resolved source path.
        path: PathBuf,
    },

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The zip container could not be written or parsed.
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Directory traversal failed.
    #[error("cannot walk source folder: {0}")]
    Walk(#[from] walkdir::Error),

    /// Archive entry name is absolute or escapes the target directory.
    #[error("unsafe entry path in archive: {name}")]
    UnsafeEntryPath {
        /// Entry name as stored in the archive.
        name: String,
    },

    /// A path cannot be stored as a zip entry name.
    #[error("path is not valid UTF-8: {path}")]
    NonUtf8Path {
        /// Offending path.
        path: PathBuf,
    },

    /// Compression level outside 1-9.
    #[error("invalid compression level {level}, expected 1-9")]
    InvalidCompressionLevel {
        /// Requested level.
        level: u8,
    },

    /// Exclusion pattern is not a valid regular expression.
    #[error("invalid exclude pattern '{pattern}': {source}")]
    InvalidExcludePattern {
        /// Pattern as given by the caller.
        pattern: String,
        /// Regex compilation error.
        #[source]
        source: regex::Error,
    },

    /// A background job panicked or was cancelled before finishing.
    #[error("background task failed: {0}")]
    Join(String),
}

impl ArchiveError {
    /// Returns the coarse classification of this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use dirzip_core::ArchiveError;
    /// use dirzip_core::ErrorKind;
    /// use std::path::PathBuf;
    ///
    /// let err = ArchiveError::SourceNotFound {
    ///     path: PathBuf::from("/missing"),
    /// };
    /// assert_eq!(err.kind(), ErrorKind::NotFound);
    ///
    /// let err = ArchiveError::InvalidCompressionLevel { level: 12 };
    /// assert_eq!(err.kind(), ErrorKind::Unknown);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::SourceNotFound { .. } | Self::SourceNotDirectory { .. } => ErrorKind::NotFound,
            Self::Io(_)
            | Self::Zip(_)
            | Self::Walk(_)
            | Self::UnsafeEntryPath { .. }
            | Self::NonUtf8Path { .. } => ErrorKind::IoFailure,
            Self::InvalidCompressionLevel { .. }
            | Self::InvalidExcludePattern { .. }
            | Self::Join(_) => ErrorKind::Unknown,
        }
    }

    /// Returns `true` if the error was raised before any output was written.
    ///
    /// Source and option checks run eagerly, so these failures never leave
    /// anything on disk.
    #[must_use]
    pub const fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::SourceNotFound { .. }
                | Self::SourceNotDirectory { .. }
                | Self::InvalidCompressionLevel { .. }
                | Self::InvalidExcludePattern { .. }
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_source_not_found_display() {
        let err = ArchiveError::SourceNotFound {
            path: PathBuf::from("/no/such/dir"),
        };
        assert!(err.to_string().contains("source folder not found"));
        assert!(err.to_string().contains("/no/such/dir"));
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.is_precondition());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ArchiveError = io_err.into();
        assert!(matches!(err, ArchiveError::Io(_)));
        assert_eq!(err.kind(), ErrorKind::IoFailure);
        assert!(!err.is_precondition());
    }

    #[test]
    fn test_zip_error_is_io_failure() {
        let err: ArchiveError = zip::result::ZipError::InvalidArchive("bad".into()).into();
        assert_eq!(err.kind(), ErrorKind::IoFailure);
        assert!(err.to_string().starts_with("zip error"));
    }

    #[test]
    fn test_invalid_pattern_keeps_source() {
        use std::error::Error;

        let source = regex::Regex::new("(").unwrap_err();
        let err = ArchiveError::InvalidExcludePattern {
            pattern: "(".into(),
            source,
        };
        assert_eq!(err.kind(), ErrorKind::Unknown);
        assert!(err.source().is_some());
        assert!(err.to_string().contains("'('"));
    }

    #[test]
    fn test_unsafe_entry_path() {
        let err = ArchiveError::UnsafeEntryPath {
            name: "../etc/passwd".into(),
        };
        assert_eq!(err.kind(), ErrorKind::IoFailure);
        assert!(err.to_string().contains("../etc/passwd"));
    }
}
