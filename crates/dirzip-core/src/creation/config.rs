//! Options for zipping a folder.

use crate::ArchiveError;
use crate::Result;

/// Default compression level (best compression).
pub const DEFAULT_COMPRESSION_LEVEL: u8 = 9;

/// Options for [`zip_folder`](crate::zip_folder).
///
/// # Examples
///
/// ```
/// use dirzip_core::ArchiveOptions;
///
/// let options = ArchiveOptions::default()
///     .with_compression_level(6)
///     .with_include_root(true)
///     .with_exclude(vec!["node_modules".to_string(), r"\.log$".to_string()]);
///
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveOptions {
    /// DEFLATE compression level, 1 (fastest) to 9 (smallest).
    ///
    /// Default: `9`.
    pub compression_level: u8,

    /// Prefix every entry with the source folder's own name.
    ///
    /// Default: `false` (entries are relative to the folder's contents).
    pub include_root: bool,

    /// Exclusion patterns.
    ///
    /// An entry is skipped if a pattern occurs in its relative name as a
    /// literal substring, or matches it as a regular expression. See
    /// [`ExcludeFilter`](crate::creation::filters::ExcludeFilter).
    ///
    /// Default: empty.
    pub exclude: Vec<String>,

    /// Follow symlinks while walking the source folder.
    ///
    /// Default: `false` (symlinks are skipped with a warning).
    pub follow_symlinks: bool,

    /// Store Unix permission bits on file entries.
    ///
    /// Default: `true`. Has no effect on non-Unix platforms.
    pub preserve_permissions: bool,
}

impl Default for ArchiveOptions {
    fn default() -> Self {
        Self {
            compression_level: DEFAULT_COMPRESSION_LEVEL,
            include_root: false,
            exclude: Vec::new(),
            follow_symlinks: false,
            preserve_permissions: true,
        }
    }
}

impl ArchiveOptions {
    /// Creates options with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the compression level.
    ///
    /// The value is checked by [`validate`](Self::validate), which
    /// `zip_folder` calls before writing anything.
    #[must_use]
    pub fn with_compression_level(mut self, level: u8) -> Self {
        self.compression_level = level;
        self
    }

    /// Sets whether the folder name prefixes every entry.
    #[must_use]
    pub fn with_include_root(mut self, include_root: bool) -> Self {
        self.include_root = include_root;
        self
    }

    /// Sets the exclusion patterns.
    #[must_use]
    pub fn with_exclude(mut self, patterns: Vec<String>) -> Self {
        self.exclude = patterns;
        self
    }

    /// Sets whether symlinks are followed.
    #[must_use]
    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Sets whether permissions are stored.
    #[must_use]
    pub fn with_preserve_permissions(mut self, preserve: bool) -> Self {
        self.preserve_permissions = preserve;
        self
    }

    /// Validates the options.
    ///
    /// Exclusion patterns are checked when the filter is compiled, not here.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::InvalidCompressionLevel`] if the level is not
    /// in 1-9.
    pub fn validate(&self) -> Result<()> {
        if !(1..=9).contains(&self.compression_level) {
            return Err(ArchiveError::InvalidCompressionLevel {
                level: self.compression_level,
            });
        }
        Ok(())
    }
}
