//! Options for unzipping an archive.

/// Options for [`unzip_file`](crate::unzip_file).
///
/// # Examples
///
/// ```
/// use dirzip_core::ExtractOptions;
///
/// let keep_existing = ExtractOptions::default().with_overwrite(false);
/// assert!(!keep_existing.overwrite);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Replace files that already exist at the destination.
    ///
    /// When `false`, existing files are left untouched and omitted from the
    /// returned list.
    ///
    /// Default: `true`.
    pub overwrite: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self { overwrite: true }
    }
}

impl ExtractOptions {
    /// Creates options with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether existing files are overwritten.
    #[must_use]
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }
}
