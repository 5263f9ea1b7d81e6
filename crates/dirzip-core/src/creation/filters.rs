//! Exclusion filtering for archive creation.
//!
//! Each pattern is tried two ways against an entry's relative name: as a
//! literal substring, and as an unanchored regular expression. Either match
//! excludes the entry.
//!
//! The two checks can disagree. A pattern such as `a.b` excludes `x/a.b`
//! through the substring check, but it also excludes `axb` because `.` is a
//! regex wildcard. Callers who want literal-only behavior should escape the
//! pattern with [`regex::escape`].

use crate::ArchiveError;
use crate::Result;
use regex::Regex;

/// Compiled set of exclusion patterns.
///
/// # Examples
///
/// ```
/// use dirzip_core::creation::filters::ExcludeFilter;
///
/// let filter = ExcludeFilter::new(&["node_modules".to_string(), r"\.log$".to_string()])?;
///
/// assert!(filter.is_excluded("web/node_modules/pkg/index.js"));
/// assert!(filter.is_excluded("logs/server.log"));
/// assert!(!filter.is_excluded("src/main.rs"));
/// # Ok::<(), dirzip_core::ArchiveError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExcludeFilter {
    patterns: Vec<Pattern>,
}

#[derive(Debug, Clone)]
struct Pattern {
    literal: String,
    regex: Regex,
}

impl ExcludeFilter {
    /// Compiles `patterns`.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::InvalidExcludePattern`] for the first pattern
    /// that is not a valid regular expression.
    pub fn new(patterns: &[String]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|pattern| {
                Regex::new(pattern)
                    .map(|regex| Pattern {
                        literal: pattern.clone(),
                        regex,
                    })
                    .map_err(|source| ArchiveError::InvalidExcludePattern {
                        pattern: pattern.clone(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Returns `true` when no patterns are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Returns `true` if `name` must be left out of the archive.
    ///
    /// `name` is the entry's `/`-separated path relative to the source
    /// folder, without the root prefix.
    #[must_use]
    pub fn is_excluded(&self, name: &str) -> bool {
        self.patterns
            .iter()
            .any(|p| name.contains(p.literal.as_str()) || p.regex.is_match(name))
    }
}
