//! Directory tree walking with exclusion filtering.

use crate::Result;
use crate::creation::filters::ExcludeFilter;
use crate::paths;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Walks a source folder and yields the entries that belong in the archive.
///
/// The walker:
/// - visits entries in file-name order so archives are reproducible
/// - never yields the root folder itself
/// - skips names rejected by the [`ExcludeFilter`]
/// - skips one specific path (the archive being written), if set
/// - skips symlinks unless they are followed
///
/// # Examples
///
/// ```no_run
/// use dirzip_core::creation::filters::ExcludeFilter;
/// use dirzip_core::creation::walker::FilteredWalker;
/// use std::path::Path;
///
/// let filter = ExcludeFilter::default();
/// let walker = FilteredWalker::new(Path::new("./project"), &filter);
///
/// for entry in walker.walk() {
///     let entry = entry?;
///     println!("would add: {}", entry.name);
/// }
/// # Ok::<(), dirzip_core::ArchiveError>(())
/// ```
pub struct FilteredWalker<'a> {
    root: &'a Path,
    filter: &'a ExcludeFilter,
    follow_symlinks: bool,
    skip_path: Option<&'a Path>,
}

impl<'a> FilteredWalker<'a> {
    /// Creates a walker rooted at `root`.
    #[must_use]
    pub fn new(root: &'a Path, filter: &'a ExcludeFilter) -> Self {
        Self {
            root,
            filter,
            follow_symlinks: false,
            skip_path: None,
        }
    }

    /// Sets whether symlinks are followed.
    #[must_use]
    pub fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Never yields `path`, even if it lies under the root.
    #[must_use]
    pub fn skip_path(mut self, path: &'a Path) -> Self {
        self.skip_path = Some(path);
        self
    }

    /// Returns an iterator over the entries to archive.
    ///
    /// # Errors
    ///
    /// Items are errors if a directory cannot be read, a symlink loop is
    /// found while following links, or a name is not valid UTF-8.
    pub fn walk(&self) -> impl Iterator<Item = Result<FilteredEntry>> + '_ {
        WalkDir::new(self.root)
            .min_depth(1)
            .follow_links(self.follow_symlinks)
            .sort_by_file_name()
            .into_iter()
            .filter_map(move |entry| match entry {
                Ok(entry) => self.build_entry(&entry).transpose(),
                Err(e) => Some(Err(e.into())),
            })
    }

    fn build_entry(&self, entry: &walkdir::DirEntry) -> Result<Option<FilteredEntry>> {
        let path = entry.path();

        if self.skip_path.is_some_and(|skip| skip == path) {
            return Ok(None);
        }

        let file_type = entry.file_type();
        let entry_type = if file_type.is_dir() {
            EntryType::Directory
        } else if file_type.is_file() {
            EntryType::File
        } else {
            // Only reachable for symlinks when not following, or for
            // sockets and other special files.
            tracing::warn!(path = %path.display(), "skipping non-regular file");
            return Ok(None);
        };

        let relative = path.strip_prefix(self.root).unwrap_or(path);
        let name = paths::entry_name(relative)?;

        if self.filter.is_excluded(&name) {
            tracing::debug!(name, "excluded by pattern");
            return Ok(None);
        }

        Ok(Some(FilteredEntry {
            path: path.to_path_buf(),
            name,
            entry_type,
        }))
    }
}

/// An entry that passed filtering and is ready to be archived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredEntry {
    /// Full filesystem path.
    pub path: PathBuf,

    /// `/`-separated name relative to the source folder, without any root
    /// prefix and without a trailing slash.
    pub name: String,

    /// File or directory.
    pub entry_type: EntryType,
}

/// Kind of archive entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    /// Regular file with contents.
    File,

    /// Directory marker.
    Directory,
}

/// Collects every filtered entry of `walker` so the total is known up front.
///
/// # Errors
///
/// Returns the first error produced by the walk.
pub fn collect_entries(walker: &FilteredWalker<'_>) -> Result<Vec<FilteredEntry>> {
    walker.walk().collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn sample_tree() -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.txt"), "a").unwrap();
        fs::create_dir_all(temp.path().join("sub/deep")).unwrap();
        fs::write(temp.path().join("sub/b.txt"), "b").unwrap();
        fs::write(temp.path().join("sub/deep/c.log"), "c").unwrap();
        fs::create_dir(temp.path().join("empty")).unwrap();
        temp
    }

    fn names(entries: &[FilteredEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_walk_sorted_without_root() {
        let temp = sample_tree();
        let filter = ExcludeFilter::default();
        let walker = FilteredWalker::new(temp.path(), &filter);
        let entries = collect_entries(&walker).unwrap();

        assert_eq!(
            names(&entries),
            vec!["a.txt", "empty", "sub", "sub/b.txt", "sub/deep", "sub/deep/c.log"]
        );
        assert_eq!(entries[0].entry_type, EntryType::File);
        assert_eq!(entries[1].entry_type, EntryType::Directory);
        assert_eq!(entries[0].path, temp.path().join("a.txt"));
    }

    #[test]
    fn test_walk_applies_filter_per_entry() {
        let temp = sample_tree();
        let filter = ExcludeFilter::new(&[r"\.log$".to_string(), "empty".to_string()]).unwrap();
        let walker = FilteredWalker::new(temp.path(), &filter);
        let entries = collect_entries(&walker).unwrap();

        assert_eq!(
            names(&entries),
            vec!["a.txt", "sub", "sub/b.txt", "sub/deep"]
        );
    }

    #[test]
    fn test_walk_excluded_dir_children_judged_on_own_name() {
        let temp = sample_tree();
        // Anchored regex matches "sub" only, not "sub/b.txt".
        let filter = ExcludeFilter::new(&["^sub$".to_string()]).unwrap();
        let walker = FilteredWalker::new(temp.path(), &filter);
        let entries = collect_entries(&walker).unwrap();

        let names = names(&entries);
        assert!(!names.contains(&"sub"));
        assert!(names.contains(&"sub/b.txt"));
    }

    #[test]
    fn test_walk_skip_path() {
        let temp = sample_tree();
        let skip = temp.path().join("a.txt");
        let filter = ExcludeFilter::default();
        let walker = FilteredWalker::new(temp.path(), &filter).skip_path(&skip);
        let entries = collect_entries(&walker).unwrap();

        assert!(!names(&entries).contains(&"a.txt"));
        assert!(names(&entries).contains(&"sub/b.txt"));
    }

    #[cfg(unix)]
    #[test]
    fn test_walk_symlinks() {
        let temp = sample_tree();
        std::os::unix::fs::symlink(temp.path().join("a.txt"), temp.path().join("link.txt"))
            .unwrap();
        let filter = ExcludeFilter::default();

        let walker = FilteredWalker::new(temp.path(), &filter);
        let entries = collect_entries(&walker).unwrap();
        assert!(!names(&entries).contains(&"link.txt"));

        let walker = FilteredWalker::new(temp.path(), &filter).follow_symlinks(true);
        let entries = collect_entries(&walker).unwrap();
        let link = entries.iter().find(|e| e.name == "link.txt").unwrap();
        assert_eq!(link.entry_type, EntryType::File);
    }

    #[test]
    fn test_walk_missing_root_errors() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing");
        let filter = ExcludeFilter::default();
        let walker = FilteredWalker::new(&missing, &filter);
        assert!(collect_entries(&walker).is_err());
    }
}
