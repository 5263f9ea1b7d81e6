//! Path resolution helpers shared by the archiver and the extractor.

use crate::ArchiveError;
use crate::Result;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

/// Conventional extension appended to archive names that lack it.
pub const ZIP_EXTENSION: &str = ".zip";

/// Resolves `path` against the current directory and folds `.` and `..`
/// components lexically.
///
/// The path does not need to exist. Symlinks are not resolved, so the result
/// stays comparable with paths the caller built from the same inputs.
///
/// # Examples
///
/// ```
/// use dirzip_core::paths::resolve;
/// use std::path::Path;
///
/// let resolved = resolve(Path::new("/data/./out/../app")).unwrap();
/// assert_eq!(resolved, Path::new("/data/app"));
/// ```
pub fn resolve(path: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(path)?;
    Ok(normalize(&absolute))
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // Popping past the root is a no-op, like `cd ..` at `/`.
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Appends `.zip` to `name` unless it already ends with it.
///
/// ```
/// use dirzip_core::paths::archive_file_name;
///
/// assert_eq!(archive_file_name("backup"), "backup.zip");
/// assert_eq!(archive_file_name("backup.zip"), "backup.zip");
/// ```
#[must_use]
pub fn archive_file_name(name: &str) -> String {
    if name.ends_with(ZIP_EXTENSION) {
        name.to_string()
    } else {
        format!("{name}{ZIP_EXTENSION}")
    }
}

/// Builds the archive's output path from an absolute `target_dir` and the
/// caller's archive name.
///
/// The name's components are appended to `target_dir` even when the name is
/// absolute, then the result is folded like [`resolve`]. A name containing
/// `..` can still step out of `target_dir`, but the returned path never
/// contains `.` or `..`.
///
/// ```
/// use dirzip_core::paths::archive_path;
/// use std::path::Path;
///
/// let out = Path::new("/data/out");
/// assert_eq!(archive_path(out, "app"), Path::new("/data/out/app.zip"));
/// assert_eq!(archive_path(out, "/abs/app"), Path::new("/data/out/abs/app.zip"));
/// assert_eq!(archive_path(out, "../app.zip"), Path::new("/data/app.zip"));
/// ```
#[must_use]
pub fn archive_path(target_dir: &Path, archive_name: &str) -> PathBuf {
    let file_name = archive_file_name(archive_name);
    let mut joined = target_dir.to_path_buf();
    for component in Path::new(&file_name).components() {
        match component {
            Component::Prefix(_) | Component::RootDir => {}
            other => joined.push(other.as_os_str()),
        }
    }
    normalize(&joined)
}

/// Converts a relative filesystem path into a zip entry name.
///
/// Zip names always use `/` as the separator regardless of platform.
pub fn entry_name(path: &Path) -> Result<String> {
    let mut parts = Vec::new();
    for component in path.components() {
        if let Component::Normal(part) = component {
            let part = part.to_str().ok_or_else(|| ArchiveError::NonUtf8Path {
                path: path.to_path_buf(),
            })?;
            parts.push(part);
        }
    }
    Ok(parts.join("/"))
}
