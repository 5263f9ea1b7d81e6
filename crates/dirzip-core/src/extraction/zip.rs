//! ZIP archive extraction.

use crate::ArchiveError;
use crate::ProgressCallback;
use crate::Result;
use crate::cleanup::CreatedFiles;
use crate::extraction::config::ExtractOptions;
use std::fs;
use std::fs::File;
use std::io::Read;
use std::io::Seek;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Outcome of extracting one archive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedFiles {
    /// Absolute destination of every file written, in archive order.
    pub written: Vec<PathBuf>,
    /// File entries left alone because the destination already existed.
    pub skipped: usize,
    /// Directory entries processed.
    pub directories: usize,
}

/// Extracts every entry of the zip container read from `reader` into
/// `target`.
///
/// `target` must already exist and be absolute. Entries are handled one at a
/// time. A file is fully written and closed before the next entry is read.
/// If any entry fails, files this call created are removed before the error
/// is returned.
///
/// # Errors
///
/// Returns an error if the container is malformed, an entry name is unsafe,
/// or a destination cannot be written.
pub fn extract_zip<R: Read + Seek>(
    reader: R,
    target: &Path,
    options: &ExtractOptions,
    progress: &mut dyn ProgressCallback,
) -> Result<ExtractedFiles> {
    let mut archive = zip::ZipArchive::new(reader)?;
    let total = archive.len();
    let mut created = CreatedFiles::new();
    let mut result = ExtractedFiles::default();
    let mut buffer = vec![0u8; COPY_BUFFER_SIZE];

    for index in 0..total {
        let mut entry = archive.by_index(index)?;
        let name = entry.name().to_string();
        let relative = entry
            .enclosed_name()
            .ok_or_else(|| ArchiveError::UnsafeEntryPath { name: name.clone() })?;
        let destination = target.join(relative);

        progress.on_entry_start(Path::new(&name), total, index + 1);

        if entry.is_dir() {
            fs::create_dir_all(&destination)?;
            result.directories += 1;
        } else if options.overwrite || !destination.exists() {
            if let Some(parent) = destination.parent() {
                fs::create_dir_all(parent)?;
            }
            let existed = destination.exists();
            let mut output = File::create(&destination)?;
            if !existed {
                created.track(destination.clone());
            }

            loop {
                let bytes_read = entry.read(&mut buffer)?;
                if bytes_read == 0 {
                    break;
                }
                output.write_all(&buffer[..bytes_read])?;
                progress.on_bytes_written(bytes_read as u64);
            }
            output.flush()?;

            tracing::debug!(name, destination = %destination.display(), "extracted entry");
            result.written.push(destination);
        } else {
            tracing::debug!(name, "destination exists, skipping");
            result.skipped += 1;
        }

        progress.on_entry_complete(Path::new(&name));
    }

    created.commit();
    progress.on_complete();

    Ok(result)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::NoopProgress;
    use crate::report::testing::RecordingProgress;
    use std::io::Cursor;
    use tempfile::TempDir;
    use zip::ZipWriter;
    use zip::write::SimpleFileOptions;

    fn build_zip(entries: &[(&str, Option<&str>)]) -> Vec<u8> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();
        for (name, contents) in entries {
            match contents {
                Some(bytes) => {
                    zip.start_file(*name, options).unwrap();
                    zip.write_all(bytes.as_bytes()).unwrap();
                }
                None => zip.add_directory(*name, options).unwrap(),
            }
        }
        zip.finish().unwrap().into_inner()
    }

    #[test]
    fn test_extract_files_and_directories() {
        let bytes = build_zip(&[
            ("docs/", None),
            ("docs/readme.md", Some("# hi")),
            ("top.txt", Some("top")),
            ("empty/", None),
        ]);
        let temp = TempDir::new().unwrap();

        let result = extract_zip(
            Cursor::new(bytes),
            temp.path(),
            &ExtractOptions::default(),
            &mut NoopProgress,
        )
        .unwrap();

        assert_eq!(
            result.written,
            vec![temp.path().join("docs/readme.md"), temp.path().join("top.txt")]
        );
        assert_eq!(result.directories, 2);
        assert_eq!(result.skipped, 0);
        assert_eq!(fs::read(temp.path().join("docs/readme.md")).unwrap(), b"# hi");
        assert!(temp.path().join("empty").is_dir());
    }

    #[test]
    fn test_extract_creates_missing_parents() {
        let bytes = build_zip(&[("a/b/c/deep.txt", Some("deep"))]);
        let temp = TempDir::new().unwrap();

        let result = extract_zip(
            Cursor::new(bytes),
            temp.path(),
            &ExtractOptions::default(),
            &mut NoopProgress,
        )
        .unwrap();

        assert_eq!(result.written.len(), 1);
        assert_eq!(
            fs::read_to_string(temp.path().join("a/b/c/deep.txt")).unwrap(),
            "deep"
        );
    }

    #[test]
    fn test_extract_skips_existing_without_overwrite() {
        let bytes = build_zip(&[("keep.txt", Some("new")), ("fresh.txt", Some("fresh"))]);
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("keep.txt"), "old").unwrap();

        let result = extract_zip(
            Cursor::new(bytes),
            temp.path(),
            &ExtractOptions::default().with_overwrite(false),
            &mut NoopProgress,
        )
        .unwrap();

        assert_eq!(result.written, vec![temp.path().join("fresh.txt")]);
        assert_eq!(result.skipped, 1);
        assert_eq!(fs::read_to_string(temp.path().join("keep.txt")).unwrap(), "old");
    }

    #[test]
    fn test_extract_rejects_traversal() {
        let bytes = build_zip(&[("ok.txt", Some("ok")), ("../escape.txt", Some("bad"))]);
        let outer = TempDir::new().unwrap();
        let target = outer.path().join("target");
        fs::create_dir(&target).unwrap();

        let err = extract_zip(
            Cursor::new(bytes),
            &target,
            &ExtractOptions::default(),
            &mut NoopProgress,
        )
        .unwrap_err();

        assert!(matches!(err, ArchiveError::UnsafeEntryPath { ref name } if name == "../escape.txt"));
        assert!(!outer.path().join("escape.txt").exists());
        // Files created before the failure are rolled back.
        assert!(!target.join("ok.txt").exists());
    }

    #[test]
    fn test_extract_rollback_keeps_preexisting_files() {
        let bytes = build_zip(&[
            ("existing.txt", Some("replaced")),
            ("created.txt", Some("created")),
            ("../abs.txt", Some("bad")),
        ]);
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("existing.txt"), "original").unwrap();

        let result = extract_zip(
            Cursor::new(bytes),
            temp.path(),
            &ExtractOptions::default(),
            &mut NoopProgress,
        );

        assert!(result.is_err());
        assert!(temp.path().join("existing.txt").exists());
        assert!(!temp.path().join("created.txt").exists());
    }

    #[test]
    fn test_extract_malformed_archive() {
        let temp = TempDir::new().unwrap();
        let err = extract_zip(
            Cursor::new(b"definitely not a zip".to_vec()),
            temp.path(),
            &ExtractOptions::default(),
            &mut NoopProgress,
        )
        .unwrap_err();

        assert!(matches!(err, ArchiveError::Zip(_)));
        assert_eq!(err.kind(), crate::ErrorKind::IoFailure);
    }

    #[test]
    fn test_extract_progress_events() {
        let bytes = build_zip(&[("d/", None), ("d/x.bin", Some("0123456789".repeat(10).as_str()))]);
        let temp = TempDir::new().unwrap();
        let mut progress = RecordingProgress::default();

        extract_zip(
            Cursor::new(bytes),
            temp.path(),
            &ExtractOptions::default(),
            &mut progress,
        )
        .unwrap();

        assert_eq!(progress.started.len(), 2);
        assert_eq!(progress.started[1], ("d/x.bin".to_string(), 2, 2));
        assert_eq!(progress.completed, vec!["d/", "d/x.bin"]);
        assert_eq!(progress.bytes, 100);
        assert!(progress.finished);
    }
}
