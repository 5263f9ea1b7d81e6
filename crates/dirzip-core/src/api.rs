//! High-level public API for zipping folders and unzipping archives.

use crate::ArchiveError;
use crate::ArchiveOptions;
use crate::ExtractOptions;
use crate::FailureReporter;
use crate::NoopProgress;
use crate::Operation;
use crate::ProgressCallback;
use crate::Result;
use crate::TracingReporter;
use crate::cleanup::PartialFile;
use crate::creation::filters::ExcludeFilter;
use crate::creation::walker::FilteredWalker;
use crate::creation::walker::collect_entries;
use crate::creation::zip::write_zip;
use crate::extraction::ExtractedFiles;
use crate::extraction::zip::extract_zip;
use crate::paths;
use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::io::BufWriter;
use std::path::Path;
use std::path::PathBuf;

/// Compresses `source` into `target_dir/archive_name`.
///
/// `archive_name` gets a `.zip` suffix if it lacks one. `target_dir` is
/// created if missing. Failures are logged through `tracing` before being
/// returned.
///
/// # Errors
///
/// Returns an error if:
/// - `source` does not exist or is not a folder (checked before any write)
/// - the options are invalid (checked before any write)
/// - any I/O or zip stream operation fails
///
/// # Examples
///
/// ```no_run
/// use dirzip_core::ArchiveOptions;
/// use dirzip_core::zip_folder;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let options = ArchiveOptions::default().with_exclude(vec!["node_modules".into()]);
/// let archive = zip_folder("project", "out", "app", &options)?;
/// assert!(archive.ends_with("app.zip"));
/// # Ok(())
/// # }
/// ```
pub fn zip_folder<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    target_dir: Q,
    archive_name: &str,
    options: &ArchiveOptions,
) -> Result<PathBuf> {
    zip_folder_with(
        source,
        target_dir,
        archive_name,
        options,
        &TracingReporter,
        &mut NoopProgress,
    )
}

/// Same as [`zip_folder`] with an explicit failure reporter and progress
/// callback.
///
/// The reporter is called exactly once if the job fails, with the source
/// path as given by the caller.
///
/// # Errors
///
/// See [`zip_folder`].
pub fn zip_folder_with<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    target_dir: Q,
    archive_name: &str,
    options: &ArchiveOptions,
    reporter: &dyn FailureReporter,
    progress: &mut dyn ProgressCallback,
) -> Result<PathBuf> {
    let source = source.as_ref();
    create_archive(source, target_dir.as_ref(), archive_name, options, progress).inspect_err(
        |e| reporter.report_failure(Operation::Archive, source, e),
    )
}

fn create_archive(
    source: &Path,
    target_dir: &Path,
    archive_name: &str,
    options: &ArchiveOptions,
    progress: &mut dyn ProgressCallback,
) -> Result<PathBuf> {
    let source = paths::resolve(source)?;
    let target_dir = paths::resolve(target_dir)?;

    match fs::metadata(&source) {
        Ok(metadata) if metadata.is_dir() => {}
        Ok(_) => return Err(ArchiveError::SourceNotDirectory { path: source }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ArchiveError::SourceNotFound { path: source });
        }
        Err(e) => return Err(e.into()),
    }

    options.validate()?;
    let filter = ExcludeFilter::new(&options.exclude)?;

    // A filesystem root has no base name; it is archived without a prefix.
    let root = if options.include_root {
        source
            .file_name()
            .map(|name| paths::entry_name(Path::new(name)))
            .transpose()?
            .filter(|name| !name.is_empty())
    } else {
        None
    };

    fs::create_dir_all(&target_dir)?;
    let output_path = paths::archive_path(&target_dir, archive_name);
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let walker = FilteredWalker::new(&source, &filter)
        .follow_symlinks(options.follow_symlinks)
        .skip_path(&output_path);
    let entries = collect_entries(&walker)?;

    // Armed only once the file is ours, so a failed create removes nothing.
    let file = File::create(&output_path)?;
    let guard = PartialFile::new(&output_path);
    let (writer, stats) = write_zip(
        BufWriter::new(file),
        &entries,
        root.as_deref(),
        options,
        progress,
    )?;
    let file = writer.into_inner().map_err(std::io::IntoInnerError::into_error)?;
    file.sync_all()?;
    drop(file);

    tracing::info!(
        source = %source.display(),
        archive = %output_path.display(),
        files = stats.files,
        directories = stats.directories,
        bytes = stats.bytes,
        "folder zipped"
    );

    Ok(guard.commit())
}

/// Extracts `archive` into `target_dir` and returns the files written.
///
/// `target_dir` is created if missing. With `overwrite` disabled, files that
/// already exist are left untouched and are not part of the result.
/// Directories are never part of the result. Failures are logged through
/// `tracing` before being returned.
///
/// # Errors
///
/// Returns an error if the archive cannot be opened or parsed, an entry name
/// escapes the target, or a file cannot be written. Files created by the
/// failed call are removed.
///
/// # Examples
///
/// ```no_run
/// use dirzip_core::ExtractOptions;
/// use dirzip_core::unzip_file;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let written = unzip_file("out/app.zip", "restore", &ExtractOptions::default())?;
/// println!("extracted {} files", written.len());
/// # Ok(())
/// # }
/// ```
pub fn unzip_file<P: AsRef<Path>, Q: AsRef<Path>>(
    archive: P,
    target_dir: Q,
    options: &ExtractOptions,
) -> Result<Vec<PathBuf>> {
    unzip_file_with(
        archive,
        target_dir,
        options,
        &TracingReporter,
        &mut NoopProgress,
    )
}

/// Same as [`unzip_file`] with an explicit failure reporter and progress
/// callback.
///
/// # Errors
///
/// See [`unzip_file`].
pub fn unzip_file_with<P: AsRef<Path>, Q: AsRef<Path>>(
    archive: P,
    target_dir: Q,
    options: &ExtractOptions,
    reporter: &dyn FailureReporter,
    progress: &mut dyn ProgressCallback,
) -> Result<Vec<PathBuf>> {
    unzip_file_detailed(archive, target_dir, options, reporter, progress)
        .map(|extracted| extracted.written)
}

/// Same as [`unzip_file_with`], returning the full [`ExtractedFiles`]
/// outcome, including how many existing files were left untouched.
///
/// # Errors
///
/// See [`unzip_file`].
pub fn unzip_file_detailed<P: AsRef<Path>, Q: AsRef<Path>>(
    archive: P,
    target_dir: Q,
    options: &ExtractOptions,
    reporter: &dyn FailureReporter,
    progress: &mut dyn ProgressCallback,
) -> Result<ExtractedFiles> {
    let archive = archive.as_ref();
    extract_archive(archive, target_dir.as_ref(), options, progress)
        .inspect_err(|e| reporter.report_failure(Operation::Extract, archive, e))
}

fn extract_archive(
    archive: &Path,
    target_dir: &Path,
    options: &ExtractOptions,
    progress: &mut dyn ProgressCallback,
) -> Result<ExtractedFiles> {
    let target_dir = paths::resolve(target_dir)?;
    fs::create_dir_all(&target_dir)?;

    let reader = BufReader::new(File::open(archive)?);
    let extracted = extract_zip(reader, &target_dir, options, progress)?;

    tracing::info!(
        archive = %archive.display(),
        target = %target_dir.display(),
        written = extracted.written.len(),
        skipped = extracted.skipped,
        "archive unzipped"
    );

    Ok(extracted)
}
