//! ZIP archive writing.

use crate::ProgressCallback;
use crate::Result;
use crate::creation::config::ArchiveOptions;
use crate::creation::walker::EntryType;
use crate::creation::walker::FilteredEntry;
use std::fs::File;
use std::io::Read;
use std::io::Seek;
use std::io::Write;
use std::path::Path;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Entries at or above this size need ZIP64 headers.
const LARGE_FILE_THRESHOLD: u64 = u32::MAX as u64;

/// Counters collected while writing an archive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteStats {
    /// File entries written.
    pub files: usize,
    /// Directory entries written, including the root prefix entry.
    pub directories: usize,
    /// Uncompressed bytes copied into the archive.
    pub bytes: u64,
}

/// Writes `entries` into a new zip container on `writer` and finalizes it.
///
/// When `root` is set, every entry name is prefixed with `root/` and a
/// directory entry for `root/` itself is written first.
///
/// Returns the underlying writer after the central directory has been
/// written, so the caller can flush or sync it.
///
/// # Errors
///
/// Returns an error if a source file cannot be read or the zip stream
/// cannot be written.
pub fn write_zip<W: Write + Seek>(
    writer: W,
    entries: &[FilteredEntry],
    root: Option<&str>,
    options: &ArchiveOptions,
    progress: &mut dyn ProgressCallback,
) -> Result<(W, WriteStats)> {
    let mut zip = ZipWriter::new(writer);
    let mut stats = WriteStats::default();
    let base = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(i64::from(options.compression_level)));

    let total = entries.len() + usize::from(root.is_some());
    let mut current = 0;

    if let Some(root) = root {
        current += 1;
        let name = format!("{root}/");
        progress.on_entry_start(Path::new(&name), total, current);
        zip.add_directory(name.as_str(), base)?;
        stats.directories += 1;
        progress.on_entry_complete(Path::new(&name));
    }

    let mut buffer = vec![0u8; COPY_BUFFER_SIZE];

    for entry in entries {
        current += 1;
        let name = match root {
            Some(root) => format!("{root}/{}", entry.name),
            None => entry.name.clone(),
        };
        progress.on_entry_start(Path::new(&name), total, current);

        match entry.entry_type {
            EntryType::Directory => {
                zip.add_directory(format!("{name}/").as_str(), base)?;
                stats.directories += 1;
            }
            EntryType::File => {
                stats.bytes += add_file(
                    &mut zip,
                    &entry.path,
                    &name,
                    base,
                    options.preserve_permissions,
                    progress,
                    &mut buffer,
                )?;
                stats.files += 1;
            }
        }

        tracing::debug!(name, "added entry");
        progress.on_entry_complete(Path::new(&name));
    }

    let writer = zip.finish()?;
    progress.on_complete();

    Ok((writer, stats))
}

fn add_file<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    file_path: &Path,
    name: &str,
    base: SimpleFileOptions,
    preserve_permissions: bool,
    progress: &mut dyn ProgressCallback,
    buffer: &mut [u8],
) -> Result<u64> {
    let mut file = File::open(file_path)?;
    let metadata = file.metadata()?;

    let mut file_options = base.large_file(metadata.len() >= LARGE_FILE_THRESHOLD);
    if preserve_permissions {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file_options = file_options.unix_permissions(metadata.permissions().mode());
        }
    }

    zip.start_file(name, file_options)?;

    let mut bytes_written = 0u64;
    loop {
        let bytes_read = file.read(buffer)?;
        if bytes_read == 0 {
            break;
        }
        zip.write_all(&buffer[..bytes_read])?;
        bytes_written += bytes_read as u64;
        progress.on_bytes_written(bytes_read as u64);
    }

    Ok(bytes_written)
}
