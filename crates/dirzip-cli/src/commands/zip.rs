//! Zip command implementation.

use crate::cli::ZipArgs;
use crate::error::CliReporter;
use crate::error::add_job_context;
use crate::output::OutputFormatter;
use crate::progress::CliProgress;
use anyhow::Context;
use anyhow::Result;
use dirzip_core::ArchiveOptions;
use dirzip_core::NoopProgress;
use dirzip_core::Operation;
use dirzip_core::zip_folder_with;
use std::fs;

pub fn execute(args: &ZipArgs, formatter: &dyn OutputFormatter, show_progress: bool) -> Result<()> {
    let options = ArchiveOptions::new()
        .with_compression_level(args.compression_level)
        .with_include_root(args.include_root)
        .with_exclude(args.exclude.clone())
        .with_follow_symlinks(args.follow_symlinks)
        .with_preserve_permissions(!args.no_preserve_permissions);

    let result = if show_progress {
        let mut progress = CliProgress::new("Zipping");
        zip_folder_with(
            &args.source,
            &args.target_dir,
            &args.name,
            &options,
            &CliReporter,
            &mut progress,
        )
    } else {
        zip_folder_with(
            &args.source,
            &args.target_dir,
            &args.name,
            &options,
            &CliReporter,
            &mut NoopProgress,
        )
    };
    let archive = add_job_context(result, Operation::Archive, &args.source)?;

    let archive_size = fs::metadata(&archive)
        .with_context(|| format!("failed to stat archive '{}'", archive.display()))?
        .len();

    formatter.format_zip_result(&archive, archive_size)
}
