//! Unzip command implementation.

use crate::cli::UnzipArgs;
use crate::error::CliReporter;
use crate::error::add_job_context;
use crate::output::OutputFormatter;
use crate::progress::CliProgress;
use anyhow::Context;
use anyhow::Result;
use dirzip_core::ExtractOptions;
use dirzip_core::NoopProgress;
use dirzip_core::Operation;
use dirzip_core::unzip_file_detailed;
use std::env;

pub fn execute(args: &UnzipArgs, formatter: &dyn OutputFormatter, show_progress: bool) -> Result<()> {
    let target_dir = match &args.target_dir {
        Some(dir) => dir.clone(),
        None => env::current_dir().context("failed to get current directory")?,
    };
    let options = ExtractOptions::new().with_overwrite(!args.no_overwrite);

    let result = if show_progress {
        let mut progress = CliProgress::new("Unzipping");
        unzip_file_detailed(
            &args.archive,
            &target_dir,
            &options,
            &CliReporter,
            &mut progress,
        )
    } else {
        unzip_file_detailed(
            &args.archive,
            &target_dir,
            &options,
            &CliReporter,
            &mut NoopProgress,
        )
    };
    let extracted = add_job_context(result, Operation::Extract, &args.archive)?;

    if extracted.skipped > 0 {
        formatter.format_warning(&format!(
            "{} existing file(s) left untouched",
            extracted.skipped
        ));
    }

    formatter.format_unzip_result(&target_dir, &extracted.written)
}
