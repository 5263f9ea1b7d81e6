//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use std::io::{self};
use std::path::Path;
use std::path::PathBuf;

pub struct JsonFormatter;

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        Self::write_to(io::stdout(), value)
    }

    fn write_to<W: Write, T: Serialize>(mut writer: W, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(writer, "{json}")?;
        Ok(())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_zip_result(&self, archive: &Path, archive_size: u64) -> Result<()> {
        #[derive(Serialize)]
        struct ZipOutput {
            archive: String,
            archive_size: u64,
        }

        let data = ZipOutput {
            archive: archive.display().to_string(),
            archive_size,
        };

        Self::output(&JsonOutput::success("zip", data))
    }

    fn format_unzip_result(&self, target: &Path, written: &[PathBuf]) -> Result<()> {
        #[derive(Serialize)]
        struct UnzipOutput {
            target_dir: String,
            files_written: usize,
            files: Vec<String>,
        }

        let data = UnzipOutput {
            target_dir: target.display().to_string(),
            files_written: written.len(),
            files: written.iter().map(|p| p.display().to_string()).collect(),
        };

        Self::output(&JsonOutput::success("unzip", data))
    }

    fn format_error(&self, operation: &str, error: &anyhow::Error) {
        let output = JsonOutput::error(operation, format!("{error:#}"));
        let _ = Self::output(&output);
    }

    // Warnings go to stderr so stdout stays a single JSON document.
    fn format_warning(&self, message: &str) {
        #[derive(Serialize)]
        struct WarningData {
            message: String,
        }

        let output = JsonOutput::success(
            "warning",
            WarningData {
                message: message.to_string(),
            },
        );
        let _ = Self::write_to(io::stderr(), &output);
    }
}
