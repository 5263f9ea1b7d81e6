//! CLI argument parsing using clap.

use clap::Parser;
use clap::Subcommand;
use clap_complete::Shell;
use dirzip_core::creation::config::DEFAULT_COMPRESSION_LEVEL;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dirzip")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output and debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compress a folder into a zip archive
    Zip(ZipArgs),
    /// Extract a zip archive into a folder
    Unzip(UnzipArgs),
    /// Generate shell completions
    Completion(CompletionArgs),
}

#[derive(clap::Args)]
pub struct ZipArgs {
    /// Folder to compress
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Folder the archive is written into (created if missing)
    #[arg(value_name = "TARGET_DIR")]
    pub target_dir: PathBuf,

    /// Archive file name; `.zip` is appended if missing
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Compression level (1-9)
    #[arg(
        short = 'l',
        long,
        default_value_t = DEFAULT_COMPRESSION_LEVEL,
        value_parser = clap::value_parser!(u8).range(1..=9)
    )]
    pub compression_level: u8,

    /// Store entries under the source folder's own name
    #[arg(long)]
    pub include_root: bool,

    /// Exclude entries whose relative path contains or matches PATTERN (can
    /// be repeated)
    #[arg(long = "exclude", short = 'x', value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Follow symbolic links instead of skipping them
    #[arg(long)]
    pub follow_symlinks: bool,

    /// Do not record Unix permission bits
    #[arg(long)]
    pub no_preserve_permissions: bool,
}

#[derive(clap::Args)]
pub struct UnzipArgs {
    /// Path to the zip archive
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Output folder (default: current directory)
    #[arg(value_name = "TARGET_DIR")]
    pub target_dir: Option<PathBuf>,

    /// Leave files that already exist untouched
    #[arg(long)]
    pub no_overwrite: bool,
}

#[derive(clap::Args)]
pub struct CompletionArgs {
    /// Target shell
    #[arg(value_enum, value_name = "SHELL")]
    pub shell: Shell,
}
