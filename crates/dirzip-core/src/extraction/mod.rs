//! Zip-to-folder extraction.

pub mod config;
pub mod zip;

pub use config::ExtractOptions;
pub use zip::ExtractedFiles;
