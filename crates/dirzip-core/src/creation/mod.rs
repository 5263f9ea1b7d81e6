//! Folder-to-zip creation.
//!
//! The walker produces filtered entries, and `zip` writes them into a
//! DEFLATE container.

pub mod config;
pub mod filters;
pub mod walker;
pub mod zip;

pub use config::ArchiveOptions;
pub use filters::ExcludeFilter;
pub use walker::EntryType;
pub use walker::FilteredEntry;
pub use walker::FilteredWalker;
