//! Example: zipping a folder and unzipping it again
//!
//! Run with: `cargo run --example zip_and_unzip`

use dirzip_core::ArchiveOptions;
use dirzip_core::ExtractOptions;
use dirzip_core::unzip_file;
use dirzip_core::zip_folder;
use std::fs;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let workdir = std::env::temp_dir().join("dirzip-example");
    let project = workdir.join("project");
    fs::create_dir_all(project.join("node_modules/dep"))?;
    fs::write(project.join("readme.md"), "# Example\n")?;
    fs::write(project.join("node_modules/dep/index.js"), "module.exports = 1;\n")?;

    // Example 1: default options
    println!("Example 1: plain zip");
    let archive = zip_folder(&project, workdir.join("out"), "plain", &ArchiveOptions::default())?;
    println!("  Created {}", archive.display());

    // Example 2: exclusions and a root folder
    println!("\nExample 2: exclude node_modules, keep root folder");
    let options = ArchiveOptions::default()
        .with_compression_level(6)
        .with_include_root(true)
        .with_exclude(vec!["node_modules".into()]);
    let archive = zip_folder(&project, workdir.join("out"), "app.zip", &options)?;
    println!("  Created {}", archive.display());

    // Example 3: extract without touching existing files
    println!("\nExample 3: unzip without overwrite");
    let restore = workdir.join("restore");
    let written = unzip_file(&archive, &restore, &ExtractOptions::default())?;
    println!("  First pass wrote {} files", written.len());
    let written = unzip_file(
        &archive,
        &restore,
        &ExtractOptions::default().with_overwrite(false),
    )?;
    println!("  Second pass wrote {} files", written.len());

    fs::remove_dir_all(&workdir)?;
    println!("\nExamples completed successfully!");
    Ok(())
}
