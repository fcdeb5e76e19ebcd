//! Deployment archive creation and size reporting.
//!
//! Walks the staging tree and writes every regular file into a deflate
//! compressed zip. Entry names are made relative to the staging root with
//! forward slashes, so unpacking the archive reproduces the staging layout
//! regardless of where the staging directory lived on disk.

use crate::error::{CliError, PackagerError, Result};
use std::io;
use std::path::Path;
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Creates the archive from the staging directory.
///
/// Returns the size of the finished archive in bytes. The zip write is
/// blocking work and runs on the blocking thread pool.
pub async fn create(staging_dir: &Path, archive_path: &Path) -> Result<u64> {
    let staging_dir = staging_dir.to_path_buf();
    let archive_path = archive_path.to_path_buf();

    tokio::task::spawn_blocking(move || write_archive(&staging_dir, &archive_path))
        .await
        .map_err(|e| {
            PackagerError::Cli(CliError::ExecutionFailed {
                command: "create zip archive".to_string(),
                reason: format!("Task panicked: {}", e),
            })
        })?
}

fn write_archive(staging_dir: &Path, archive_path: &Path) -> Result<u64> {
    let file = std::fs::File::create(archive_path)?;
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for entry in WalkDir::new(staging_dir) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let rel_path = entry.path().strip_prefix(staging_dir)?;
        writer.start_file(entry_name(rel_path), options)?;

        let mut source = std::fs::File::open(entry.path())?;
        io::copy(&mut source, &mut writer)?;
    }

    let file = writer.finish()?;
    Ok(file.metadata()?.len())
}

/// Zip entry name for a staging-relative path, forward slashes on every
/// platform.
fn entry_name(rel_path: &Path) -> String {
    rel_path
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Formats a byte count as binary megabytes with two decimal places.
pub fn format_size_mb(bytes: u64) -> String {
    format!("{:.2}", bytes as f64 / (1024.0 * 1024.0))
}
