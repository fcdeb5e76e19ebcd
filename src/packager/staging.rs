//! Application file and data directory staging.
//!
//! Copies the allow-listed application sources and the optional data
//! directory into the staging tree. Missing allow-list entries are skipped
//! without error; a missing data directory is equally fine.

use super::PackagerConfig;
use crate::error::{CliError, PackagerError, Result};
use std::path::Path;

/// Copies each allow-listed application file that exists into the staging
/// directory. Names without a matching file are silently skipped.
pub async fn stage_app_files(config: &PackagerConfig) -> Result<()> {
    let staging = config.staging_path();

    for name in &config.app_files {
        let source = config.working_dir.join(name);
        if tokio::fs::try_exists(&source).await.unwrap_or(false) {
            tokio::fs::copy(&source, staging.join(name)).await?;
        } else {
            log::debug!("Skipping absent application file: {}", name);
        }
    }

    Ok(())
}

/// Recursively copies the data directory into the staging tree under the
/// same relative name. Does nothing when the directory is absent.
pub async fn stage_data_dir(config: &PackagerConfig) -> Result<()> {
    let source = config.working_dir.join(&config.data_dir);
    if !source.is_dir() {
        return Ok(());
    }

    let dest = config.staging_path().join(&config.data_dir);
    copy_dir(&source, &dest).await
}

/// Recursively copies a directory, creating destination directories as
/// needed. Blocking traversal is offloaded to the blocking thread pool.
async fn copy_dir(from: &Path, to: &Path) -> Result<()> {
    let from = from.to_path_buf();
    let to = to.to_path_buf();

    tokio::task::spawn_blocking(move || {
        for entry in walkdir::WalkDir::new(&from) {
            let entry = entry?;
            let rel_path = entry.path().strip_prefix(&from)?;
            let dest_path = to.join(rel_path);

            if entry.file_type().is_dir() {
                std::fs::create_dir_all(&dest_path)?;
            } else {
                if let Some(parent) = dest_path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::copy(entry.path(), &dest_path)?;
            }
        }

        Ok(())
    })
    .await
    .map_err(|e| {
        PackagerError::Cli(CliError::ExecutionFailed {
            command: "copy data directory".to_string(),
            reason: format!("Task panicked: {}", e),
        })
    })?
}
