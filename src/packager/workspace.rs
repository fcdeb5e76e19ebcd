//! Staging directory reset and stale archive removal.
//!
//! Cleanup is maximally fault-tolerant: the staging directory delete retries
//! a fixed number of times to ride out transient file locks, then falls back
//! to the platform's forceful removal utility, whose own failure is swallowed.

use crate::error::Result;
use std::io;
use std::path::Path;
use std::time::Duration;

/// Number of attempts before falling back to forceful removal
const REMOVE_ATTEMPTS: u32 = 3;

/// Fixed delay between removal attempts
const REMOVE_RETRY_DELAY: Duration = Duration::from_secs(1);

/// Last-resort removal strategy for a directory the standard delete
/// could not clear.
///
/// Implementations shell out to whatever the platform offers; failure is
/// tolerated and never escalated.
pub trait ForceRemove: Send + Sync {
    /// Attempts to remove the directory tree, swallowing any failure.
    fn force_remove(&self, path: &Path);
}

/// Shells out to the OS removal utility (`rm -rf` on unix, PowerShell's
/// `Remove-Item` on Windows).
pub struct OsForceRemove;

impl ForceRemove for OsForceRemove {
    fn force_remove(&self, path: &Path) {
        #[cfg(unix)]
        let result = std::process::Command::new("rm")
            .arg("-rf")
            .arg(path)
            .status();

        #[cfg(windows)]
        let result = std::process::Command::new("powershell")
            .arg("-Command")
            .arg(format!("Remove-Item -Recurse -Force {}", path.display()))
            .status();

        match result {
            Ok(status) if !status.success() => {
                log::debug!(
                    "Forceful removal of {} exited with {}",
                    path.display(),
                    status
                );
            }
            Ok(_) => {}
            Err(e) => {
                log::debug!("Forceful removal of {} failed to spawn: {}", path.display(), e);
            }
        }
    }
}

/// Resets the staging directory to an empty state.
///
/// An existing directory is deleted with up to [`REMOVE_ATTEMPTS`] tries,
/// sleeping [`REMOVE_RETRY_DELAY`] between them; if every attempt fails the
/// [`ForceRemove`] strategy gets a final, unchecked shot. The directory is
/// then recreated empty.
pub async fn reset(staging_dir: &Path, force: &dyn ForceRemove) -> Result<()> {
    if tokio::fs::try_exists(staging_dir).await.unwrap_or(false) {
        let mut removed = false;

        for attempt in 1..=REMOVE_ATTEMPTS {
            match tokio::fs::remove_dir_all(staging_dir).await {
                Ok(()) => {
                    removed = true;
                    break;
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    removed = true;
                    break;
                }
                Err(e) => {
                    log::warn!(
                        "Attempt {}/{}: failed to remove {}: {}",
                        attempt,
                        REMOVE_ATTEMPTS,
                        staging_dir.display(),
                        e
                    );
                    if attempt < REMOVE_ATTEMPTS {
                        tokio::time::sleep(REMOVE_RETRY_DELAY).await;
                    }
                }
            }
        }

        if !removed {
            force.force_remove(staging_dir);
        }
    }

    tokio::fs::create_dir_all(staging_dir).await?;
    Ok(())
}

/// Removes the archive left by a previous run, if any.
///
/// Absence and permission failures are tolerated; a run never aborts over a
/// stale archive it could not delete for lack of rights. Any other error is
/// unexpected and propagates.
pub async fn remove_stale_archive(archive_path: &Path) -> Result<()> {
    match tokio::fs::remove_file(archive_path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
            log::debug!(
                "Leaving stale archive {} in place: {}",
                archive_path.display(),
                e
            );
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
