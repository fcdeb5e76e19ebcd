//! Lambda deployment package builder.
//!
//! Produces a single deployment zip from application files and declared
//! dependencies, installing the dependencies inside the official Lambda
//! runtime image so their binaries match the target environment.
//!
//! # Module Structure
//!
//! - `workspace` - Staging directory reset and stale archive removal
//! - `installer` - Containerized pip install into the staging directory
//! - `staging` - Application file and data directory staging
//! - `archive` - Zip creation and size reporting

mod archive;
mod installer;
mod staging;
mod workspace;

pub use archive::format_size_mb;

use crate::error::Result;
use std::path::PathBuf;

/// Configuration for a packaging run.
///
/// The defaults reproduce the standard layout: staging in `lambda-package/`,
/// output to `lambda-deployment.zip`, dependencies from `requirements.txt`.
/// Every field is public so tests can redirect paths and swap the container
/// runtime for a stub.
#[derive(Debug, Clone)]
pub struct PackagerConfig {
    /// Directory the packaging run operates in (mounted into the container)
    pub working_dir: PathBuf,

    /// Name of the ephemeral staging directory under `working_dir`
    pub staging_dir: String,

    /// Name of the output archive under `working_dir`
    pub archive_name: String,

    /// Dependency manifest file name (one requirement per line)
    pub manifest: String,

    /// Application source files eligible for staging; missing names are skipped
    pub app_files: Vec<String>,

    /// Optional data directory copied recursively into the staging directory
    pub data_dir: String,

    /// Lambda runtime image used for the dependency install
    pub image: String,

    /// Container platform flag, pinned to the Lambda CPU architecture
    pub container_platform: String,

    /// Pip platform tag constraining installs to binary-compatible wheels
    pub pip_platform: String,

    /// Container runtime executable, resolved on PATH
    pub runtime_program: String,
}

impl Default for PackagerConfig {
    fn default() -> Self {
        Self {
            working_dir: PathBuf::from("."),
            staging_dir: "lambda-package".to_string(),
            archive_name: "lambda-deployment.zip".to_string(),
            manifest: "requirements.txt".to_string(),
            app_files: vec![
                "server.py".to_string(),
                "lambda_handler.py".to_string(),
                "context.py".to_string(),
                "resources.py".to_string(),
            ],
            data_dir: "data".to_string(),
            image: "public.ecr.aws/lambda/python:3.12".to_string(),
            container_platform: "linux/amd64".to_string(),
            pip_platform: "manylinux2014_x86_64".to_string(),
            runtime_program: "docker".to_string(),
        }
    }
}

impl PackagerConfig {
    /// Creates a config rooted at the process working directory.
    ///
    /// The container mount requires an absolute path, so the directory is
    /// resolved eagerly rather than left as `.`.
    pub fn from_current_dir() -> Result<Self> {
        Ok(Self {
            working_dir: std::env::current_dir()?,
            ..Self::default()
        })
    }

    /// Absolute path of the staging directory.
    pub fn staging_path(&self) -> PathBuf {
        self.working_dir.join(&self.staging_dir)
    }

    /// Absolute path of the output archive.
    pub fn archive_path(&self) -> PathBuf {
        self.working_dir.join(&self.archive_name)
    }
}

/// Runs the full packaging sequence.
///
/// Steps, in order:
/// 1. Reset the staging directory (bounded retry, then forceful removal)
/// 2. Remove any archive left from a previous run (absence and permission
///    failures tolerated)
/// 3. Install dependencies in the Lambda runtime container (fatal on failure)
/// 4. Stage allow-listed application files (missing names skipped)
/// 5. Stage the data directory if present
/// 6. Write the deflate-compressed zip with staging-relative entry paths
/// 7. Report the archive size in MB
///
/// Steps 1-2 swallow expected cleanup errors (lock contention, missing
/// files, denied deletes); step 3 aborts the run on non-zero exit with no
/// archive produced; steps 4-7 propagate any error unhandled.
pub async fn package(config: &PackagerConfig) -> Result<()> {
    println!("Creating Lambda deployment package...");

    workspace::reset(&config.staging_path(), &workspace::OsForceRemove).await?;
    workspace::remove_stale_archive(&config.archive_path()).await?;

    println!("Installing dependencies for Lambda runtime...");
    installer::install(config).await?;

    println!("Copying application files...");
    staging::stage_app_files(config).await?;
    staging::stage_data_dir(config).await?;

    println!("Creating zip file...");
    let size_bytes = archive::create(&config.staging_path(), &config.archive_path()).await?;

    println!(
        "Created {} ({} MB)",
        config.archive_name,
        format_size_mb(size_bytes)
    );

    Ok(())
}
