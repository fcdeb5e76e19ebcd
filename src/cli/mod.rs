//! Command line interface for the Lambda packager.
//!
//! The packager takes no arguments: it operates on the current working
//! directory and produces `lambda-deployment.zip` there.

mod args;

pub use args::Args;

use crate::error::Result;
use crate::packager::{self, PackagerConfig};

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let _args = Args::parse_args();

    let config = PackagerConfig::from_current_dir()?;
    packager::package(&config).await?;

    Ok(0)
}
