//! Command line argument parsing.

use clap::Parser;

/// Lambda deployment package builder
#[derive(Parser, Debug)]
#[command(
    name = "lambda-packager",
    version,
    about = "Builds a Lambda deployment package from the current directory",
    long_about = "Creates lambda-deployment.zip from the current working directory.

Dependencies from requirements.txt are installed with pip inside the official
AWS Lambda Python runtime image, so the packaged binaries match the Lambda
execution environment (linux/amd64, manylinux2014 wheels only).

Usage:
  lambda-packager

Exit code 0 = lambda-deployment.zip exists in the working directory."
)]
pub struct Args {}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
