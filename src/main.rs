//! Lambda Packager - deployment package builder for AWS Lambda functions.
//!
//! This binary assembles a Lambda deployment zip from application files and
//! dependencies installed inside the official Lambda runtime container.

use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match lambda_packager::cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
