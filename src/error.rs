//! Error types for packager and resource loading operations.

use thiserror::Error;

/// Result type alias for packager operations
pub type Result<T> = std::result::Result<T, PackagerError>;

/// Main error type for all packager operations
#[derive(Error, Debug)]
pub enum PackagerError {
    /// CLI and process execution errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing errors (facts resource)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Zip archive creation errors
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// PDF text extraction errors (linkedin resource)
    #[error("PDF error: {0}")]
    Pdf(#[from] pdf_extract::OutputError),

    /// Directory traversal errors during staging/archiving
    #[error("Walk error: {0}")]
    Walkdir(#[from] walkdir::Error),

    /// Path prefix errors when relativizing archive entry names
    #[error("Path error: {0}")]
    StripPrefix(#[from] std::path::StripPrefixError),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Required container runtime is not installed / not on PATH
    #[error("Container runtime not found: {program}")]
    RuntimeNotFound {
        /// Program that could not be located
        program: String,
    },

    /// Command execution failed
    #[error("Command execution failed: {command} - {reason}")]
    ExecutionFailed {
        /// Command that failed
        command: String,
        /// Reason for the error
        reason: String,
    },
}
