//! Lambda deployment packager library.
//!
//! This library provides two independent units:
//! - A packager that builds a Lambda deployment zip (containerized dependency
//!   install, application file staging, deflate compression)
//! - A resource loader that reads a fixed set of static files (resume PDF,
//!   text notes, a JSON facts file) into an immutable bundle at startup
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod cli;
pub mod error;
pub mod packager;
pub mod resources;

// Re-export commonly used types
pub use error::{CliError, PackagerError, Result};
pub use packager::PackagerConfig;
pub use resources::ResourceBundle;
