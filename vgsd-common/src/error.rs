//! Common error types for VGSD

use std::path::PathBuf;
use thiserror::Error;

/// Common result type for VGSD operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the VGSD workspace
#[derive(Error, Debug)]
pub enum Error {
    /// Dataset file missing or unreadable (fatal at startup)
    #[error("Failed to load dataset {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Dataset file present but malformed (fatal at startup)
    #[error("Failed to parse dataset {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
