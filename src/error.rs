//! Error types for the profile validator.
//!
//! Only run-level failures are errors here. Problems found inside a single
//! profile are recorded as data in [`crate::report`] and never surface as `Err`.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors that abort a validation run
#[derive(Debug, Error)]
pub enum ValidatorError {
    /// The directory walk could not proceed (missing root, unreadable directory, ...)
    #[error("Error walking profiles directory: {source}")]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Logging error: {0}")]
    Logging(String),

    /// Progress or summary output could not be written
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

impl From<config::ConfigError> for ValidatorError {
    fn from(err: config::ConfigError) -> Self {
        ValidatorError::Config(err.to_string())
    }
}
