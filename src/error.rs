//! Error types for the Winnower library.
//!
//! All errors are represented by the [`WinnowerError`] enum. Configuration
//! errors abort a pipeline run before any document is processed; analysis
//! errors are recorded per document and never abort the run.

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Winnower operations.
#[derive(Error, Debug)]
pub enum WinnowerError {
    /// I/O errors (corpus files, stopword lists, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid pipeline configuration. The only error kind that fails a
    /// whole run; it is raised before any document is processed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Analysis errors (normalization, tokenization, filtering). Recorded
    /// per document; the rest of the corpus is unaffected.
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Operation cancelled
    #[error("Operation cancelled: {0}")]
    OperationCancelled(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with WinnowerError.
pub type Result<T> = std::result::Result<T, WinnowerError>;

impl WinnowerError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        WinnowerError::Config(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        WinnowerError::Analysis(msg.into())
    }

    /// Create a new cancelled error.
    pub fn cancelled<S: Into<String>>(msg: S) -> Self {
        WinnowerError::OperationCancelled(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        WinnowerError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = WinnowerError::config("bad ratio");
        assert_eq!(error.to_string(), "Configuration error: bad ratio");

        let error = WinnowerError::analysis("tokenizer blew up");
        assert_eq!(error.to_string(), "Analysis error: tokenizer blew up");

        let error = WinnowerError::cancelled("shutdown");
        assert_eq!(error.to_string(), "Operation cancelled: shutdown");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = WinnowerError::from(io_error);

        match error {
            WinnowerError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }
}
