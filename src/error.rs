//! Error types for the wordbank library.
//!
//! All fallible operations return [`WordbankError`] through the crate-wide
//! [`Result`] alias. Only fatal conditions are errors: a missing optional
//! wordlist tier or an empty dictionary are reported, not raised.
//!
//! # Examples
//!
//! ```
//! use wordbank::error::{Result, WordbankError};
//!
//! fn check_bounds(min_len: usize, max_len: usize) -> Result<()> {
//!     if min_len > max_len {
//!         return Err(WordbankError::invalid_config("min_len exceeds max_len"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_bounds(6, 4).is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for wordbank operations.
#[derive(Error, Debug)]
pub enum WordbankError {
    /// I/O errors (reading corpora, writing the artifact)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A required corpus could not be read
    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),

    /// Configuration rejected before the run started
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A generated artifact could not be parsed
    #[error("Export error: {0}")]
    Export(String),

    /// An artifact breaks one or more dictionary invariants
    #[error("Verification failed: {0}")]
    Verification(String),

    /// Invalid heuristic pattern
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with WordbankError.
pub type Result<T> = std::result::Result<T, WordbankError>;

impl WordbankError {
    /// Create a new source unavailable error.
    pub fn source_unavailable<S: Into<String>>(msg: S) -> Self {
        WordbankError::SourceUnavailable(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        WordbankError::InvalidConfig(msg.into())
    }

    /// Create a new export error.
    pub fn export<S: Into<String>>(msg: S) -> Self {
        WordbankError::Export(msg.into())
    }

    /// Create a new verification error.
    pub fn verification<S: Into<String>>(msg: S) -> Self {
        WordbankError::Verification(msg.into())
    }
}
