//! Error types for the Signwave library.
//!
//! All errors are represented by the [`SignwaveError`] enum. Failures are
//! contained within a single pipeline invocation; none are fatal to the
//! process, and nothing is retried.
//!
//! # Examples
//!
//! ```
//! use signwave::error::{Result, SignwaveError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SignwaveError::analysis("tagger unavailable"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Signwave operations.
#[derive(Error, Debug)]
pub enum SignwaveError {
    /// The caller submitted an empty sentence.
    #[error("No input text provided.")]
    EmptyInput,

    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (sanitization, tokenization, tagging)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Lexicon and synset dictionary errors
    #[error("Lexicon error: {0}")]
    Lexicon(String),

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

/// Result type alias for operations that may fail with SignwaveError.
pub type Result<T> = std::result::Result<T, SignwaveError>;

impl SignwaveError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        SignwaveError::Analysis(msg.into())
    }

    /// Create a new lexicon error.
    pub fn lexicon<S: Into<String>>(msg: S) -> Self {
        SignwaveError::Lexicon(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SignwaveError::Other(msg.into())
    }

    /// The single message exposed at the caller-facing boundary.
    ///
    /// Input validation gets a specific message; every other failure maps to
    /// a generic one so internal detail never leaks outward.
    pub fn user_message(&self) -> &'static str {
        match self {
            SignwaveError::EmptyInput => "No input text provided.",
            _ => "An unexpected error occurred.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_constructors() {
        let err = SignwaveError::analysis("bad tag");
        assert!(matches!(err, SignwaveError::Analysis(_)));
        assert_eq!(err.to_string(), "Analysis error: bad tag");

        let err = SignwaveError::lexicon("bad file");
        assert!(matches!(err, SignwaveError::Lexicon(_)));

        let err = SignwaveError::other("misc");
        assert_eq!(err.to_string(), "Error: misc");
    }

    #[test]
    fn test_user_message_is_specific_for_empty_input() {
        assert_eq!(
            SignwaveError::EmptyInput.user_message(),
            "No input text provided."
        );
    }

    #[test]
    fn test_user_message_is_generic_otherwise() {
        let err = SignwaveError::analysis("internal detail");
        assert_eq!(err.user_message(), "An unexpected error occurred.");

        let err = SignwaveError::Io(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert_eq!(err.user_message(), "An unexpected error occurred.");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err: SignwaveError = io_err.into();
        assert!(matches!(err, SignwaveError::Io(_)));
    }
}
