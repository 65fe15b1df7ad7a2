//! Error types for linesum operations.
//!
//! This module provides the error hierarchy using `thiserror`. The summation
//! pipeline itself never fails (malformed tokens degrade into the
//! not-a-number sentinel), so the only error sources are the process
//! boundaries: reading standard input and writing standard output.

use thiserror::Error;

/// Result type alias for linesum operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for linesum operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O errors (stream operations).
    #[error("I/O error: {0}")]
    Io(#[from] IoError),
}

/// I/O-specific errors for stream operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Failed to read the input stream to completion.
    #[error("failed to read input: {reason}")]
    ReadFailed {
        /// Reason for failure.
        reason: String,
    },

    /// Failed to write to the output stream.
    #[error("failed to write output: {reason}")]
    WriteFailed {
        /// Reason for failure.
        reason: String,
    },

    /// Generic I/O error wrapper.
    #[error("I/O error: {0}")]
    Generic(String),
}

// Implement From traits for standard library errors

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(IoError::Generic(err.to_string()))
    }
}

impl From<std::io::Error> for IoError {
    fn from(err: std::io::Error) -> Self {
        Self::Generic(err.to_string())
    }
}
