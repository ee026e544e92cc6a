//! Error types for cliptools operations.
//!
//! This module defines [`ClipError`], the error type for the ambient parts of
//! the tool (reading input, talking to the system clipboard), and a
//! [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Text transformations never fail; unknown command tokens are no-ops
//! - Use `ClipError` for I/O and clipboard failures surfaced to the user
//! - Use `anyhow::Error` (via `ClipError::Other`) for unexpected errors

use thiserror::Error;

/// Core error type for cliptools operations.
#[derive(Debug, Error)]
pub enum ClipError {
    /// A clipboard helper could not be run or reported failure.
    #[error("Clipboard error: {message}")]
    Clipboard { message: String },

    /// No clipboard helper is known for this platform.
    #[error("Clipboard not supported on this platform")]
    UnsupportedPlatform,

    /// Input text was not valid UTF-8.
    #[error("Input is not valid UTF-8: {source}")]
    InvalidUtf8 {
        #[from]
        source: std::string::FromUtf8Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ClipError {
    /// Convenience constructor for clipboard failures.
    pub fn clipboard(message: impl Into<String>) -> Self {
        Self::Clipboard {
            message: message.into(),
        }
    }
}

/// Result type alias for cliptools operations.
pub type Result<T> = std::result::Result<T, ClipError>;
