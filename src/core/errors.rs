//! Shared error types for the library

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for uniqmap operations
#[derive(Debug, Error)]
pub enum Error {
    /// A sequence element that is not an integer
    #[error("Invalid element {token:?} at position {position}")]
    InvalidElement { position: usize, token: String },

    /// Malformed sequence text (unbalanced brackets, stray delimiters)
    #[error("Invalid sequence: {0}")]
    InvalidSequence(String),

    /// Unrecognised counter action
    #[error("Unknown action {0:?} (expected increment, reset or quit)")]
    UnknownAction(String),

    /// Configuration errors
    #[error("Configuration error in {path}: {message}")]
    Configuration { path: PathBuf, message: String },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an invalid element error for the 1-based `position`
    pub fn invalid_element(position: usize, token: impl Into<String>) -> Self {
        Self::InvalidElement {
            position,
            token: token.into(),
        }
    }

    /// Create a configuration error with path context
    pub fn configuration(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Configuration {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
