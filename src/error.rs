//! Error handling for XTurb report processing.
//!
//! Provides error types with context for report parsing, input deck
//! writing, and run-directory scanning failures.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum XTurbError {
    /// The report file could not be opened. This is the only fatal
    /// parsing condition; everything else degrades to a partial model.
    #[error("Report file not found or unreadable: {path}")]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to write input deck to {path}: {reason}")]
    DeckWrite { path: PathBuf, reason: String },

    #[error("Run directory not found: {path}")]
    RunDirectoryNotFound { path: PathBuf },

    #[error("Directory traversal error: {0}")]
    DirectoryTraversal(#[from] walkdir::Error),

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl XTurbError {
    /// Create a file-not-found error with the underlying IO cause.
    pub fn file_not_found(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileNotFound {
            path: path.into(),
            source,
        }
    }

    /// Create a deck-write error with context.
    pub fn deck_write(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::DeckWrite {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, XTurbError>;
