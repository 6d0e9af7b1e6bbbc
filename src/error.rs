//! Error types for kanji-coverage operations.
//!
//! This module defines [`CoverageError`], the error type returned by every
//! I/O boundary in the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Fetch and analysis code never terminates the process; it returns a
//!   `CoverageError` and lets the binary decide how to report it
//! - Use `anyhow::Error` (via `CoverageError::Other`) for unexpected errors
//! - Every message is a single human-readable line

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for kanji-coverage operations.
#[derive(Debug, Error)]
pub enum CoverageError {
    /// The API rejected the supplied credential.
    #[error("Invalid API key {key}: {message}")]
    Authentication { key: String, message: String },

    /// A request could not be completed or returned a malformed response.
    #[error("Error connecting to WaniKani ({url}): {message}")]
    Connectivity { url: String, message: String },

    /// The text file could not be opened or read.
    #[error("File \"{}\" could not be read: {message}", .path.display())]
    FileAccess { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoverageError {
    /// Build a connectivity error for `url` from any displayable cause.
    pub fn connectivity(url: impl Into<String>, cause: impl std::fmt::Display) -> Self {
        Self::Connectivity {
            url: url.into(),
            message: cause.to_string(),
        }
    }
}

/// Result type alias for kanji-coverage operations.
pub type Result<T> = std::result::Result<T, CoverageError>;
