//! Error types for `track_issues`.

use std::path::PathBuf;
use thiserror::Error;

/// Primary error type for tracker operations.
#[derive(Error, Debug)]
pub enum TrackerError {
    // === Issue Errors ===
    /// Issue with the specified id was not found.
    #[error("Issue #{id} not found")]
    IssueNotFound { id: u64 },

    // === Validation Errors ===
    /// Field validation failed.
    #[error("Validation failed: {field}: {reason}")]
    Validation { field: String, reason: String },

    // === Storage Errors ===
    /// Store file exists but cannot be parsed.
    #[error("Cannot parse store file {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    /// Generic storage error.
    #[error("Storage error: {0}")]
    Storage(String),

    // === I/O Errors ===
    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TrackerError {
    #[must_use]
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Result type using `TrackerError`.
pub type Result<T> = std::result::Result<T, TrackerError>;
