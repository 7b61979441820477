//! Persistence error types.
//!
//! All persistence operations return structured errors that provide
//! user-friendly messages and optional remediation hints.

use std::path::PathBuf;
use thiserror::Error;

/// Persistence operation error.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// File I/O error.
    #[error("Failed to {operation} file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Atomic write failed (temp file couldn't be renamed).
    #[error("Failed to complete save operation")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The slot refused the write or read (for example a storage quota).
    #[error("History slot '{slot}' is unavailable: {reason}")]
    Unavailable { slot: String, reason: String },

    /// Serialization error.
    #[error("Failed to serialize history")]
    Serialization {
        #[source]
        source: serde_json::Error,
    },

    /// Stored data is not a readable history log.
    #[error("Failed to deserialize history")]
    Deserialization {
        #[source]
        source: serde_json::Error,
    },

    /// A calculation with a NaN or infinite figure was offered for recording.
    #[error("Cannot record a non-finite {field} ({value})")]
    NonFiniteEntry { field: &'static str, value: f64 },

    /// The stored log already holds the largest possible entry id.
    #[error("No entry ids left after {last_id}")]
    IdsExhausted { last_id: u64 },

    /// Unsupported schema version.
    #[error("History version {found} is not supported (maximum: {max_supported})")]
    UnsupportedVersion { found: u32, max_supported: u32 },
}

impl PersistenceError {
    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                operation, path, ..
            } => {
                format!("Could not {} the history file at {}", operation, path.display())
            }
            Self::AtomicWriteFailed { target_path, .. } => {
                format!(
                    "Could not save the history to {}. Please check disk space and permissions.",
                    target_path.display()
                )
            }
            Self::Unavailable { reason, .. } => {
                format!("The calculation history could not be stored: {reason}.")
            }
            Self::Serialization { .. } => {
                "An error occurred while saving the calculation history.".to_string()
            }
            Self::Deserialization { .. } => {
                "The saved calculation history could not be read. It may be corrupted."
                    .to_string()
            }
            Self::NonFiniteEntry { field, .. } => {
                format!("The calculation was not saved because its {field} is not a number.")
            }
            Self::IdsExhausted { .. } => {
                "The calculation history has run out of entry numbers.".to_string()
            }
            Self::UnsupportedVersion {
                found,
                max_supported,
            } => {
                format!(
                    "The saved history was written by a newer version \
                    (history version {found}, this version supports up to {max_supported})."
                )
            }
        }
    }

    /// Get a suggestion for how to resolve this error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Io { operation, .. } => {
                if *operation == "read" {
                    Some("Check that you have permission to read the history file.".into())
                } else {
                    Some("Check that you have permission to write to this location.".into())
                }
            }
            Self::AtomicWriteFailed { .. } => {
                Some("Free up disk space or choose a different data directory.".into())
            }
            Self::Unavailable { .. } => {
                Some("Delete some history entries and try again.".into())
            }
            Self::Serialization { .. } | Self::NonFiniteEntry { .. } => None,
            Self::IdsExhausted { .. } => {
                Some("Clear the history to start numbering again.".into())
            }
            Self::Deserialization { .. } => {
                Some("The history will start empty; older entries are not recoverable.".into())
            }
            Self::UnsupportedVersion { .. } => {
                Some("Update the application to read this history.".into())
            }
        }
    }
}

/// Result type alias for persistence operations.
pub type Result<T> = std::result::Result<T, PersistenceError>;
