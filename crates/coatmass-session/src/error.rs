//! Session error type.

use coatmass_history::PersistenceError;
use coatmass_model::InvalidInputError;
use thiserror::Error;

/// Failure of a session operation.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("{0}")]
    InvalidInput(#[from] InvalidInputError),

    #[error("{0}")]
    Persistence(#[from] PersistenceError),
}

impl SessionError {
    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidInput(e) => e.user_message(),
            Self::Persistence(e) => e.user_message(),
        }
    }
}

/// Result type alias for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;
