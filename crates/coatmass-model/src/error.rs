//! Input validation errors.
//!
//! Every variant names the offending field or layer so a presentation layer
//! can highlight the right widget without parsing the message.

use thiserror::Error;

use crate::input::{InputField, Layer};

/// A calculation input that cannot be turned into a result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInputError {
    /// A required field was left empty.
    #[error("{field} is required")]
    Missing { field: InputField },

    /// A field could not be parsed as a number.
    #[error("{field} is not a number: '{value}'")]
    NotANumber { field: InputField, value: String },

    /// A field holds NaN or an infinity.
    #[error("{field} must be a finite number")]
    NonFinite { field: InputField },

    /// A geometric or density field is zero or negative.
    #[error("{field} must be greater than zero (got {value})")]
    NotPositive { field: InputField, value: f64 },

    /// A mix ratio part is negative.
    #[error("{field} must not be negative (got {value})")]
    NegativeRatioPart { field: InputField, value: f64 },

    /// Both parts of a layer's mix ratio are zero.
    #[error("{layer} mix ratio parts must not both be zero")]
    ZeroRatioSum { layer: Layer },

    /// The parts of a layer's mix ratio are too large to add up.
    #[error("{layer} mix ratio parts are too large")]
    RatioOverflow { layer: Layer },

    /// The inputs were accepted but a derived quantity overflowed.
    #[error("{quantity} is not a finite number")]
    NonFiniteResult { quantity: &'static str },
}

impl InvalidInputError {
    /// The input field this error points at, if it concerns a single field.
    pub fn field(&self) -> Option<InputField> {
        match self {
            Self::Missing { field }
            | Self::NotANumber { field, .. }
            | Self::NonFinite { field }
            | Self::NotPositive { field, .. }
            | Self::NegativeRatioPart { field, .. } => Some(*field),
            Self::ZeroRatioSum { .. }
            | Self::RatioOverflow { .. }
            | Self::NonFiniteResult { .. } => None,
        }
    }

    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Missing { field } => format!("Please enter a value for {field}."),
            Self::NotANumber { field, .. } => format!("{field} must be a number."),
            Self::NonFinite { field } | Self::NotPositive { field, .. } => {
                format!("{field} must be a positive number.")
            }
            Self::NegativeRatioPart { field, .. } => {
                format!("{field} cannot be negative.")
            }
            Self::ZeroRatioSum { layer } => {
                format!("The {layer} mix ratio needs at least one non-zero part.")
            }
            Self::RatioOverflow { layer } => {
                format!("The {layer} mix ratio parts are too large to calculate.")
            }
            Self::NonFiniteResult { .. } => {
                "The values entered are too large to calculate.".to_string()
            }
        }
    }
}

/// Result type alias for input validation.
pub type Result<T> = std::result::Result<T, InvalidInputError>;
