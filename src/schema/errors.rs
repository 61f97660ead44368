//! Field validation errors
//!
//! Every variant is a user-input error: collected per request, reported
//! in full, never fatal.

use thiserror::Error;

/// A single field that failed validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Missing or empty value
    #[error("{field} is required")]
    MissingField { field: &'static str },

    /// Value does not parse as an integer
    #[error("{field} must be an integer")]
    NotAnInteger { field: &'static str },

    /// Value outside the inclusive numeric range
    #[error("{field} must be between {min} and {max}")]
    OutOfBounds {
        field: &'static str,
        min: i64,
        max: i64,
    },

    /// Value not among the categorical options
    #[error("{field} not a valid option")]
    InvalidOption { field: &'static str },
}

impl FieldError {
    /// Name of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            FieldError::MissingField { field }
            | FieldError::NotAnInteger { field }
            | FieldError::OutOfBounds { field, .. }
            | FieldError::InvalidOption { field } => field,
        }
    }
}

/// Renders a batch of errors as the messages returned to clients
pub fn messages(errors: &[FieldError]) -> Vec<String> {
    errors.iter().map(ToString::to_string).collect()
}
