//! API error types
//!
//! Each error maps to one HTTP status and one JSON body shape:
//! - `{"error": ...}` for malformed requests
//! - `{"errors": [...]}` for field validation failures
//! - `{"error": "prediction failed", "details": ...}` for model failures

use serde_json::{json, Value};
use thiserror::Error;

use crate::model::ModelError;
use crate::schema::{messages, FieldError};

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors returned by the prediction API
#[derive(Debug, Error)]
pub enum ApiError {
    /// Body is not a JSON object
    #[error("JSON payload required")]
    PayloadRequired,

    /// A declared field is absent from the payload
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    /// One or more fields failed validation
    #[error("{} field(s) failed validation", .0.len())]
    ValidationFailed(Vec<FieldError>),

    /// The model could not produce a prediction
    #[error("prediction failed")]
    PredictionFailed(#[source] ModelError),
}

impl ApiError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::PayloadRequired
            | ApiError::MissingField(_)
            | ApiError::ValidationFailed(_) => 400,
            ApiError::PredictionFailed(_) => 500,
        }
    }

    /// JSON body for this error
    pub fn to_body(&self) -> Value {
        match self {
            ApiError::PayloadRequired | ApiError::MissingField(_) => {
                json!({ "error": self.to_string() })
            }
            ApiError::ValidationFailed(errors) => json!({ "errors": messages(errors) }),
            ApiError::PredictionFailed(source) => json!({
                "error": "prediction failed",
                "details": source.to_string(),
            }),
        }
    }
}

impl From<Vec<FieldError>> for ApiError {
    fn from(errors: Vec<FieldError>) -> Self {
        ApiError::ValidationFailed(errors)
    }
}

impl From<ModelError> for ApiError {
    fn from(err: ModelError) -> Self {
        ApiError::PredictionFailed(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_body() {
        let err = ApiError::MissingField("Grade");
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.to_body(), json!({"error": "Missing field: Grade"}));
    }

    #[test]
    fn test_validation_body_lists_every_error() {
        let err = ApiError::from(vec![
            FieldError::NotAnInteger { field: "Age" },
            FieldError::InvalidOption { field: "Race" },
        ]);
        assert_eq!(err.status_code(), 400);
        assert_eq!(
            err.to_body(),
            json!({"errors": ["Age must be an integer", "Race not a valid option"]})
        );
    }

    #[test]
    fn test_prediction_failure_body() {
        let err = ApiError::from(ModelError::Unavailable);
        assert_eq!(err.status_code(), 500);
        assert_eq!(
            err.to_body(),
            json!({"error": "prediction failed", "details": "Model is not loaded"})
        );
    }
}
