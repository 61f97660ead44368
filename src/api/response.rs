//! API response types

use serde_json::{json, Value};

use super::errors::ApiError;
use crate::model::PredictionResult;

/// Unified response type
#[derive(Debug)]
pub enum Response {
    Success(PredictionResult),
    Error(ApiError),
}

impl Response {
    /// HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            Response::Success(_) => 200,
            Response::Error(e) => e.status_code(),
        }
    }

    /// JSON body
    pub fn to_value(&self) -> Value {
        match self {
            Response::Success(r) => json!({
                "prediction": r.prediction.label(),
                "probability": r.probability,
                "raw_pred": r.raw_pred,
            }),
            Response::Error(e) => e.to_body(),
        }
    }

    /// Check if this is a success response
    pub fn is_success(&self) -> bool {
        matches!(self, Response::Success(_))
    }
}

impl From<Result<PredictionResult, ApiError>> for Response {
    fn from(result: Result<PredictionResult, ApiError>) -> Self {
        match result {
            Ok(r) => Response::Success(r),
            Err(e) => Response::Error(e),
        }
    }
}
