//! API Handler
//!
//! Request flow:
//! 1. Extract declared fields from the JSON body
//! 2. Validate every field
//! 3. Run the predictor

use serde_json::Value;
use tracing::{debug, error};

use super::errors::{ApiError, ApiResult};
use super::request::PredictRequest;
use super::response::Response;
use crate::model::{PredictionResult, Predictor};
use crate::schema::validate;

/// Stateless handler over a shared predictor
pub struct ApiHandler<'a> {
    predictor: &'a Predictor,
}

impl<'a> ApiHandler<'a> {
    pub fn new(predictor: &'a Predictor) -> Self {
        Self { predictor }
    }

    /// Handle a parsed JSON body
    pub fn handle(&self, body: &Value) -> Response {
        self.run(body).into()
    }

    /// Handle a raw JSON request string
    pub fn handle_str(&self, json_request: &str) -> Response {
        match PredictRequest::parse(json_request) {
            Ok(request) => self.predict(&request).into(),
            Err(e) => Response::Error(e),
        }
    }

    fn run(&self, body: &Value) -> ApiResult<PredictionResult> {
        let request = PredictRequest::from_json(body)?;
        self.predict(&request)
    }

    fn predict(&self, request: &PredictRequest) -> ApiResult<PredictionResult> {
        let vector = validate(request).map_err(|errors| {
            debug!(count = errors.len(), "request failed validation");
            errors
        })?;

        self.predictor.predict(&vector).map_err(|e| {
            error!(error = %e, "API prediction failed");
            ApiError::from(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unavailable_model_is_500() {
        let predictor = Predictor::unavailable();
        let handler = ApiHandler::new(&predictor);
        let body = json!({
            "Age": 45, "Race": 1, "Marital": 1, "Tstage": 2, "Nstage": 1,
            "Stage6": 2, "Diff": 1, "Grade": 2, "Astage": 1, "Tumor": 30,
            "Estrogen": 1, "Progesterone": 1, "Examined": 10, "Positive": 2
        });

        let resp = handler.handle(&body);
        assert_eq!(resp.status_code(), 500);
        assert_eq!(resp.to_value()["details"], "Model is not loaded");
    }

    #[test]
    fn test_validation_precedes_model() {
        let predictor = Predictor::unavailable();
        let handler = ApiHandler::new(&predictor);
        let body = json!({
            "Age": "abc", "Race": 1, "Marital": 1, "Tstage": 2, "Nstage": 1,
            "Stage6": 2, "Diff": 1, "Grade": 2, "Astage": 1, "Tumor": 500,
            "Estrogen": 1, "Progesterone": 1, "Examined": 10, "Positive": 2
        });

        let resp = handler.handle(&body);
        assert_eq!(resp.status_code(), 400);
        assert_eq!(
            resp.to_value(),
            json!({"errors": ["Age must be an integer", "Tumor must be between 0 and 200"]})
        );
    }

    #[test]
    fn test_handle_str_malformed() {
        let predictor = Predictor::unavailable();
        let resp = ApiHandler::new(&predictor).handle_str("not json");
        assert_eq!(resp.to_value(), json!({"error": "JSON payload required"}));
    }
}
