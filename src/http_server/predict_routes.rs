//! Prediction HTTP Routes
//!
//! - `GET /` - input form
//! - `POST /` - form submission, renders result or errors
//! - `POST /api/predict` - JSON prediction API
//! - `GET /api/fields` - field schema in canonical order

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{
        rejection::{FormRejection, JsonRejection},
        Form, Json, State,
    },
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
    Router,
};
use serde_json::Value;
use tracing::{debug, error};

use super::page::{render, PageView};
use crate::api::{ApiError, ApiHandler, Response};
use crate::model::Predictor;
use crate::schema::{messages, validate, FIELDS};

/// Shared prediction state
#[derive(Debug, Clone, Default)]
pub struct PredictState {
    pub predictor: Predictor,
}

impl PredictState {
    pub fn new(predictor: Predictor) -> Self {
        Self { predictor }
    }
}

/// Prediction routes with shared state
pub fn predict_routes(state: Arc<PredictState>) -> Router {
    Router::new()
        .route("/", get(index_handler).post(submit_handler))
        .route("/api/predict", post(api_predict_handler))
        .route("/api/fields", get(fields_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

/// Empty form
async fn index_handler() -> Html<String> {
    Html(render(&PageView::default()))
}

/// Keeps the first value submitted for each key
fn first_values(pairs: Vec<(String, String)>) -> HashMap<String, String> {
    let mut form = HashMap::with_capacity(pairs.len());
    for (key, value) in pairs {
        form.entry(key).or_insert(value);
    }
    form
}

/// Form submission handler
///
/// A body that is not a urlencoded form is treated as an empty submission.
async fn submit_handler(
    State(state): State<Arc<PredictState>>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Html<String> {
    let pairs = match form {
        Ok(Form(pairs)) => pairs,
        Err(rejection) => {
            debug!(error = %rejection, "form body rejected");
            Vec::new()
        }
    };
    let form = first_values(pairs);

    let mut view = PageView {
        form_values: FIELDS
            .iter()
            .filter_map(|f| form.get(f.name).map(|v| (f.name, v.clone())))
            .collect(),
        ..Default::default()
    };

    match validate(&form) {
        Ok(vector) => match state.predictor.predict(&vector) {
            Ok(result) => view.result = Some(result),
            Err(e) => {
                error!(error = %e, "form prediction failed");
                view.errors.push(format!("Prediction failed: {}", e));
            }
        },
        Err(errors) => view.errors = messages(&errors),
    }

    Html(render(&view))
}

/// JSON prediction handler
async fn api_predict_handler(
    State(state): State<Arc<PredictState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> impl IntoResponse {
    let response = match payload {
        Ok(Json(body)) => ApiHandler::new(&state.predictor).handle(&body),
        Err(_) => Response::Error(ApiError::PayloadRequired),
    };

    let status =
        StatusCode::from_u16(response.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(response.to_value()))
}

/// Field schema handler
async fn fields_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(FIELDS.as_slice()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_value_wins() {
        let pairs = vec![
            ("Age".to_string(), "45".to_string()),
            ("Tumor".to_string(), "30".to_string()),
            ("Age".to_string(), "abc".to_string()),
        ];
        let form = first_values(pairs);
        assert_eq!(form.len(), 2);
        assert_eq!(form["Age"], "45");
        assert_eq!(form["Tumor"], "30");
    }
}
