//! Health HTTP Routes

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

use super::predict_routes::PredictState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub model_loaded: bool,
}

/// Health check route
pub fn health_routes(state: Arc<PredictState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Always 200; reports whether predictions can succeed
async fn health_handler(State(state): State<Arc<PredictState>>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        model_loaded: state.predictor.is_loaded(),
    };

    (StatusCode::OK, Json(response))
}
