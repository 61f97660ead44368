//! # HTTP Server Module
//!
//! Axum server exposing the prediction service.
//!
//! # Endpoints
//!
//! - `/` - HTML form (GET renders, POST predicts)
//! - `/api/predict` - JSON prediction API
//! - `/api/fields` - Field schema
//! - `/health` - Health check

pub mod config;
pub mod health_routes;
pub mod page;
pub mod predict_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use predict_routes::PredictState;
pub use server::HttpServer;
