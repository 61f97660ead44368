//! API Layer
//!
//! Transport-neutral prediction API shared by the HTTP server and the CLI.
//!
//! # Supported Operations
//!
//! - predict: JSON object of field values -> prediction

mod errors;
mod handler;
mod request;
mod response;

pub use errors::{ApiError, ApiResult};
pub use handler::ApiHandler;
pub use request::PredictRequest;
pub use response::Response;
