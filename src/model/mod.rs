//! Model subsystem
//!
//! Loads the trained classifier once and wraps it for per-request
//! prediction. The handle is shared read-only after load.

pub mod classifier;
pub mod errors;
pub mod forest;
pub mod linear;
pub mod loader;
pub mod predictor;

pub use classifier::{Classifier, ModelHandle};
pub use errors::{ModelError, ModelResult};
pub use loader::{load, load_or_degrade, ModelFile};
pub use predictor::{
    Outcome, PredictionResult, Predictor, NEGATIVE_CLASS, NEGATIVE_LABEL, POSITIVE_LABEL,
};
