//! # Model Errors
//!
//! Error types for loading and invoking the classifier.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for model operations
pub type ModelResult<T> = Result<T, ModelError>;

/// Model loading and prediction errors
#[derive(Debug, Error)]
pub enum ModelError {
    // ==================
    // Start-up Errors
    // ==================

    /// Configured model path does not exist
    #[error("Model file not found at: {}", .path.display())]
    FileMissing { path: PathBuf },

    /// Model file exists but could not be read
    #[error("Failed to read model file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Model file is not a recognised model document
    #[error("Failed to deserialize model file {}: {source}", .path.display())]
    Deserialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Model deserialized but cannot be used
    #[error("Model is corrupt: {reason}")]
    Corrupt { reason: String },

    // ==================
    // Per-request Errors
    // ==================

    /// No model handle is loaded
    #[error("Model is not loaded")]
    Unavailable,

    /// The classifier rejected its input
    #[error("Inference failed: {0}")]
    Inference(String),
}

impl ModelError {
    /// Convenience constructor for structural problems
    pub fn corrupt(reason: impl Into<String>) -> Self {
        ModelError::Corrupt {
            reason: reason.into(),
        }
    }

    /// Returns whether this error can only happen while loading
    pub fn is_startup(&self) -> bool {
        matches!(
            self,
            ModelError::FileMissing { .. }
                | ModelError::Io { .. }
                | ModelError::Deserialization { .. }
                | ModelError::Corrupt { .. }
        )
    }
}
