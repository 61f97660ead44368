//! Model loader, run once at start-up
//!
//! - Model file is a JSON document tagged with its `kind`
//! - Feature count must match the field schema
//! - A failed load degrades the service instead of stopping it

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use super::classifier::ModelHandle;
use super::errors::{ModelError, ModelResult};
use super::forest::RandomForest;
use super::linear::LogisticRegression;
use super::predictor::Predictor;
use crate::schema::FIELD_COUNT;

/// On-disk model document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelFile {
    RandomForest(RandomForest),
    LogisticRegression(LogisticRegression),
}

impl ModelFile {
    /// Checks that the model can score rows built from the field schema.
    pub fn validate_structure(&self) -> ModelResult<()> {
        let n_features = match self {
            ModelFile::RandomForest(m) => {
                m.validate_structure()?;
                m.n_features
            }
            ModelFile::LogisticRegression(m) => {
                m.validate_structure()?;
                m.n_features
            }
        };

        if n_features != FIELD_COUNT {
            return Err(ModelError::corrupt(format!(
                "model expects {} features, schema declares {}",
                n_features, FIELD_COUNT
            )));
        }
        Ok(())
    }

    fn into_handle(self) -> ModelHandle {
        match self {
            ModelFile::RandomForest(m) => Arc::new(m),
            ModelFile::LogisticRegression(m) => Arc::new(m),
        }
    }
}

/// Loads and validates the model at `path`.
pub fn load(path: &Path) -> ModelResult<ModelHandle> {
    if !path.exists() {
        return Err(ModelError::FileMissing {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|source| ModelError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let model: ModelFile =
        serde_json::from_str(&content).map_err(|source| ModelError::Deserialization {
            path: path.to_path_buf(),
            source,
        })?;

    model.validate_structure()?;

    Ok(model.into_handle())
}

/// Loads the model, falling back to an unavailable predictor on failure.
pub fn load_or_degrade(path: &Path) -> Predictor {
    match load(path) {
        Ok(handle) => {
            info!(path = %path.display(), kind = handle.kind(), "loaded model");
            Predictor::new(handle)
        }
        Err(e) => {
            error!(
                path = %path.display(),
                error = %e,
                "failed to load model; the service will start but predictions will fail"
            );
            Predictor::unavailable()
        }
    }
}
