//! Prediction wrapper around the shared model handle.

use serde::Serialize;
use tracing::debug;

use super::classifier::ModelHandle;
use super::errors::{ModelError, ModelResult};
use crate::schema::FeatureVector;

/// Raw class that maps to the negative outcome; every other class is positive.
pub const NEGATIVE_CLASS: i64 = 0;
/// Label for the negative class
pub const NEGATIVE_LABEL: &str = "Alive";
/// Label for the positive class
pub const POSITIVE_LABEL: &str = "Dead";

/// Index of the positive class in a probability vector
const POSITIVE_INDEX: usize = 1;

/// Binary outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    #[serde(rename = "Alive")]
    Negative,
    #[serde(rename = "Dead")]
    Positive,
}

impl Outcome {
    /// Fixed mapping from raw class to outcome
    pub fn from_raw(raw: i64) -> Self {
        if raw == NEGATIVE_CLASS {
            Outcome::Negative
        } else {
            Outcome::Positive
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Negative => NEGATIVE_LABEL,
            Outcome::Positive => POSITIVE_LABEL,
        }
    }
}

/// Result of one prediction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResult {
    pub prediction: Outcome,
    pub probability: Option<f64>,
    pub raw_pred: i64,
}

/// Picks the positive-class probability.
///
/// A model reporting a single class yields that class's probability.
// TODO: decide whether single-class models should be rejected at load time.
pub fn select_probability(probs: &[f64]) -> Option<f64> {
    if probs.len() > POSITIVE_INDEX {
        Some(probs[POSITIVE_INDEX])
    } else {
        probs.first().copied()
    }
}

/// Runs validated feature vectors through the model, if one is loaded.
#[derive(Clone, Default)]
pub struct Predictor {
    handle: Option<ModelHandle>,
}

impl Predictor {
    pub fn new(handle: ModelHandle) -> Self {
        Self {
            handle: Some(handle),
        }
    }

    /// A predictor whose every call fails with `Unavailable`
    pub fn unavailable() -> Self {
        Self { handle: None }
    }

    pub fn is_loaded(&self) -> bool {
        self.handle.is_some()
    }

    pub fn predict(&self, vector: &FeatureVector) -> ModelResult<PredictionResult> {
        let model = self.handle.as_ref().ok_or(ModelError::Unavailable)?;
        let row = vector.to_f64();

        let raw_pred = model.predict(&row)?;
        let probability = match model.predict_proba(&row) {
            Some(probs) => select_probability(&probs?),
            None => None,
        };

        let prediction = Outcome::from_raw(raw_pred);
        debug!(
            raw_pred,
            probability = ?probability,
            label = prediction.label(),
            "prediction complete"
        );

        Ok(PredictionResult {
            prediction,
            probability,
            raw_pred,
        })
    }
}

impl std::fmt::Debug for Predictor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Predictor")
            .field("model", &self.handle.as_ref().map(|h| h.kind()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::classifier::Classifier;
    use crate::schema::validate;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct Fixed {
        class: i64,
        probs: Option<Vec<f64>>,
        calls: AtomicUsize,
    }

    impl Fixed {
        fn new(class: i64, probs: Option<Vec<f64>>) -> Arc<Self> {
            Arc::new(Self {
                class,
                probs,
                calls: AtomicUsize::new(0),
            })
        }
    }

    impl Classifier for Fixed {
        fn n_features(&self) -> usize {
            crate::schema::FIELD_COUNT
        }

        fn predict(&self, _features: &[f64]) -> ModelResult<i64> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.class)
        }

        fn predict_proba(&self, _features: &[f64]) -> Option<ModelResult<Vec<f64>>> {
            self.probs.clone().map(Ok)
        }

        fn kind(&self) -> &'static str {
            "fixed"
        }
    }

    fn vector() -> FeatureVector {
        let raw: &[(&str, &str)] = &[
            ("Age", "45"),
            ("Race", "1"),
            ("Marital", "1"),
            ("Tstage", "2"),
            ("Nstage", "1"),
            ("Stage6", "2"),
            ("Diff", "1"),
            ("Grade", "2"),
            ("Astage", "1"),
            ("Tumor", "30"),
            ("Estrogen", "1"),
            ("Progesterone", "1"),
            ("Examined", "10"),
            ("Positive", "2"),
        ];
        validate(raw).unwrap()
    }

    #[test]
    fn test_label_mapping() {
        assert_eq!(Outcome::from_raw(0), Outcome::Negative);
        assert_eq!(Outcome::from_raw(1), Outcome::Positive);
        assert_eq!(Outcome::from_raw(-3), Outcome::Positive);
        assert_eq!(Outcome::from_raw(7).label(), "Dead");
    }

    #[test]
    fn test_probability_selection() {
        assert_eq!(select_probability(&[0.3, 0.7]), Some(0.7));
        assert_eq!(select_probability(&[0.9]), Some(0.9));
        assert_eq!(select_probability(&[]), None);
    }

    #[test]
    fn test_unavailable_reports_model_not_loaded() {
        for predictor in [Predictor::unavailable(), Predictor::default()] {
            assert!(!predictor.is_loaded());
            let err = predictor.predict(&vector()).unwrap_err();
            assert!(matches!(err, ModelError::Unavailable));
            assert_eq!(err.to_string(), "Model is not loaded");
        }
    }

    #[test]
    fn test_predict_with_probabilities() {
        let model = Fixed::new(1, Some(vec![0.25, 0.75]));
        let predictor = Predictor::new(model.clone());
        let result = predictor.predict(&vector()).unwrap();
        assert_eq!(result.prediction, Outcome::Positive);
        assert_eq!(result.probability, Some(0.75));
        assert_eq!(result.raw_pred, 1);
        assert_eq!(model.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_predict_without_probabilities() {
        let predictor = Predictor::new(Fixed::new(0, None));
        let result = predictor.predict(&vector()).unwrap();
        assert_eq!(result.prediction, Outcome::Negative);
        assert_eq!(result.probability, None);
    }

    #[test]
    fn test_result_serialization() {
        let result = PredictionResult {
            prediction: Outcome::Negative,
            probability: None,
            raw_pred: 0,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"prediction": "Alive", "probability": null, "raw_pred": 0})
        );
    }
}
