//! Classifier seam
//!
//! Concrete model kinds and test doubles implement [`Classifier`]; the
//! rest of the crate only sees a [`ModelHandle`].

use std::sync::Arc;

use super::errors::{ModelError, ModelResult};

/// A trained binary classifier over a fixed-width feature row.
pub trait Classifier: Send + Sync {
    /// Number of features the model was trained on
    fn n_features(&self) -> usize;

    /// Returns the raw predicted class for one row
    fn predict(&self, features: &[f64]) -> ModelResult<i64>;

    /// Class probabilities for one row, in class order.
    ///
    /// `None` means the model has no probability estimate.
    fn predict_proba(&self, _features: &[f64]) -> Option<ModelResult<Vec<f64>>> {
        None
    }

    /// Short name for logs
    fn kind(&self) -> &'static str;
}

/// Shared, read-only handle to the loaded model
pub type ModelHandle = Arc<dyn Classifier>;

/// Rejects rows whose width differs from the model's.
pub(crate) fn check_width(expected: usize, features: &[f64]) -> ModelResult<()> {
    if features.len() != expected {
        return Err(ModelError::Inference(format!(
            "expected {} features, got {}",
            expected,
            features.len()
        )));
    }
    Ok(())
}

/// Index of the largest value; the first one wins ties
pub(crate) fn argmax(values: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in values.iter().enumerate() {
        match best {
            Some((_, b)) if v <= b => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argmax_first_wins_ties() {
        assert_eq!(argmax(&[0.5, 0.5]), Some(0));
        assert_eq!(argmax(&[0.1, 0.7, 0.2]), Some(1));
        assert_eq!(argmax(&[]), None);
    }

    #[test]
    fn test_check_width() {
        assert!(check_width(2, &[1.0, 2.0]).is_ok());
        assert!(matches!(
            check_width(3, &[1.0]),
            Err(ModelError::Inference(_))
        ));
    }
}
