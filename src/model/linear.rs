//! Logistic regression classifier.

use serde::{Deserialize, Serialize};

use super::classifier::{check_width, Classifier};
use super::errors::{ModelError, ModelResult};

/// Binary logistic regression: `P(classes[1]) = sigmoid(w . x + b)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegression {
    pub n_features: usize,
    /// Exactly two class labels, negative first
    pub classes: Vec<i64>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LogisticRegression {
    pub fn validate_structure(&self) -> ModelResult<()> {
        if self.classes.len() != 2 {
            return Err(ModelError::corrupt(format!(
                "logistic regression needs 2 classes, found {}",
                self.classes.len()
            )));
        }
        if self.coefficients.len() != self.n_features {
            return Err(ModelError::corrupt(format!(
                "{} coefficients for {} features",
                self.coefficients.len(),
                self.n_features
            )));
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(ModelError::corrupt("non-finite weight"));
        }
        Ok(())
    }

    fn positive_proba(&self, features: &[f64]) -> f64 {
        let score: f64 = self
            .coefficients
            .iter()
            .zip(features)
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.intercept;
        1.0 / (1.0 + (-score).exp())
    }
}

impl Classifier for LogisticRegression {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict(&self, features: &[f64]) -> ModelResult<i64> {
        check_width(self.n_features, features)?;
        let p = self.positive_proba(features);
        Ok(if p >= 0.5 {
            self.classes[1]
        } else {
            self.classes[0]
        })
    }

    fn predict_proba(&self, features: &[f64]) -> Option<ModelResult<Vec<f64>>> {
        Some(check_width(self.n_features, features).map(|_| {
            let p = self.positive_proba(features);
            vec![1.0 - p, p]
        }))
    }

    fn kind(&self) -> &'static str {
        "logistic_regression"
    }
}
