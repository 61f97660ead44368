//! Random forest classifier.
//!
//! Trees are stored as flat node arrays with the root at index 0. Leaves
//! carry per-class weights (sample counts or fractions); each tree's leaf
//! is normalised to proportions and the forest averages them.

use serde::{Deserialize, Serialize};

use super::classifier::{argmax, check_width, Classifier};
use super::errors::{ModelError, ModelResult};

/// Split condition for a decision node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Split {
    /// Feature index to split on
    pub feature: usize,
    /// Go left if feature <= threshold
    pub threshold: f64,
    pub left: usize,
    pub right: usize,
}

impl Split {
    #[inline]
    pub fn go_left(&self, feature_value: f64) -> bool {
        feature_value <= self.threshold
    }
}

/// A node in a decision tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    Split(Split),
    Leaf { value: Vec<f64> },
}

/// A single decision tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    pub nodes: Vec<Node>,
}

impl Tree {
    /// Traverse the tree to find the leaf for given features.
    pub fn predict_row(&self, features: &[f64]) -> &[f64] {
        let mut idx = 0;
        loop {
            match &self.nodes[idx] {
                Node::Split(split) => {
                    idx = if split.go_left(features[split.feature]) {
                        split.left
                    } else {
                        split.right
                    };
                }
                Node::Leaf { value } => return value,
            }
        }
    }

    /// Checks node references so traversal cannot loop or index out of range.
    fn validate(&self, n_features: usize, n_classes: usize) -> Result<(), String> {
        if self.nodes.is_empty() {
            return Err("tree has no nodes".into());
        }

        for (idx, node) in self.nodes.iter().enumerate() {
            match node {
                Node::Split(split) => {
                    if split.feature >= n_features {
                        return Err(format!(
                            "node {} splits on feature {} but model has {}",
                            idx, split.feature, n_features
                        ));
                    }
                    // Children after parents rules out cycles.
                    for child in [split.left, split.right] {
                        if child <= idx || child >= self.nodes.len() {
                            return Err(format!("node {} has invalid child {}", idx, child));
                        }
                    }
                }
                Node::Leaf { value } => {
                    if value.len() != n_classes {
                        return Err(format!(
                            "leaf {} has {} values for {} classes",
                            idx,
                            value.len(),
                            n_classes
                        ));
                    }
                    if value.iter().any(|v| !v.is_finite() || *v < 0.0) {
                        return Err(format!("leaf {} has a negative or non-finite weight", idx));
                    }
                    if value.iter().sum::<f64>() <= 0.0 {
                        return Err(format!("leaf {} has zero total weight", idx));
                    }
                }
            }
        }

        Ok(())
    }
}

/// Random forest over a fixed set of class labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomForest {
    pub n_features: usize,
    /// Class labels; leaf values are indexed the same way
    pub classes: Vec<i64>,
    pub trees: Vec<Tree>,
}

impl RandomForest {
    /// Validates the forest structure (not a prediction input)
    pub fn validate_structure(&self) -> ModelResult<()> {
        if self.classes.is_empty() {
            return Err(ModelError::corrupt("forest declares no classes"));
        }
        if self.trees.is_empty() {
            return Err(ModelError::corrupt("forest has no trees"));
        }
        for (i, tree) in self.trees.iter().enumerate() {
            tree.validate(self.n_features, self.classes.len())
                .map_err(|reason| ModelError::corrupt(format!("tree {}: {}", i, reason)))?;
        }
        Ok(())
    }

    /// Averaged class proportions for one row
    fn proba_row(&self, features: &[f64]) -> Vec<f64> {
        let mut output = vec![0.0; self.classes.len()];

        for tree in &self.trees {
            let leaf = tree.predict_row(features);
            let total: f64 = leaf.iter().sum();
            for (out, v) in output.iter_mut().zip(leaf) {
                *out += v / total;
            }
        }

        let n = self.trees.len() as f64;
        output.iter_mut().for_each(|p| *p /= n);
        output
    }
}

impl Classifier for RandomForest {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict(&self, features: &[f64]) -> ModelResult<i64> {
        check_width(self.n_features, features)?;
        let proba = self.proba_row(features);
        let best = argmax(&proba).ok_or_else(|| ModelError::Inference("no classes".into()))?;
        Ok(self.classes[best])
    }

    fn predict_proba(&self, features: &[f64]) -> Option<ModelResult<Vec<f64>>> {
        Some(check_width(self.n_features, features).map(|_| self.proba_row(features)))
    }

    fn kind(&self) -> &'static str {
        "random_forest"
    }
}
