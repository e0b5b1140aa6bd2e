//! Binary classifier boundary.
//!
//! The matching model only needs three operations from a classifier: fit on
//! labeled feature rows, predict a label, and give the probability of each
//! class. `RandomForest` is the implementation shipped with the crate.

pub mod forest;
pub mod tree;

pub use self::forest::RandomForest;

use crate::error::{MatchError, MfResult};
use crate::features::FeatureRow;
use serde::{Deserialize, Serialize};

/// Class label. `true` is the positive class ("is a match").
pub type Label = bool;

pub const POSITIVE: Label = true;
pub const NEGATIVE: Label = false;

/// Probability per class label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassProbabilities {
    pub negative: f64,
    pub positive: f64,
}

impl ClassProbabilities {
    pub fn from_positive(positive: f64) -> Self {
        Self {
            negative: 1.0 - positive,
            positive,
        }
    }

    pub fn get(&self, label: Label) -> f64 {
        if label == POSITIVE {
            self.positive
        } else {
            self.negative
        }
    }

    /// Most likely label. Ties go to the negative class.
    pub fn most_likely(&self) -> Label {
        self.positive > self.negative
    }
}

pub trait Classifier: Send + Sync {
    fn is_fitted(&self) -> bool;

    fn fit(&mut self, features: &[FeatureRow], labels: &[Label]) -> MfResult<()>;

    fn predict(&self, features: &FeatureRow) -> MfResult<Label>;

    fn predict_proba(&self, features: &FeatureRow) -> MfResult<ClassProbabilities>;
}

/// Orders the values of `row` by `names`. The row must carry exactly those
/// features.
pub fn to_vector(row: &FeatureRow, names: &[String]) -> MfResult<Vec<f64>> {
    if row.len() != names.len() {
        let unexpected: Vec<&str> = row
            .names()
            .filter(|n| !names.iter().any(|expected| expected == n))
            .collect();
        let missing: Vec<&str> = names
            .iter()
            .map(String::as_str)
            .filter(|n| !row.contains(n))
            .collect();
        return Err(MatchError::MalformedFeatures(format!(
            "expected {} features, got {} (missing: {:?}, unexpected: {:?})",
            names.len(),
            row.len(),
            missing,
            unexpected
        )));
    }

    names
        .iter()
        .map(|name| {
            row.get(name)
                .ok_or_else(|| MatchError::MalformedFeatures(format!("missing feature '{}'", name)))
        })
        .collect()
}
