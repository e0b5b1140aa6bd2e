use super::tree::{DecisionTree, TreeParams};
use super::{to_vector, ClassProbabilities, Classifier, Label};
use crate::config::ForestParams;
use crate::error::{MatchError, MfResult};
use crate::features::FeatureRow;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Bagged ensemble of CART trees. Class probabilities are the mean of the
/// per-tree leaf probabilities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomForest {
    params: ForestParams,
    /// Column order the trees were trained on. Empty until fitted.
    feature_names: Vec<String>,
    trees: Vec<DecisionTree>,
}

impl Default for RandomForest {
    fn default() -> Self {
        Self::new(ForestParams::default())
    }
}

impl RandomForest {
    pub fn new(params: ForestParams) -> Self {
        Self {
            params,
            feature_names: Vec::new(),
            trees: Vec::new(),
        }
    }

    pub fn params(&self) -> &ForestParams {
        &self.params
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }

    fn tree_params(&self, n_features: usize) -> TreeParams {
        let max_features = if self.params.max_features == 0 {
            ((n_features as f64).sqrt().ceil() as usize).max(1)
        } else {
            self.params.max_features.min(n_features)
        };
        TreeParams {
            max_depth: self.params.max_depth,
            min_samples_split: self.params.min_samples_split,
            max_features,
        }
    }

    fn positive_probability(&self, row: &FeatureRow) -> MfResult<f64> {
        if !self.is_fitted() {
            return Err(MatchError::NotTrained);
        }
        let x = to_vector(row, &self.feature_names)?;
        let sum: f64 = self.trees.iter().map(|t| t.predict_positive(&x)).sum();
        Ok(sum / self.trees.len() as f64)
    }
}

impl Classifier for RandomForest {
    fn is_fitted(&self) -> bool {
        !self.trees.is_empty()
    }

    fn fit(&mut self, features: &[FeatureRow], labels: &[Label]) -> MfResult<()> {
        if features.is_empty() {
            return Err(MatchError::Validation(
                "Cannot fit a classifier on zero rows".to_string(),
            ));
        }
        if features.len() != labels.len() {
            return Err(MatchError::Validation(format!(
                "{} feature rows but {} labels",
                features.len(),
                labels.len()
            )));
        }
        if self.params.n_trees == 0 {
            return Err(MatchError::Config("n_trees must be at least 1".to_string()));
        }

        let names: Vec<String> = features[0].names().map(str::to_string).collect();
        let data = features
            .iter()
            .map(|row| to_vector(row, &names))
            .collect::<MfResult<Vec<_>>>()?;

        let tree_params = self.tree_params(names.len());
        let n_rows = data.len();
        let seed = self.params.forest_seed;

        let trees: Vec<DecisionTree> = (0..self.params.n_trees)
            .into_par_iter()
            .map(|i| {
                let mut rng = fastrand::Rng::with_seed(seed.wrapping_add(i as u64));
                let bootstrap: Vec<usize> = (0..n_rows).map(|_| rng.usize(..n_rows)).collect();
                DecisionTree::grow(&data, labels, bootstrap, tree_params, &mut rng)
            })
            .collect();

        debug!(
            "Fitted {} trees on {} rows x {} features",
            trees.len(),
            n_rows,
            names.len()
        );

        self.feature_names = names;
        self.trees = trees;
        Ok(())
    }

    fn predict(&self, features: &FeatureRow) -> MfResult<Label> {
        Ok(self.predict_proba(features)?.most_likely())
    }

    fn predict_proba(&self, features: &FeatureRow) -> MfResult<ClassProbabilities> {
        self.positive_probability(features)
            .map(ClassProbabilities::from_positive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(values: &[(f64, bool)]) -> (Vec<FeatureRow>, Vec<Label>) {
        values
            .iter()
            .map(|&(x, label)| (FeatureRow::new().with("x", x), label))
            .unzip()
    }

    #[test]
    fn unfitted_forest_refuses_to_predict() {
        let forest = RandomForest::default();
        let err = forest.predict(&FeatureRow::new().with("x", 1.0)).unwrap_err();
        assert!(matches!(err, MatchError::NotTrained));
    }

    #[test]
    fn fit_rejects_inconsistent_rows() {
        let mut forest = RandomForest::default();
        let features = vec![
            FeatureRow::new().with("x", 1.0),
            FeatureRow::new().with("y", 1.0),
        ];
        let err = forest.fit(&features, &[true, false]).unwrap_err();
        assert!(matches!(err, MatchError::MalformedFeatures(_)));
        assert!(!forest.is_fitted());
    }

    #[test]
    fn fit_rejects_label_count_mismatch() {
        let mut forest = RandomForest::default();
        let (features, _) = rows(&[(1.0, true), (2.0, false)]);
        assert!(forest.fit(&features, &[true]).is_err());
    }

    #[test]
    fn same_seed_same_forest() {
        let (features, labels) = rows(&[(0.0, false), (1.0, false), (2.0, true), (3.0, true)]);
        let params = ForestParams {
            n_trees: 8,
            ..ForestParams::default()
        };
        let mut a = RandomForest::new(params);
        let mut b = RandomForest::new(params);
        a.fit(&features, &labels).unwrap();
        b.fit(&features, &labels).unwrap();
        assert_eq!(a, b);
    }
}
