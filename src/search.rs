use crate::classifier::RandomForest;
use crate::error::MfResult;
use crate::model::{load_model, MatchResult, MatchingModel};
use serde_json::Value;
use std::path::Path;

/// Entry point for callers: match raw talent and job records with a trained
/// model.
///
/// `score` in every result is the model's confidence in the predicted
/// `label`. Use `ranking::rank_by_positive_confidence` to order by match
/// likelihood instead.
pub struct Search {
    model: MatchingModel<RandomForest>,
}

impl Search {
    pub fn new(model: MatchingModel<RandomForest>) -> Self {
        Self { model }
    }

    pub fn load<P: AsRef<Path>>(model_path: P) -> MfResult<Self> {
        Ok(Self::new(load_model(model_path)?))
    }

    pub fn model(&self) -> &MatchingModel<RandomForest> {
        &self.model
    }

    pub fn match_pair(&self, talent: &Value, job: &Value) -> MfResult<MatchResult> {
        self.model.predict(talent, job)
    }

    /// All combinations of `talents` and `jobs`, sorted by score descending.
    pub fn match_bulk(&self, talents: &[Value], jobs: &[Value]) -> MfResult<Vec<MatchResult>> {
        self.model.predict_bulk(talents, jobs)
    }
}
