pub mod persist;
pub mod training;

pub use self::persist::{load_model, save_model, SavedModel};

use crate::classifier::{Classifier, Label};
use crate::domain::{Job, Talent};
use crate::error::{MatchError, MfResult};
use crate::features::{FeatureExtractorManager, FeatureRow};
use crate::ranking::sort_by_score;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Prediction for one (talent, job) pair. The raw inputs are echoed back
/// untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub talent: Value,
    pub job: Value,
    pub label: Label,
    /// Confidence in `label`, not necessarily in the positive class.
    pub score: f64,
}

/// A trained classifier together with the feature pipeline it was trained on.
#[derive(Debug)]
pub struct MatchingModel<C: Classifier> {
    classifier: C,
    extractors: FeatureExtractorManager,
}

impl<C: Classifier> MatchingModel<C> {
    pub fn new(classifier: C, extractors: FeatureExtractorManager) -> Self {
        Self {
            classifier,
            extractors,
        }
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    pub fn extractors(&self) -> &FeatureExtractorManager {
        &self.extractors
    }

    pub fn features(&self, talent: &Talent, job: &Job) -> FeatureRow {
        self.extractors.extract_features(talent, job)
    }

    /// Label and confidence in that label for already normalized records.
    pub fn score_pair(&self, talent: &Talent, job: &Job) -> MfResult<(Label, f64)> {
        let row = self.features(talent, job);
        let label = self.classifier.predict(&row)?;
        let probabilities = self.classifier.predict_proba(&row)?;
        Ok((label, probabilities.get(label)))
    }

    pub fn predict(&self, talent_raw: &Value, job_raw: &Value) -> MfResult<MatchResult> {
        self.ensure_fitted()?;
        let (label, score) =
            self.score_pair(&Talent::from_raw(talent_raw), &Job::from_raw(job_raw))?;
        Ok(MatchResult {
            talent: talent_raw.clone(),
            job: job_raw.clone(),
            label,
            score,
        })
    }

    /// Every talent against every job, best score first.
    ///
    /// Pairs are enumerated talent-major and scored in parallel. The final
    /// sort is stable, so equal scores keep that enumeration order.
    pub fn predict_bulk(&self, talents_raw: &[Value], jobs_raw: &[Value]) -> MfResult<Vec<MatchResult>> {
        self.ensure_fitted()?;

        let talents: Vec<Talent> = talents_raw.iter().map(Talent::from_raw).collect();
        let jobs: Vec<Job> = jobs_raw.iter().map(Job::from_raw).collect();

        let pairs: Vec<(usize, usize)> = (0..talents.len())
            .flat_map(|t| (0..jobs.len()).map(move |j| (t, j)))
            .collect();

        let mut results = pairs
            .par_iter()
            .map(|&(t, j)| {
                let (label, score) = self.score_pair(&talents[t], &jobs[j])?;
                Ok(MatchResult {
                    talent: talents_raw[t].clone(),
                    job: jobs_raw[j].clone(),
                    label,
                    score,
                })
            })
            .collect::<MfResult<Vec<_>>>()?;

        sort_by_score(&mut results);
        Ok(results)
    }

    fn ensure_fitted(&self) -> MfResult<()> {
        if self.classifier.is_fitted() {
            Ok(())
        } else {
            Err(MatchError::NotTrained)
        }
    }
}
