use super::names::*;
use super::{FeatureExtractor, FeatureRow};
use crate::domain::{level_of, Job, Talent};

/// `t_degree`, `j_degree` (the job's minimum, 0 if none) and their difference.
#[derive(Debug, Clone, Copy, Default)]
pub struct DegreeFeatureExtractor;

const FEATURES: &[&str] = &[T_DEGREE, J_DEGREE, TJ_DIFF_DEGREE];

impl FeatureExtractor for DegreeFeatureExtractor {
    fn name(&self) -> &'static str {
        "degree"
    }

    fn feature_names(&self) -> &'static [&'static str] {
        FEATURES
    }

    fn extract(&self, talent: &Talent, job: &Job) -> FeatureRow {
        let t = level_of(talent.degree);
        let j = level_of(job.min_degree);

        FeatureRow::new()
            .with(T_DEGREE, t as f64)
            .with(J_DEGREE, j as f64)
            .with(TJ_DIFF_DEGREE, (t - j) as f64)
    }
}
