use super::names::*;
use super::{FeatureExtractor, FeatureRow};
use crate::domain::{Job, Talent};

/// Value emitted when the ratio is undefined.
pub const NEUTRAL_SALARY_DIFF: f64 = 0.0;

/// `tf_salary_diff = (max_salary - salary_expectation + 1) / (max_salary + 1)`
///
/// A signed ratio normalized by what the job pays: negative when the talent
/// expects more than the maximum, positive otherwise. When either side is
/// absent, or `max_salary == -1`, the feature is `NEUTRAL_SALARY_DIFF`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SalaryFeatureExtractor;

const FEATURES: &[&str] = &[TF_SALARY_DIFF];

pub fn salary_diff(max_salary: Option<i64>, expectation: Option<i64>) -> f64 {
    let (Some(max), Some(expected)) = (max_salary, expectation) else {
        return NEUTRAL_SALARY_DIFF;
    };
    let denominator = max as f64 + 1.0;
    if denominator == 0.0 {
        return NEUTRAL_SALARY_DIFF;
    }
    (max as f64 - expected as f64 + 1.0) / denominator
}

impl FeatureExtractor for SalaryFeatureExtractor {
    fn name(&self) -> &'static str {
        "salary"
    }

    fn feature_names(&self) -> &'static [&'static str] {
        FEATURES
    }

    fn extract(&self, talent: &Talent, job: &Job) -> FeatureRow {
        FeatureRow::new().with(
            TF_SALARY_DIFF,
            salary_diff(job.max_salary, talent.salary_expectation),
        )
    }
}
