use super::names::*;
use super::{FeatureExtractor, FeatureRow};
use crate::domain::{level_of, Job, Talent};

/// Language requirements of the job against the talent's skills.
///
/// * `j_lang_importance`: number of must-have job languages
/// * `tj_lang_avg_diff`: mean of `talent_level - job_level` over the must-have
///   languages, 0 when there are none
///
/// A talent without the language at all counts as level 0, the same as an
/// unknown rating. Not part of the default pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct LanguageFeatureExtractor;

const FEATURES: &[&str] = &[J_LANG_IMPORTANCE, TJ_LANG_AVG_DIFF];

impl FeatureExtractor for LanguageFeatureExtractor {
    fn name(&self) -> &'static str {
        "language"
    }

    fn feature_names(&self) -> &'static [&'static str] {
        FEATURES
    }

    fn extract(&self, talent: &Talent, job: &Job) -> FeatureRow {
        let mut must_have = 0u32;
        let mut diff_sum = 0i64;

        for requirement in job.languages.values().filter(|l| l.must_have) {
            must_have += 1;
            let job_level = level_of(requirement.rating);
            let talent_level = talent
                .languages
                .get(&requirement.title)
                .map_or(0, |skill| level_of(skill.rating));
            diff_sum += i64::from(talent_level - job_level);
        }

        let avg_diff = if must_have > 0 {
            diff_sum as f64 / f64::from(must_have)
        } else {
            0.0
        };

        FeatureRow::new()
            .with(J_LANG_IMPORTANCE, f64::from(must_have))
            .with(TJ_LANG_AVG_DIFF, avg_diff)
    }
}
