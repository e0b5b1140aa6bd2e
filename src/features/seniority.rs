use super::names::*;
use super::{FeatureExtractor, FeatureRow};
use crate::domain::{level_of, Job, Talent};

/// Seniority of the talent against the range of seniorities the job accepts.
///
/// * `t_seniority_missing`: 1 if the talent did not state a seniority
/// * `t_seniority`: talent's level, 0 if absent
/// * `j_min_seniority` / `j_max_seniority`: bounds of the job's levels (absent entries count as 0)
/// * `tj_diff_seniority`: 0 inside the bounds, else `t_seniority - j_min_seniority`
///
/// An absent talent seniority is ambiguous in the source data (lead and head
/// roles, or simply not filled in). It is kept as one flag, not disambiguated.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeniorityFeatureExtractor;

const FEATURES: &[&str] = &[
    T_SENIORITY_MISSING,
    T_SENIORITY,
    J_MIN_SENIORITY,
    J_MAX_SENIORITY,
    TJ_DIFF_SENIORITY,
];

impl FeatureExtractor for SeniorityFeatureExtractor {
    fn name(&self) -> &'static str {
        "seniority"
    }

    fn feature_names(&self) -> &'static [&'static str] {
        FEATURES
    }

    fn extract(&self, talent: &Talent, job: &Job) -> FeatureRow {
        let t = talent.seniority.level();

        // An empty list behaves like a single absent entry.
        let (j_min, j_max) = job
            .seniorities
            .iter()
            .map(|s| level_of(*s))
            .fold(None, |acc: Option<(i32, i32)>, level| match acc {
                None => Some((level, level)),
                Some((lo, hi)) => Some((lo.min(level), hi.max(level))),
            })
            .unwrap_or((0, 0));

        // Negative when under-qualified, positive when over-qualified.
        let diff = if (j_min..=j_max).contains(&t) {
            0
        } else {
            t - j_min
        };

        FeatureRow::new()
            .with(
                T_SENIORITY_MISSING,
                if talent.seniority.is_absent() { 1.0 } else { 0.0 },
            )
            .with(T_SENIORITY, t as f64)
            .with(J_MIN_SENIORITY, j_min as f64)
            .with(J_MAX_SENIORITY, j_max as f64)
            .with(TJ_DIFF_SENIORITY, diff as f64)
    }
}
