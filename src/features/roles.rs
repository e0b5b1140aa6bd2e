use super::names::*;
use super::{FeatureExtractor, FeatureRow};
use crate::domain::{Job, Talent};

/// `tf_role_match`: 1 if any desired role of the talent is one the job is
/// open to. Exact string equality only.
#[derive(Debug, Clone, Copy, Default)]
pub struct JobRolesFeatureExtractor;

const FEATURES: &[&str] = &[TF_ROLE_MATCH];

impl FeatureExtractor for JobRolesFeatureExtractor {
    fn name(&self) -> &'static str {
        "job_roles"
    }

    fn feature_names(&self) -> &'static [&'static str] {
        FEATURES
    }

    fn extract(&self, talent: &Talent, job: &Job) -> FeatureRow {
        let matched = talent
            .job_roles
            .iter()
            .any(|role| job.job_roles.contains(role));

        FeatureRow::new().with(TF_ROLE_MATCH, if matched { 1.0 } else { 0.0 })
    }
}
