//! Feature extraction for (Talent, Job) pairs.
//!
//! Naming convention for features:
//! * `t_` derived from a talent property
//! * `j_` derived from a job property
//! * `tj_` / `tf_` derived from a combination of both
//!
//! Only numeric features are produced; categorical values go through the
//! ordinal scales in `domain::levels`, never one-hot columns.

pub mod degree;
pub mod language;
pub mod manager;
pub mod roles;
pub mod salary;
pub mod seniority;

pub use self::degree::DegreeFeatureExtractor;
pub use self::language::LanguageFeatureExtractor;
pub use self::manager::FeatureExtractorManager;
pub use self::roles::JobRolesFeatureExtractor;
pub use self::salary::SalaryFeatureExtractor;
pub use self::seniority::SeniorityFeatureExtractor;

use crate::domain::{Job, Talent};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum_macros::{Display, EnumIter, EnumString};

pub mod names {
    pub const T_SENIORITY_MISSING: &str = "t_seniority_missing";
    pub const T_SENIORITY: &str = "t_seniority";
    pub const J_MIN_SENIORITY: &str = "j_min_seniority";
    pub const J_MAX_SENIORITY: &str = "j_max_seniority";
    pub const TJ_DIFF_SENIORITY: &str = "tj_diff_seniority";

    pub const T_DEGREE: &str = "t_degree";
    pub const J_DEGREE: &str = "j_degree";
    pub const TJ_DIFF_DEGREE: &str = "tj_diff_degree";

    pub const TF_SALARY_DIFF: &str = "tf_salary_diff";

    pub const TF_ROLE_MATCH: &str = "tf_role_match";

    pub const J_LANG_IMPORTANCE: &str = "j_lang_importance";
    pub const TJ_LANG_AVG_DIFF: &str = "tj_lang_avg_diff";
}

/// One row of numeric features, keyed by feature name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureRow(BTreeMap<String, f64>);

impl FeatureRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, value: f64) {
        self.0.insert(name.to_string(), value);
    }

    pub fn with(mut self, name: &str, value: f64) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Key union. Returns the names that were already present.
    pub fn merge(&mut self, other: FeatureRow) -> Vec<String> {
        let mut collisions = Vec::new();
        for (name, value) in other.0 {
            if self.0.insert(name.clone(), value).is_some() {
                collisions.push(name);
            }
        }
        collisions
    }
}

impl FromIterator<(String, f64)> for FeatureRow {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Derives named numeric features from one (Talent, Job) pair.
///
/// Implementations must be pure: the output depends only on the two records,
/// and repeated calls return the same row. Every extractor owns a disjoint set
/// of feature names.
pub trait FeatureExtractor: Send + Sync {
    fn name(&self) -> &'static str;

    /// The exact keys `extract` emits.
    fn feature_names(&self) -> &'static [&'static str];

    fn extract(&self, talent: &Talent, job: &Job) -> FeatureRow;
}

/// The built-in extractors.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ExtractorKind {
    Seniority,
    Degree,
    Salary,
    JobRoles,
    Language,
}

impl ExtractorKind {
    /// Registered by `FeatureExtractorManager::new`. The language extractor
    /// is left out: it did not improve accuracy on the labeled data.
    pub const DEFAULTS: [ExtractorKind; 4] = [
        ExtractorKind::Seniority,
        ExtractorKind::Degree,
        ExtractorKind::Salary,
        ExtractorKind::JobRoles,
    ];

    pub fn build(self) -> Box<dyn FeatureExtractor> {
        match self {
            Self::Seniority => Box::new(SeniorityFeatureExtractor),
            Self::Degree => Box::new(DegreeFeatureExtractor),
            Self::Salary => Box::new(SalaryFeatureExtractor),
            Self::JobRoles => Box::new(JobRolesFeatureExtractor),
            Self::Language => Box::new(LanguageFeatureExtractor),
        }
    }

    /// Parses a comma separated list such as `"seniority, job_roles"`.
    pub fn parse_list(list: &str) -> Result<Vec<ExtractorKind>, String> {
        list.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<ExtractorKind>()
                    .map_err(|_| format!("Unknown feature extractor '{}'", s))
            })
            .collect()
    }
}
