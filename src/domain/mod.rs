pub mod levels;
pub mod normalize;

pub use self::levels::{level_of, Degree, LanguageRating, Ordinal, Seniority, Stated};
pub use self::normalize::{normalize_job, normalize_talent};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A language skill (talent side) or requirement (job side).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageSkill {
    pub title: String,
    /// `None` when the raw rating is not on the CEFR scale.
    pub rating: Option<LanguageRating>,
    /// Only meaningful for job requirements.
    pub must_have: bool,
}

/// A job candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Talent {
    pub languages: BTreeMap<String, LanguageSkill>,
    pub job_roles: Vec<String>,
    // "none" is absent; anything else off the scale is kept as `Other`.
    pub seniority: Stated<Seniority>,
    pub salary_expectation: Option<i64>,
    pub degree: Option<Degree>,
}

/// A job posting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub languages: BTreeMap<String, LanguageSkill>,
    pub job_roles: Vec<String>,
    /// Acceptable seniorities. A `None` entry means the posting accepts "none".
    pub seniorities: Vec<Option<Seniority>>,
    pub max_salary: Option<i64>,
    pub min_degree: Option<Degree>,
}

impl Talent {
    pub fn from_raw(raw: &Value) -> Self {
        normalize_talent(raw)
    }
}

impl Job {
    pub fn from_raw(raw: &Value) -> Self {
        normalize_job(raw)
    }
}
