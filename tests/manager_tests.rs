use matchforge::domain::{Job, Talent};
use matchforge::error::MatchError;
use matchforge::features::names::*;
use matchforge::features::{
    ExtractorKind, FeatureExtractor, FeatureExtractorManager, FeatureRow, LanguageFeatureExtractor,
    SalaryFeatureExtractor,
};
use serde_json::json;

/// Emits a name that the salary extractor already owns.
struct ShadowSalary;

impl FeatureExtractor for ShadowSalary {
    fn name(&self) -> &'static str {
        "shadow_salary"
    }

    fn feature_names(&self) -> &'static [&'static str] {
        &[TF_SALARY_DIFF]
    }

    fn extract(&self, _talent: &Talent, _job: &Job) -> FeatureRow {
        FeatureRow::new().with(TF_SALARY_DIFF, -1.0)
    }
}

struct Constant;

impl FeatureExtractor for Constant {
    fn name(&self) -> &'static str {
        "constant"
    }

    fn feature_names(&self) -> &'static [&'static str] {
        &["c_one"]
    }

    fn extract(&self, _talent: &Talent, _job: &Job) -> FeatureRow {
        FeatureRow::new().with("c_one", 1.0)
    }
}

fn sample() -> (Talent, Job) {
    (
        Talent::from_raw(&json!({
            "seniority": "senior",
            "degree": "master",
            "salary_expectation": 50_000,
            "job_roles": ["backend"],
        })),
        Job::from_raw(&json!({
            "seniorities": ["junior", "midlevel"],
            "min_degree": "bachelor",
            "max_salary": 60_000,
            "job_roles": ["backend", "devops"],
        })),
    )
}

#[test]
fn default_pipeline_emits_ten_features_without_language() {
    let manager = FeatureExtractorManager::new();
    assert_eq!(manager.names(), vec!["seniority", "degree", "salary", "job_roles"]);

    let (talent, job) = sample();
    let row = manager.extract_features(&talent, &job);

    assert_eq!(row.len(), 10);
    assert!(!row.contains(J_LANG_IMPORTANCE));
    assert!(!row.contains(TJ_LANG_AVG_DIFF));
    assert_eq!(row.get(TJ_DIFF_SENIORITY), Some(2.0));
    assert_eq!(row.get(TJ_DIFF_DEGREE), Some(1.0));
    assert_eq!(row.get(TF_ROLE_MATCH), Some(1.0));
}

#[test]
fn default_pipeline_matches_registering_defaults_one_by_one() {
    let defaults = FeatureExtractorManager::new();
    let registered = FeatureExtractorManager::from_kinds(&ExtractorKind::DEFAULTS).unwrap();
    assert_eq!(defaults.feature_names(), registered.feature_names());

    let mut names = defaults.feature_names();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), defaults.feature_names().len());
}

#[test]
fn registering_language_adds_its_two_features() {
    let mut manager = FeatureExtractorManager::new();
    manager.register(Box::new(LanguageFeatureExtractor)).unwrap();

    let (talent, job) = sample();
    let row = manager.extract_features(&talent, &job);
    assert_eq!(row.len(), 12);
    assert_eq!(row.get(J_LANG_IMPORTANCE), Some(0.0));
}

#[test]
fn empty_manager_yields_empty_row() {
    let manager = FeatureExtractorManager::empty();
    let (talent, job) = sample();
    assert!(manager.is_empty());
    assert!(manager.extract_features(&talent, &job).is_empty());
}

#[test]
fn clear_then_register_custom_extractor() {
    let mut manager = FeatureExtractorManager::new();
    manager.clear();
    manager.register(Box::new(Constant)).unwrap();

    let (talent, job) = sample();
    let row = manager.extract_features(&talent, &job);
    assert_eq!(row.len(), 1);
    assert_eq!(row.get("c_one"), Some(1.0));
}

#[test]
fn overlapping_feature_names_are_rejected() {
    let mut manager = FeatureExtractorManager::empty();
    manager.register(Box::new(SalaryFeatureExtractor)).unwrap();

    let err = manager.register(Box::new(ShadowSalary)).unwrap_err();
    assert!(matches!(err, MatchError::Config(msg) if msg.contains(TF_SALARY_DIFF)));
    assert_eq!(manager.len(), 1);
}

#[test]
fn custom_extractor_has_no_kind() {
    let mut manager = FeatureExtractorManager::empty();
    manager.register(Box::new(Constant)).unwrap();
    assert!(manager.kinds().is_err());

    let defaults = FeatureExtractorManager::new();
    assert_eq!(defaults.kinds().unwrap(), ExtractorKind::DEFAULTS.to_vec());
}

#[test]
fn feature_names_follow_registration_order() {
    let manager =
        FeatureExtractorManager::from_kinds(&[ExtractorKind::JobRoles, ExtractorKind::Salary])
            .unwrap();
    assert_eq!(manager.feature_names(), vec![TF_ROLE_MATCH, TF_SALARY_DIFF]);
}

#[test]
fn extraction_is_repeatable() {
    let manager = FeatureExtractorManager::new();
    let (talent, job) = sample();
    assert_eq!(
        manager.extract_features(&talent, &job),
        manager.extract_features(&talent, &job)
    );
}
