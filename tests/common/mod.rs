#![allow(dead_code)]

use matchforge::classifier::RandomForest;
use matchforge::config::{Config, ForestParams, TrainingParams};
use matchforge::dataset::LabeledPair;
use matchforge::model::{training, MatchingModel};
use serde_json::{json, Value};

pub fn talent(seniority: &str, degree: &str, salary: i64, roles: &[&str]) -> Value {
    json!({
        "languages": [{"title": "German", "rating": "C1"}],
        "job_roles": roles,
        "seniority": seniority,
        "salary_expectation": salary,
        "degree": degree,
    })
}

pub fn job(seniorities: &[&str], min_degree: &str, max_salary: i64, roles: &[&str]) -> Value {
    json!({
        "languages": [{"title": "German", "rating": "B2", "must_have": true}],
        "job_roles": roles,
        "seniorities": seniorities,
        "max_salary": max_salary,
        "min_degree": min_degree,
    })
}

/// Small labeled set where a match means: shared role, salary within budget,
/// and seniority inside the accepted range.
pub fn labeled_pairs() -> Vec<LabeledPair> {
    let seniorities = ["junior", "midlevel", "senior"];
    let degrees = ["bachelor", "master"];
    let salaries = [40_000, 55_000, 70_000];
    let roles = ["backend", "frontend"];

    let mut pairs = Vec::new();
    for (si, s) in seniorities.iter().enumerate() {
        for d in degrees {
            for &salary in &salaries {
                for r in roles {
                    let t = talent(s, d, salary, &[r]);
                    let j = job(&["midlevel", "senior"], "bachelor", 60_000, &["backend"]);
                    let label = si >= 1 && salary <= 60_000 && r == "backend";
                    pairs.push(LabeledPair {
                        talent: t,
                        job: j,
                        label,
                    });
                }
            }
        }
    }
    pairs
}

pub fn fast_config() -> Config {
    Config {
        forest: ForestParams {
            n_trees: 15,
            max_depth: 6,
            ..Default::default()
        },
        training: TrainingParams {
            cv_folds: 0,
            ..Default::default()
        },
        ..Default::default()
    }
}

pub fn trained_model() -> MatchingModel<RandomForest> {
    training::train(&labeled_pairs(), &fast_config())
        .expect("training on fixture data")
        .model
}
