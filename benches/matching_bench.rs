use criterion::{criterion_group, criterion_main, Criterion};
use matchforge::classifier::{Classifier, RandomForest};
use matchforge::config::ForestParams;
use matchforge::dataset::{build_feature_table, LabeledPair};
use matchforge::domain::{Job, Talent};
use matchforge::features::FeatureExtractorManager;
use matchforge::model::MatchingModel;
use serde_json::{json, Value};
use std::hint::black_box;

const SENIORITIES: [&str; 4] = ["junior", "midlevel", "senior", "none"];
const DEGREES: [&str; 4] = ["apprenticeship", "bachelor", "master", "doctorate"];
const ROLES: [&str; 4] = ["backend", "frontend", "devops", "data"];

fn talents(n: usize) -> Vec<Value> {
    (0..n)
        .map(|i| {
            json!({
                "languages": [{"title": "German", "rating": "C1"}],
                "job_roles": [ROLES[i % 4]],
                "seniority": SENIORITIES[i % 4],
                "salary_expectation": 35_000 + (i as i64 * 1_500) % 50_000,
                "degree": DEGREES[(i / 4) % 4],
            })
        })
        .collect()
}

fn jobs(n: usize) -> Vec<Value> {
    (0..n)
        .map(|i| {
            json!({
                "languages": [{"title": "German", "rating": "B2", "must_have": true}],
                "job_roles": [ROLES[i % 4], ROLES[(i + 1) % 4]],
                "seniorities": [SENIORITIES[i % 3], SENIORITIES[(i + 1) % 3]],
                "max_salary": 40_000 + (i as i64 * 2_500) % 45_000,
                "min_degree": DEGREES[i % 3],
            })
        })
        .collect()
}

fn setup_model() -> MatchingModel<RandomForest> {
    let ts = talents(40);
    let js = jobs(10);
    let mut pairs = Vec::new();
    for (ti, t) in ts.iter().enumerate() {
        for (ji, j) in js.iter().enumerate() {
            pairs.push(LabeledPair {
                talent: t.clone(),
                job: j.clone(),
                label: (ti + ji) % 3 == 0,
            });
        }
    }

    let extractors = FeatureExtractorManager::new();
    let table = build_feature_table(&pairs, &extractors);
    let mut forest = RandomForest::new(ForestParams {
        n_trees: 50,
        ..Default::default()
    });
    forest.fit(&table.rows, &table.labels).unwrap();
    MatchingModel::new(forest, extractors)
}

fn bench_matching(c: &mut Criterion) {
    let extractors = FeatureExtractorManager::new();
    let ts = talents(50);
    let js = jobs(20);
    let talent = Talent::from_raw(&ts[0]);
    let job = Job::from_raw(&js[0]);

    c.bench_function("extract_features", |b| {
        b.iter(|| extractors.extract_features(black_box(&talent), black_box(&job)))
    });

    let model = setup_model();
    c.bench_function("predict_pair", |b| {
        b.iter(|| model.predict(black_box(&ts[0]), black_box(&js[0])).unwrap())
    });

    c.bench_function("predict_bulk_50x20", |b| {
        b.iter(|| model.predict_bulk(black_box(&ts), black_box(&js)).unwrap())
    });
}

criterion_group!(benches, bench_matching);
criterion_main!(benches);
