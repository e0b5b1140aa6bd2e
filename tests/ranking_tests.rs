use matchforge::model::MatchResult;
use matchforge::ranking::{positive_confidence, rank_by_positive_confidence, sort_by_score};
use serde_json::json;

fn result(id: u32, label: bool, score: f64) -> MatchResult {
    MatchResult {
        talent: json!({"id": id}),
        job: json!({"id": 0}),
        label,
        score,
    }
}

fn ids(results: &[MatchResult]) -> Vec<u64> {
    results
        .iter()
        .map(|r| r.talent["id"].as_u64().unwrap())
        .collect()
}

#[test]
fn ranking_keys_for_mixed_labels() {
    let input = vec![result(1, true, 0.9), result(2, false, 0.8)];
    let keys: Vec<f64> = input.iter().map(positive_confidence).collect();
    assert!((keys[0] - 0.9).abs() < 1e-12);
    assert!((keys[1] - 0.2).abs() < 1e-12);

    let ranked = rank_by_positive_confidence(input);
    assert_eq!(ids(&ranked), vec![1, 2]);
}

#[test]
fn confident_negative_sinks() {
    let r = result(7, false, 0.95);
    assert!((positive_confidence(&r) - 0.05).abs() < 1e-12);

    let ranked = rank_by_positive_confidence(vec![r, result(8, true, 0.55)]);
    assert_eq!(ids(&ranked), vec![8, 7]);
}

#[test]
fn equal_keys_keep_input_order() {
    let ranked = rank_by_positive_confidence(vec![
        result(1, true, 0.75),
        result(2, false, 0.25),
        result(3, true, 0.75),
    ]);
    assert_eq!(ids(&ranked), vec![1, 2, 3]);
}

#[test]
fn sort_by_score_is_descending_and_stable() {
    let mut results = vec![
        result(1, false, 0.7),
        result(2, true, 0.9),
        result(3, true, 0.7),
    ];
    sort_by_score(&mut results);
    assert_eq!(ids(&results), vec![2, 1, 3]);
}

#[test]
fn empty_input_ranks_to_empty() {
    assert!(rank_by_positive_confidence(Vec::new()).is_empty());
}
