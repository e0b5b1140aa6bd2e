use crate::classifier::POSITIVE;
use crate::model::MatchResult;

/// Sorts by `score`, highest first. Stable: equal scores keep their order.
pub fn sort_by_score(results: &mut [MatchResult]) {
    results.sort_by(|a, b| b.score.total_cmp(&a.score));
}

/// Confidence that the pair is a match, whatever label was predicted.
pub fn positive_confidence(result: &MatchResult) -> f64 {
    if result.label == POSITIVE {
        result.score
    } else {
        1.0 - result.score
    }
}

/// Re-sorts results by positive-class confidence, highest first.
///
/// `sort_by_score` ranks a confident "no match" above a hesitant "match";
/// this ordering puts likely matches on top instead. Nothing is re-predicted,
/// and equal keys keep their relative order.
pub fn rank_by_positive_confidence(mut results: Vec<MatchResult>) -> Vec<MatchResult> {
    results.sort_by(|a, b| positive_confidence(b).total_cmp(&positive_confidence(a)));
    results
}
