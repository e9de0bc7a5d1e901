use crate::domain::configuration::ScoreWeights;
use crate::domain::screen::{PerformanceCandidate, ScreenResult};

/// Weighted linear score. Not normalized: only meaningful for ranking within one run.
pub fn composite_score(
    candidate: &PerformanceCandidate,
    pe: f64,
    dividend_pct: f64,
    weights: &ScoreWeights,
    max_pe: f64,
) -> f64 {
    candidate.lookback_performance_pct * weights.momentum
        + candidate.distance_from_high_pct().abs() * weights.turnaround
        + dividend_pct * weights.dividend
        + (max_pe - pe) * weights.valuation
}

/// Stable re-rank by score, descending. Unscored results go last.
pub fn rank_by_score(results: &mut [ScreenResult]) {
    results.sort_by(|a, b| match (a.score, b.score) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(std::cmp::Ordering::Equal),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
}
