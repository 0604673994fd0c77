//! Deterministic star-order fallback.

use crate::domain::models::{Recommendation, RepositoryCandidate, MAX_RECOMMENDATIONS};

/// Reason attached to every heuristic recommendation.
pub fn heuristic_reason(stars: u64) -> String {
    format!("Popular repository with {stars} stars, actively maintained")
}

/// Map the first three candidates, in the order given, to recommendations.
///
/// Never pads: fewer candidates yield fewer recommendations.
pub fn fallback_rank(candidates: &[RepositoryCandidate]) -> Vec<Recommendation> {
    candidates
        .iter()
        .take(MAX_RECOMMENDATIONS)
        .map(|c| Recommendation::from_candidate(c, heuristic_reason(c.stars)))
        .collect()
}
