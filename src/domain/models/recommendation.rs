//! Recommendation output types.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::candidate::RepositoryCandidate;

/// Maximum number of recommendations a resolution ever returns.
pub const MAX_RECOMMENDATIONS: usize = 3;

/// A single ranked repository recommendation.
///
/// `name` is either the exact full name of a candidate seen during the
/// resolution, or a name coined by the completion provider that could not
/// be matched. In the latter case `url` and `stars` are absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Full repository name (`owner/name`).
    pub name: String,
    /// Short description of the repository.
    #[serde(default)]
    pub description: String,
    /// Human-readable justification.
    #[serde(default)]
    pub reason: String,
    /// Canonical URL, when the name matched a candidate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Star count, when the name matched a candidate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stars: Option<u64>,
}

impl Recommendation {
    /// Build a recommendation for a known candidate with the given reason.
    pub fn from_candidate(candidate: &RepositoryCandidate, reason: impl Into<String>) -> Self {
        Self {
            name: candidate.full_name.clone(),
            description: candidate.description_or_empty().to_string(),
            reason: reason.into(),
            url: Some(candidate.url.clone()),
            stars: Some(candidate.stars),
        }
    }
}

/// Which resolution tier produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationSource {
    /// The enhanced agent recommender answered.
    Enhanced,
    /// The completion provider's answer was interpreted successfully.
    Completion,
    /// The deterministic star-order heuristic.
    Heuristic,
}

impl fmt::Display for RecommendationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enhanced => write!(f, "enhanced"),
            Self::Completion => write!(f, "completion"),
            Self::Heuristic => write!(f, "heuristic"),
        }
    }
}

/// The ordered, bounded outcome of one resolution call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionResult {
    /// Recommendations, best first. Never more than [`MAX_RECOMMENDATIONS`].
    pub recommendations: Vec<Recommendation>,
    /// Tier that produced the recommendations.
    pub source: RecommendationSource,
}

impl ResolutionResult {
    /// Wrap recommendations, keeping at most [`MAX_RECOMMENDATIONS`] in order.
    pub fn new(source: RecommendationSource, mut recommendations: Vec<Recommendation>) -> Self {
        recommendations.truncate(MAX_RECOMMENDATIONS);
        Self {
            recommendations,
            source,
        }
    }

    pub fn len(&self) -> usize {
        self.recommendations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recommendations.is_empty()
    }

    /// Names in rank order.
    pub fn names(&self) -> Vec<&str> {
        self.recommendations.iter().map(|r| r.name.as_str()).collect()
    }
}
