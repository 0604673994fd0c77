//! Turns free-form completion text into recommendations.
//!
//! Extraction is plain text scraping: the span from the first `[` to the
//! last `]` is taken as the JSON array. Each element is then matched back
//! to the candidate set by exact full name and has its missing fields
//! repaired from the matched candidate.

use serde_json::{Map, Value};

use crate::domain::errors::InterpretationError;
use crate::domain::models::{Recommendation, RepositoryCandidate};

/// Byte span of the greedy `[` .. `]` match, inclusive of both brackets.
pub fn locate_json_array(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    (end > start).then(|| &text[start..=end])
}

/// Extract the embedded JSON array, if there is one that parses.
pub fn extract_json_array(text: &str) -> Option<Vec<Value>> {
    locate_json_array(text).and_then(|span| serde_json::from_str(span).ok())
}

/// Interpret completion text against the candidates that were offered.
///
/// Order and count follow the provider's array exactly. Elements without a
/// string `name` are skipped. Names that match no candidate are kept
/// verbatim with `url` and `stars` absent.
pub fn interpret(
    text: &str,
    candidates: &[RepositoryCandidate],
) -> Result<Vec<Recommendation>, InterpretationError> {
    let span = locate_json_array(text).ok_or(InterpretationError::NoJsonArray)?;
    let elements: Vec<Value> = serde_json::from_str(span)
        .map_err(|e| InterpretationError::InvalidJson(e.to_string()))?;

    let recommendations: Vec<Recommendation> = elements
        .iter()
        .enumerate()
        .filter_map(|(index, element)| {
            let Some(fields) = element.as_object() else {
                tracing::debug!(index, "skipping non-object array element");
                return None;
            };
            let recommendation = repair(fields, candidates);
            if recommendation.is_none() {
                tracing::debug!(index, "skipping array element without a name");
            }
            recommendation
        })
        .collect();

    tracing::debug!(
        parsed = elements.len(),
        kept = recommendations.len(),
        matched = recommendations.iter().filter(|r| r.url.is_some()).count(),
        "interpreted completion"
    );
    Ok(recommendations)
}

fn repair(fields: &Map<String, Value>, candidates: &[RepositoryCandidate]) -> Option<Recommendation> {
    let name = fields.get("name")?.as_str()?.to_string();
    let description = non_blank(fields, "description");
    let reason = non_blank(fields, "reason").unwrap_or_default();
    let url = non_blank(fields, "url");
    let stars = fields.get("stars").and_then(Value::as_u64);

    let recommendation = match candidates.iter().find(|c| c.full_name == name) {
        Some(candidate) => Recommendation {
            description: description.unwrap_or_else(|| candidate.description_or_empty().to_string()),
            reason,
            url: url.or_else(|| Some(candidate.url.clone())),
            stars: stars.or(Some(candidate.stars)),
            name,
        },
        None => Recommendation {
            description: description.unwrap_or_default(),
            reason,
            url: None,
            stars: None,
            name,
        },
    };
    Some(recommendation)
}

fn non_blank(fields: &Map<String, Value>, key: &str) -> Option<String> {
    fields
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}
