//! Repository candidates returned by the search provider.

use serde::{Deserialize, Serialize};

/// A repository record fetched from the code-hosting search endpoint.
///
/// Candidates are immutable once fetched and live only for the duration
/// of a single resolution call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryCandidate {
    /// Provider-assigned numeric identifier.
    pub id: u64,
    /// Full repository name in `owner/name` form.
    pub full_name: String,
    /// Repository description (may be absent).
    #[serde(default)]
    pub description: Option<String>,
    /// Star count at fetch time.
    pub stars: u64,
    /// Canonical web URL.
    pub url: String,
    /// Primary language reported by the provider.
    #[serde(default)]
    pub language: Option<String>,
}

impl RepositoryCandidate {
    /// Create a candidate with the required fields; optional fields start empty.
    pub fn new(id: u64, full_name: impl Into<String>, stars: u64, url: impl Into<String>) -> Self {
        Self {
            id,
            full_name: full_name.into(),
            description: None,
            stars,
            url: url.into(),
            language: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the primary language.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Description text, or an empty string when the provider sent none.
    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }
}
