//! GitHub search API response models.
//!
//! These structs map to the GitHub REST API v3 JSON payloads for
//! `/search/repositories`. They are internal to the adapter; callers only
//! see [`RepositoryCandidate`].

use serde::{Deserialize, Serialize};

use crate::domain::models::RepositoryCandidate;

/// Envelope returned by `/search/repositories`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubSearchResponse {
    /// Total matches on the server (not the page size).
    #[serde(default)]
    pub total_count: u64,
    /// True when GitHub timed out before searching everything.
    #[serde(default)]
    pub incomplete_results: bool,
    /// The current page of repositories.
    #[serde(default)]
    pub items: Vec<GitHubRepository>,
}

/// A repository item in search results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubRepository {
    /// Unique numeric identifier.
    pub id: u64,
    /// `owner/name`.
    pub full_name: String,
    /// Description (may be null).
    #[serde(default)]
    pub description: Option<String>,
    /// Star count.
    #[serde(default)]
    pub stargazers_count: u64,
    /// URL to view the repository in the GitHub UI.
    pub html_url: String,
    /// Primary language (may be null).
    #[serde(default)]
    pub language: Option<String>,
}

impl From<GitHubRepository> for RepositoryCandidate {
    fn from(repo: GitHubRepository) -> Self {
        Self {
            id: repo.id,
            full_name: repo.full_name,
            description: repo.description.filter(|d| !d.trim().is_empty()),
            stars: repo.stargazers_count,
            url: repo.html_url,
            language: repo.language,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_response_deserialization() {
        let json = r#"{
            "total_count": 2,
            "incomplete_results": false,
            "items": [
                {
                    "id": 10270250,
                    "full_name": "facebook/react",
                    "description": "The library for web and native user interfaces.",
                    "stargazers_count": 230000,
                    "html_url": "https://github.com/facebook/react",
                    "language": "JavaScript",
                    "forks_count": 47000
                },
                {
                    "id": 1,
                    "full_name": "acme/bare",
                    "description": null,
                    "stargazers_count": 3,
                    "html_url": "https://github.com/acme/bare",
                    "language": null
                }
            ]
        }"#;
        let response: GitHubSearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.total_count, 2);
        assert_eq!(response.items.len(), 2);
        assert_eq!(response.items[0].stargazers_count, 230_000);
        assert!(response.items[1].description.is_none());
    }

    #[test]
    fn test_empty_description_becomes_none() {
        let repo = GitHubRepository {
            id: 5,
            full_name: "acme/blank".to_string(),
            description: Some("  ".to_string()),
            stargazers_count: 1,
            html_url: "https://github.com/acme/blank".to_string(),
            language: Some("Go".to_string()),
        };
        let candidate = RepositoryCandidate::from(repo);
        assert!(candidate.description.is_none());
        assert_eq!(candidate.language.as_deref(), Some("Go"));
    }

    #[test]
    fn test_missing_items_defaults_to_empty() {
        let response: GitHubSearchResponse = serde_json::from_str(r#"{"total_count": 0}"#).unwrap();
        assert!(response.items.is_empty());
    }
}
