//! GitHub repository search client.
//!
//! Wraps the `/search/repositories` endpoint of the GitHub REST API v3.
//! A token is optional: unauthenticated requests work with a lower quota.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::models::GitHubSearchResponse;
use crate::domain::errors::SearchError;
use crate::domain::models::{RepositoryCandidate, SearchConfig};
use crate::domain::ports::{RepositorySearch, SearchOptions};

/// HTTP client for GitHub repository search.
#[derive(Clone)]
pub struct GitHubSearchClient {
    /// The underlying HTTP client.
    http: Client,
    /// API base URL (overridable for tests and GitHub Enterprise).
    base_url: String,
    /// Personal access token or fine-grained token.
    token: Option<String>,
}

impl std::fmt::Debug for GitHubSearchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubSearchClient")
            .field("base_url", &self.base_url)
            .field("authenticated", &self.token.is_some())
            .finish_non_exhaustive()
    }
}

impl GitHubSearchClient {
    /// Create a client from search configuration.
    pub fn new(config: &SearchConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build GitHub HTTP client")?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone().filter(|t| !t.trim().is_empty()),
        })
    }

    /// Build the `q` parameter, appending a `language:` qualifier when requested.
    pub(crate) fn build_query(query: &str, language: Option<&str>) -> String {
        let query = query.trim();
        match language {
            Some(lang) if lang.contains(char::is_whitespace) => {
                format!("{query} language:\"{lang}\"")
            }
            Some(lang) => format!("{query} language:{lang}"),
            None => query.to_string(),
        }
    }

    fn request(&self, url: &str) -> reqwest::RequestBuilder {
        let req = self
            .http
            .get(url)
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .header("User-Agent", "repo-advisor");
        match &self.token {
            Some(token) => req.header("Authorization", format!("Bearer {token}")),
            None => req,
        }
    }
}

#[async_trait]
impl RepositorySearch for GitHubSearchClient {
    fn name(&self) -> &'static str {
        "github"
    }

    async fn search_repos(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<Vec<RepositoryCandidate>, SearchError> {
        let url = format!("{}/search/repositories", self.base_url);
        let q = Self::build_query(query, options.language.as_deref());
        let per_page = options.per_page.to_string();

        let resp = self
            .request(&url)
            .query(&[
                ("q", q.as_str()),
                ("sort", options.sort.as_str()),
                ("order", options.order.as_str()),
                ("per_page", per_page.as_str()),
            ])
            .send()
            .await
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(SearchError::Http { status, body });
        }

        let body = resp
            .json::<GitHubSearchResponse>()
            .await
            .map_err(|e| SearchError::MalformedResponse(e.to_string()))?;

        if body.incomplete_results {
            tracing::debug!(query = %q, "GitHub returned incomplete search results");
        }

        Ok(body
            .items
            .into_iter()
            .take(options.per_page as usize)
            .map(RepositoryCandidate::from)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_query_without_language() {
        assert_eq!(GitHubSearchClient::build_query("  web framework ", None), "web framework");
    }

    #[test]
    fn test_build_query_with_language() {
        assert_eq!(
            GitHubSearchClient::build_query("web framework", Some("rust")),
            "web framework language:rust"
        );
    }

    #[test]
    fn test_build_query_quotes_multi_word_language() {
        assert_eq!(
            GitHubSearchClient::build_query("notebooks", Some("jupyter notebook")),
            "notebooks language:\"jupyter notebook\""
        );
    }

    #[test]
    fn test_new_strips_trailing_slash_and_blank_token() {
        let config = SearchConfig {
            base_url: "https://ghe.example.com/api/v3/".to_string(),
            token: Some(String::new()),
            timeout_secs: 5,
        };
        let client = GitHubSearchClient::new(&config).unwrap();
        assert_eq!(client.base_url, "https://ghe.example.com/api/v3");
        assert!(client.token.is_none());
    }
}
