//! HTTP enhanced agent adapter.
//!
//! Posts `{query, preferences}` to `{base_url}/recommendations` and expects
//! `{"recommendations": [...]}` back. Configured only when a base URL is set.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

use crate::domain::errors::AgentError;
use crate::domain::models::{AgentConfig, UserPreferences};
use crate::domain::ports::{AgentRecommendations, EnhancedRecommender};

/// Enhanced agent reached over HTTP.
pub struct HttpEnhancedRecommender {
    http: reqwest::Client,
    base_url: Option<String>,
    api_key: Option<String>,
}

impl HttpEnhancedRecommender {
    pub fn new(config: &AgentConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build agent HTTP client")?;
        Ok(Self {
            http,
            base_url: config
                .base_url
                .as_deref()
                .map(str::trim)
                .filter(|url| !url.is_empty())
                .map(|url| url.trim_end_matches('/').to_string()),
            api_key: config.api_key.clone(),
        })
    }
}

#[derive(Serialize)]
struct AgentRequest<'a> {
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    preferences: Option<&'a UserPreferences>,
}

#[async_trait]
impl EnhancedRecommender for HttpEnhancedRecommender {
    fn name(&self) -> &'static str {
        "http"
    }

    fn is_configured(&self) -> bool {
        self.base_url.is_some()
    }

    async fn get_recommendations(
        &self,
        query: &str,
        preferences: Option<&UserPreferences>,
    ) -> Result<AgentRecommendations, AgentError> {
        let base_url = self
            .base_url
            .as_deref()
            .ok_or_else(|| AgentError::Failed("agent base_url not configured".to_string()))?;
        let url = format!("{base_url}/recommendations");

        let mut req = self.http.post(&url).json(&AgentRequest { query, preferences });
        if let Some(key) = &self.api_key {
            req = req.header("Authorization", format!("Bearer {key}"));
        }

        let resp = req
            .send()
            .await
            .map_err(|e| AgentError::Transport(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(AgentError::Http { status, body });
        }

        resp.json::<AgentRecommendations>()
            .await
            .map_err(|e| AgentError::MalformedResponse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_base_url_is_unconfigured() {
        let agent = HttpEnhancedRecommender::new(&AgentConfig {
            base_url: Some("  ".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert!(!agent.is_configured());
    }

    #[test]
    fn test_request_omits_missing_preferences() {
        let json = serde_json::to_value(AgentRequest {
            query: "cli parsers",
            preferences: None,
        })
        .unwrap();
        assert_eq!(json["query"], "cli parsers");
        assert!(json.get("preferences").is_none());
    }
}
