//! Mock collaborators for testing.
//!
//! Each mock returns a scripted outcome, records every call it receives,
//! and can be slowed down to exercise deadlines.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use crate::domain::errors::{AgentError, CompletionError, SearchError};
use crate::domain::models::{
    GenerationParameters, PromptMessage, Recommendation, RepositoryCandidate, UserPreferences,
};
use crate::domain::ports::{
    AgentRecommendations, CompletionProvider, EnhancedRecommender, RepositorySearch, SearchOptions,
};

async fn simulate_latency(delay: Option<Duration>) {
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }
}

/// A recorded search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCall {
    pub query: String,
    pub options: SearchOptions,
}

/// Mock search provider.
#[derive(Clone)]
pub struct MockSearch {
    results: Result<Vec<RepositoryCandidate>, String>,
    delay: Option<Duration>,
    calls: Arc<Mutex<Vec<SearchCall>>>,
}

impl MockSearch {
    /// Always return these candidates.
    pub fn returning(candidates: Vec<RepositoryCandidate>) -> Self {
        Self {
            results: Ok(candidates),
            delay: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Always fail with a transport error.
    pub fn failing(error: impl Into<String>) -> Self {
        Self {
            results: Err(error.into()),
            delay: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Sleep before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// All calls received so far.
    pub async fn calls(&self) -> Vec<SearchCall> {
        self.calls.lock().await.clone()
    }

    pub async fn call_count(&self) -> usize {
        self.calls.lock().await.len()
    }
}

#[async_trait]
impl RepositorySearch for MockSearch {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn search_repos(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<Vec<RepositoryCandidate>, SearchError> {
        self.calls.lock().await.push(SearchCall {
            query: query.to_string(),
            options: options.clone(),
        });
        simulate_latency(self.delay).await;
        self.results.clone().map_err(SearchError::Transport)
    }
}

/// Mock completion provider.
#[derive(Clone)]
pub struct MockCompletion {
    configured: bool,
    response: Result<String, String>,
    delay: Option<Duration>,
    calls: Arc<Mutex<Vec<(Vec<PromptMessage>, GenerationParameters)>>>,
}

impl MockCompletion {
    /// Configured provider answering with `text`.
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            configured: true,
            response: Ok(text.into()),
            delay: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Configured provider whose every call fails.
    pub fn failing(error: impl Into<String>) -> Self {
        Self {
            configured: true,
            response: Err(error.into()),
            delay: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Provider without credentials.
    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            response: Err("not configured".to_string()),
            delay: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Sleep before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Prompts received so far, in call order.
    pub async fn prompts(&self) -> Vec<Vec<PromptMessage>> {
        self.calls.lock().await.iter().map(|(m, _)| m.clone()).collect()
    }

    /// Parameters received so far, in call order.
    pub async fn parameters(&self) -> Vec<GenerationParameters> {
        self.calls.lock().await.iter().map(|(_, p)| *p).collect()
    }

    pub async fn call_count(&self) -> usize {
        self.calls.lock().await.len()
    }
}

#[async_trait]
impl CompletionProvider for MockCompletion {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn complete(
        &self,
        messages: &[PromptMessage],
        parameters: GenerationParameters,
    ) -> Result<String, CompletionError> {
        self.calls.lock().await.push((messages.to_vec(), parameters));
        simulate_latency(self.delay).await;
        self.response.clone().map_err(CompletionError::Transport)
    }
}

/// Mock enhanced agent.
#[derive(Clone)]
pub struct MockAgent {
    configured: bool,
    outcome: Result<Vec<Recommendation>, String>,
    delay: Option<Duration>,
    calls: Arc<Mutex<Vec<(String, Option<UserPreferences>)>>>,
}

impl MockAgent {
    /// Configured agent answering with `recommendations`.
    pub fn recommending(recommendations: Vec<Recommendation>) -> Self {
        Self {
            configured: true,
            outcome: Ok(recommendations),
            delay: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Configured agent whose every call fails.
    pub fn failing(error: impl Into<String>) -> Self {
        Self {
            configured: true,
            outcome: Err(error.into()),
            delay: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Agent that reports itself as not configured.
    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            outcome: Err("not configured".to_string()),
            delay: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Sleep before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub async fn call_count(&self) -> usize {
        self.calls.lock().await.len()
    }
}

#[async_trait]
impl EnhancedRecommender for MockAgent {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn get_recommendations(
        &self,
        query: &str,
        preferences: Option<&UserPreferences>,
    ) -> Result<AgentRecommendations, AgentError> {
        self.calls
            .lock()
            .await
            .push((query.to_string(), preferences.cloned()));
        simulate_latency(self.delay).await;
        self.outcome
            .clone()
            .map(|recommendations| AgentRecommendations { recommendations })
            .map_err(AgentError::Failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_search_records_calls() {
        let search = MockSearch::returning(vec![RepositoryCandidate::new(
            1,
            "a/b",
            1,
            "https://github.com/a/b",
        )]);
        let options = SearchOptions::popular(Some("rust".to_string()));
        let found = search.search_repos("cli", &options).await.unwrap();

        assert_eq!(found.len(), 1);
        let calls = search.calls().await;
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].query, "cli");
        assert_eq!(calls[0].options, options);
    }

    #[tokio::test]
    async fn test_mock_completion_failure() {
        let completion = MockCompletion::failing("boom");
        let result = completion
            .complete(&[PromptMessage::user("x")], GenerationParameters::RECOMMENDATION)
            .await;
        assert!(matches!(result, Err(CompletionError::Transport(msg)) if msg == "boom"));
        assert_eq!(completion.call_count().await, 1);
    }

    #[tokio::test]
    async fn test_mock_agent_unconfigured() {
        let agent = MockAgent::unconfigured();
        assert!(!agent.is_configured());
        assert_eq!(agent.call_count().await, 0);
    }
}
