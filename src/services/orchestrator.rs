//! Recommendation orchestrator.
//!
//! Resolution walks three tiers and stops at the first that yields a
//! non-empty result:
//!
//! 1. **Enhanced**: the agent recommender, when it reports itself configured.
//! 2. **Completion**: search, prompt, complete, interpret.
//! 3. **Heuristic**: the first three search candidates in star order.
//!
//! Tier failures are logged and swallowed. [`RecommendationOrchestrator::resolve`]
//! always returns a [`ResolutionResult`].

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use super::call_budget::CallBudget;
use super::candidate_search::CandidateSearch;
use super::completion_invoker::CompletionInvoker;
use super::heuristic::fallback_rank;
use super::prompt_builder::build_prompt;
use super::response_interpreter::interpret;
use crate::adapters::{GitHubSearchClient, HttpEnhancedRecommender, OpenAiCompletionClient};
use crate::domain::errors::{ResolutionError, ResolutionOutcome};
use crate::domain::models::{
    Config, Recommendation, RecommendationSource, RepositoryCandidate, ResolutionResult,
    UserPreferences,
};
use crate::domain::ports::{
    CompletionProvider, EnhancedRecommender, NullEnhancedRecommender, RepositorySearch,
};

/// Entry point for resolving a query into at most three recommendations.
#[derive(Clone)]
pub struct RecommendationOrchestrator {
    agent: Arc<dyn EnhancedRecommender>,
    search: CandidateSearch,
    completion: CompletionInvoker,
    default_deadline: Option<Duration>,
}

impl RecommendationOrchestrator {
    pub fn new(
        agent: Arc<dyn EnhancedRecommender>,
        search: Arc<dyn RepositorySearch>,
        completion: Arc<dyn CompletionProvider>,
    ) -> Self {
        Self {
            agent,
            search: CandidateSearch::new(search),
            completion: CompletionInvoker::new(completion),
            default_deadline: None,
        }
    }

    /// Deadline applied by [`resolve`](Self::resolve), measured from the
    /// start of each call.
    pub fn with_default_deadline(mut self, deadline: Option<Duration>) -> Self {
        self.default_deadline = deadline;
        self
    }

    /// Wire the HTTP adapters described by `config`.
    ///
    /// Without an agent base URL the enhanced tier is permanently skipped.
    pub fn from_config(config: &Config) -> Result<Self> {
        let agent: Arc<dyn EnhancedRecommender> = if config.agent.base_url.is_some() {
            Arc::new(HttpEnhancedRecommender::new(&config.agent)?)
        } else {
            Arc::new(NullEnhancedRecommender::new())
        };
        let search = Arc::new(GitHubSearchClient::new(&config.search)?);
        let completion = Arc::new(OpenAiCompletionClient::new(config.completion.clone())?);

        Ok(Self::new(agent, search, completion)
            .with_default_deadline(config.resolution.deadline_secs.map(Duration::from_secs)))
    }

    /// Resolve under the default deadline, if any.
    pub async fn resolve(
        &self,
        query: &str,
        preferences: Option<&UserPreferences>,
    ) -> ResolutionResult {
        let budget = self
            .default_deadline
            .map_or_else(CallBudget::unbounded, CallBudget::with_timeout);
        self.resolve_within(query, preferences, &budget).await
    }

    /// Resolve under a caller-supplied budget.
    ///
    /// An interrupted call fails its tier like any other error, so a spent
    /// budget still ends in the heuristic over whatever candidates were found.
    #[instrument(
        skip(self, preferences, budget),
        fields(resolution_id = %Uuid::new_v4(), has_preferences = preferences.is_some())
    )]
    pub async fn resolve_within(
        &self,
        query: &str,
        preferences: Option<&UserPreferences>,
        budget: &CallBudget,
    ) -> ResolutionResult {
        match self.enhanced_tier(query, preferences, budget).await {
            Ok(recommendations) => {
                return finish(RecommendationSource::Enhanced, recommendations);
            }
            Err(err) => log_tier_failure(RecommendationSource::Enhanced, &err),
        }

        let candidates = self
            .search
            .find_candidates_within(query, preferences, budget)
            .await;

        match self
            .completion_tier(query, &candidates, preferences, budget)
            .await
        {
            Ok(recommendations) => {
                return finish(RecommendationSource::Completion, recommendations);
            }
            Err(err) => log_tier_failure(RecommendationSource::Completion, &err),
        }

        finish(RecommendationSource::Heuristic, fallback_rank(&candidates))
    }

    async fn enhanced_tier(
        &self,
        query: &str,
        preferences: Option<&UserPreferences>,
        budget: &CallBudget,
    ) -> ResolutionOutcome<Vec<Recommendation>> {
        if !self.agent.is_configured() {
            return Err(ResolutionError::AgentNotConfigured);
        }
        debug!(agent = self.agent.name(), "asking enhanced agent");

        let response = budget
            .run("agent", self.agent.get_recommendations(query, preferences))
            .await?;
        if response.recommendations.is_empty() {
            return Err(ResolutionError::AgentEmpty);
        }
        Ok(response.recommendations)
    }

    async fn completion_tier(
        &self,
        query: &str,
        candidates: &[RepositoryCandidate],
        preferences: Option<&UserPreferences>,
        budget: &CallBudget,
    ) -> ResolutionOutcome<Vec<Recommendation>> {
        if candidates.is_empty() {
            return Err(ResolutionError::NoCandidates);
        }
        if !self.completion.is_configured() {
            return Err(ResolutionError::ConfigurationAbsent);
        }

        let prompt = build_prompt(query, candidates, preferences);
        let text = self.completion.complete_within(&prompt, budget).await?;
        let recommendations = interpret(&text, candidates)?;
        if recommendations.is_empty() {
            return Err(ResolutionError::EmptyInterpretation);
        }
        Ok(recommendations)
    }
}

fn finish(source: RecommendationSource, recommendations: Vec<Recommendation>) -> ResolutionResult {
    let result = ResolutionResult::new(source, recommendations);
    info!(source = %result.source, count = result.len(), "resolution complete");
    result
}

fn log_tier_failure(tier: RecommendationSource, err: &ResolutionError) {
    match err {
        ResolutionError::AgentNotConfigured
        | ResolutionError::ConfigurationAbsent
        | ResolutionError::NoCandidates => debug!(%tier, reason = %err, "tier skipped"),
        _ => warn!(%tier, error = %err, "tier failed, falling back"),
    }
}
