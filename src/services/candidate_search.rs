//! Candidate search: query + preferences -> bounded repository candidates.
//!
//! Search failures never propagate. A provider error, an interrupted call,
//! or an empty page all come back as an empty candidate list.

use std::sync::Arc;

use super::call_budget::CallBudget;
use crate::domain::models::{RepositoryCandidate, UserPreferences};
use crate::domain::ports::{RepositorySearch, SearchOptions};

/// Language names recognised in query text, paired with the search
/// qualifier they map to. Matching is a case-insensitive substring test in
/// table order, so names that contain other names come first.
pub const KNOWN_LANGUAGES: &[(&str, &str)] = &[
    ("typescript", "typescript"),
    ("javascript", "javascript"),
    ("python", "python"),
    ("kotlin", "kotlin"),
    ("java", "java"),
    ("golang", "go"),
    ("rust", "rust"),
    ("ruby", "ruby"),
    ("php", "php"),
    ("swift", "swift"),
    ("c++", "c++"),
    ("c#", "c#"),
    ("elixir", "elixir"),
    ("haskell", "haskell"),
];

/// Derive the language filter for a search.
///
/// The query text wins; otherwise the first tech-stack entry; otherwise none.
pub fn detect_language(query: &str, preferences: Option<&UserPreferences>) -> Option<String> {
    let lowered = query.to_lowercase();
    KNOWN_LANGUAGES
        .iter()
        .find(|(needle, _)| lowered.contains(needle))
        .map(|(_, qualifier)| (*qualifier).to_string())
        .or_else(|| {
            preferences
                .and_then(UserPreferences::primary_stack_entry)
                .map(str::to_string)
        })
}

/// Search adapter that never fails.
#[derive(Clone)]
pub struct CandidateSearch {
    provider: Arc<dyn RepositorySearch>,
}

impl CandidateSearch {
    pub fn new(provider: Arc<dyn RepositorySearch>) -> Self {
        Self { provider }
    }

    /// Find candidates with no deadline.
    pub async fn find_candidates(
        &self,
        query: &str,
        preferences: Option<&UserPreferences>,
    ) -> Vec<RepositoryCandidate> {
        self.find_candidates_within(query, preferences, &CallBudget::unbounded())
            .await
    }

    /// Find candidates, most-starred first, under a call budget.
    pub async fn find_candidates_within(
        &self,
        query: &str,
        preferences: Option<&UserPreferences>,
        budget: &CallBudget,
    ) -> Vec<RepositoryCandidate> {
        let options = SearchOptions::popular(detect_language(query, preferences));
        tracing::debug!(provider = self.provider.name(), %options, "searching candidates");

        match budget
            .run("search", self.provider.search_repos(query, &options))
            .await
        {
            Ok(mut candidates) => {
                candidates.truncate(options.per_page as usize);
                if candidates.is_empty() {
                    tracing::info!(query, "search returned no candidates");
                }
                candidates
            }
            Err(err) => {
                tracing::warn!(error = %err, "candidate search failed, continuing without candidates");
                Vec::new()
            }
        }
    }
}
