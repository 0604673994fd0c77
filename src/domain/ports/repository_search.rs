//! Repository search port.
//!
//! Defines the contract for code-hosting search providers that turn a
//! free-text query into repository records.

use async_trait::async_trait;
use std::fmt;

use crate::domain::errors::SearchError;
use crate::domain::models::RepositoryCandidate;

/// Field the provider should sort results by.
///
/// Candidate search only ever ranks by popularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Stars,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stars => "stars",
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Desc => "desc",
        }
    }
}

/// Options accompanying a search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    /// Restrict results to a primary language.
    pub language: Option<String>,
    pub sort: SortKey,
    pub order: SortOrder,
    /// Maximum number of records to return.
    pub per_page: u32,
}

impl SearchOptions {
    /// Most-starred first, ten results.
    pub fn popular(language: Option<String>) -> Self {
        Self {
            language,
            sort: SortKey::Stars,
            order: SortOrder::Desc,
            per_page: 10,
        }
    }
}

impl fmt::Display for SearchOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sort={} order={} per_page={} language={}",
            self.sort.as_str(),
            self.order.as_str(),
            self.per_page,
            self.language.as_deref().unwrap_or("-")
        )
    }
}

/// A code-hosting search provider.
///
/// Implementations hold no per-call state and may be shared across
/// concurrent resolutions.
#[async_trait]
pub trait RepositorySearch: Send + Sync {
    /// Provider name (e.g., "github", "mock").
    fn name(&self) -> &'static str;

    /// Search repositories matching `query`.
    async fn search_repos(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<Vec<RepositoryCandidate>, SearchError>;
}
