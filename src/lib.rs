//! repo-advisor - tiered repository recommendations
//!
//! Resolves a free-text query (plus optional preferences) into at most three
//! ranked repository recommendations. Three tiers are tried in order and the
//! first non-empty answer wins:
//!
//! 1. an optional enhanced agent recommender,
//! 2. repository search followed by a chat-completion ranking,
//! 3. a deterministic star-order heuristic over the search candidates.
//!
//! Provider failures never reach the caller; they only show up in logs.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): models, error taxonomy, port traits
//! - **Adapters** (`adapters`): GitHub search, OpenAI-compatible completion,
//!   HTTP agent, and test mocks
//! - **Service Layer** (`services`): the resolution pipeline
//! - **Infrastructure Layer** (`infrastructure`): configuration and logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```ignore
//! use repo_advisor::{ConfigLoader, RecommendationOrchestrator};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ConfigLoader::load()?;
//!     let orchestrator = RecommendationOrchestrator::from_config(&config)?;
//!     let result = orchestrator.resolve("react state management", None).await;
//!     println!("{:?}", result.names());
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{
    Config, ExperienceLevel, Recommendation, RecommendationSource, RepositoryCandidate,
    ResolutionResult, UserPreferences,
};
pub use domain::ports::{CompletionProvider, EnhancedRecommender, RepositorySearch};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{CallBudget, RecommendationOrchestrator};
