//! Adapters for the external collaborators.
//!
//! Each adapter implements one port trait from [`crate::domain::ports`]:
//! - `github`: repository search over the GitHub REST API
//! - `openai`: chat completion over any OpenAI-compatible API
//! - `agent`: the enhanced agent recommender over HTTP
//! - `mock`: scripted collaborators for tests

pub mod agent;
pub mod github;
pub mod mock;
pub mod openai;

pub use agent::HttpEnhancedRecommender;
pub use github::GitHubSearchClient;
pub use openai::OpenAiCompletionClient;
