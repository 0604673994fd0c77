//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines async trait interfaces that adapters must implement:
//! - RepositorySearch: code-hosting repository search
//! - CompletionProvider: chat-style text completion
//! - EnhancedRecommender: the optional richer recommender
//!
//! The services layer depends only on these traits, never on a concrete
//! HTTP client.

pub mod completion;
pub mod enhanced_agent;
pub mod null_agent;
pub mod repository_search;

pub use completion::CompletionProvider;
pub use enhanced_agent::{AgentRecommendations, EnhancedRecommender};
pub use null_agent::NullEnhancedRecommender;
pub use repository_search::{RepositorySearch, SearchOptions, SortKey, SortOrder};
