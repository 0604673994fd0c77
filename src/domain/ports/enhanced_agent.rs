//! Enhanced agent recommender port.
//!
//! The enhanced agent is a richer, externally managed recommender that is
//! consulted before the search-and-complete pipeline. Only its contract
//! lives here.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::errors::AgentError;
use crate::domain::models::{Recommendation, UserPreferences};

/// Payload returned by the enhanced agent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentRecommendations {
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

/// The enhanced agent capability.
#[async_trait]
pub trait EnhancedRecommender: Send + Sync {
    /// Recommender name (e.g., "http", "null", "mock").
    fn name(&self) -> &'static str;

    /// Whether the agent can be called at all.
    fn is_configured(&self) -> bool;

    /// Ask the agent for recommendations.
    async fn get_recommendations(
        &self,
        query: &str,
        preferences: Option<&UserPreferences>,
    ) -> Result<AgentRecommendations, AgentError>;
}
