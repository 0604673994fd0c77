//! Null enhanced agent implementation.
//!
//! Used when no agent service is configured but the orchestrator
//! requires an EnhancedRecommender implementation.

use async_trait::async_trait;

use super::enhanced_agent::{AgentRecommendations, EnhancedRecommender};
use crate::domain::errors::AgentError;
use crate::domain::models::UserPreferences;

/// An agent that is never configured.
#[derive(Debug, Clone, Default)]
pub struct NullEnhancedRecommender;

impl NullEnhancedRecommender {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EnhancedRecommender for NullEnhancedRecommender {
    fn name(&self) -> &'static str {
        "null"
    }

    fn is_configured(&self) -> bool {
        false
    }

    async fn get_recommendations(
        &self,
        _query: &str,
        _preferences: Option<&UserPreferences>,
    ) -> Result<AgentRecommendations, AgentError> {
        Err(AgentError::Failed("no enhanced agent configured".to_string()))
    }
}
