//! Completion invocation with the fixed recommendation parameters.

use std::sync::Arc;

use super::call_budget::CallBudget;
use crate::domain::errors::{CompletionError, ResolutionOutcome};
use crate::domain::models::{GenerationParameters, PromptMessage};
use crate::domain::ports::CompletionProvider;

/// Sends prompts to a completion provider and returns the raw reply text.
#[derive(Clone)]
pub struct CompletionInvoker {
    provider: Arc<dyn CompletionProvider>,
    parameters: GenerationParameters,
}

impl CompletionInvoker {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            provider,
            parameters: GenerationParameters::RECOMMENDATION,
        }
    }

    /// Whether the provider has credentials. Unconfigured providers are
    /// skipped by the orchestrator without being called.
    pub fn is_configured(&self) -> bool {
        self.provider.is_configured()
    }

    pub fn parameters(&self) -> GenerationParameters {
        self.parameters
    }

    /// One completion call, no deadline.
    pub async fn complete(&self, messages: &[PromptMessage]) -> Result<String, CompletionError> {
        tracing::debug!(
            provider = self.provider.name(),
            messages = messages.len(),
            temperature = self.parameters.temperature,
            max_tokens = self.parameters.max_tokens,
            "requesting completion"
        );
        let text = self.provider.complete(messages, self.parameters).await?;
        tracing::debug!(chars = text.len(), "completion received");
        Ok(text)
    }

    /// One completion call under a budget.
    pub async fn complete_within(
        &self,
        messages: &[PromptMessage],
        budget: &CallBudget,
    ) -> ResolutionOutcome<String> {
        budget.run("completion", self.complete(messages)).await
    }
}
