//! Text completion port.

use async_trait::async_trait;

use crate::domain::errors::CompletionError;
use crate::domain::models::{GenerationParameters, PromptMessage};

/// A chat-style text completion provider.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Provider name (e.g., "openai", "mock").
    fn name(&self) -> &'static str;

    /// Whether credentials are present. Unconfigured providers are never called.
    fn is_configured(&self) -> bool;

    /// Send the ordered messages and return the text of the first choice.
    async fn complete(
        &self,
        messages: &[PromptMessage],
        parameters: GenerationParameters,
    ) -> Result<String, CompletionError>;
}
