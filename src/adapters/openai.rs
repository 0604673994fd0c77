//! OpenAI-compatible chat completion adapter.
//!
//! Sends a single non-streaming request to `{base_url}/chat/completions`
//! and returns the content of the first choice. Compatible with any
//! OpenAI-compatible API (Azure OpenAI, OpenRouter, local servers).

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use crate::domain::errors::CompletionError;
use crate::domain::models::{CompletionConfig, GenerationParameters, PromptMessage};
use crate::domain::ports::CompletionProvider;

/// OpenAI-compatible completion provider.
pub struct OpenAiCompletionClient {
    config: CompletionConfig,
    client: Arc<reqwest::Client>,
}

impl OpenAiCompletionClient {
    pub fn new(config: CompletionConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build completion HTTP client")?;
        Ok(Self {
            config,
            client: Arc::new(client),
        })
    }

    fn api_key(&self) -> Result<&str, CompletionError> {
        self.config
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or(CompletionError::NotConfigured)
    }
}

#[async_trait]
impl CompletionProvider for OpenAiCompletionClient {
    fn name(&self) -> &'static str {
        "openai"
    }

    fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    async fn complete(
        &self,
        messages: &[PromptMessage],
        parameters: GenerationParameters,
    ) -> Result<String, CompletionError> {
        let api_key = self.api_key()?;
        let url = format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'));

        let request_body = ChatCompletionRequest {
            model: &self.config.model,
            messages,
            temperature: parameters.temperature,
            max_tokens: parameters.max_tokens,
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {api_key}"))
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| CompletionError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unable to read response body".to_string());
            return Err(CompletionError::from_status(status, body));
        }

        let result: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::MalformedResponse(e.to_string()))?;

        result
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| CompletionError::MalformedResponse("no choices in response".to_string()))
    }
}

// -- OpenAI API request/response types --

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [PromptMessage],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let messages = vec![PromptMessage::system("sys"), PromptMessage::user("hi")];
        let body = ChatCompletionRequest {
            model: "gpt-4o-mini",
            messages: &messages,
            temperature: 0.7,
            max_tokens: 1000,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["max_tokens"], 1000);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "hi");
        assert!((json["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_is_configured_follows_api_key() {
        let client = OpenAiCompletionClient::new(CompletionConfig::default()).unwrap();
        assert!(!client.is_configured());

        let client = OpenAiCompletionClient::new(CompletionConfig {
            api_key: Some("sk-test".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert!(client.is_configured());
    }

    #[tokio::test]
    async fn test_complete_without_key_fails_fast() {
        let client = OpenAiCompletionClient::new(CompletionConfig::default()).unwrap();
        let result = client
            .complete(&[PromptMessage::user("hi")], GenerationParameters::RECOMMENDATION)
            .await;
        assert!(matches!(result, Err(CompletionError::NotConfigured)));
    }

    #[test]
    fn test_response_with_null_content_parses() {
        let json = r#"{"choices": [{"index": 0, "message": {"role": "assistant", "content": null}}]}"#;
        let parsed: ChatCompletionResponse = serde_json::from_str(json).unwrap();
        assert!(parsed.choices[0].message.content.is_none());
    }
}
