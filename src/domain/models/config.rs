use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Placeholder shown instead of secrets in debug output and `config show`.
pub const REDACTED: &str = "***";

fn redact(secret: Option<&String>) -> Option<&'static str> {
    secret.map(|_| REDACTED)
}

/// Main configuration structure for repo-advisor
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Completion provider (OpenAI-compatible chat endpoint)
    #[serde(default)]
    pub completion: CompletionConfig,

    /// Repository search provider
    #[serde(default)]
    pub search: SearchConfig,

    /// Enhanced agent recommender
    #[serde(default)]
    pub agent: AgentConfig,

    /// Resolution-wide settings
    #[serde(default)]
    pub resolution: ResolutionConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Copy of this configuration with every secret replaced by [`REDACTED`].
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        let mask = |secret: &mut Option<String>| {
            if secret.is_some() {
                *secret = Some(REDACTED.to_string());
            }
        };
        mask(&mut copy.completion.api_key);
        mask(&mut copy.search.token);
        mask(&mut copy.agent.api_key);
        copy
    }
}

/// Completion provider configuration.
///
/// Resolution is AI-capable only when `api_key` holds a non-empty value.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CompletionConfig {
    /// Base URL of the OpenAI-compatible API (without `/chat/completions`)
    #[serde(default = "default_completion_base_url")]
    pub base_url: String,

    /// API key; absent disables the completion tier
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model identifier sent with each request
    #[serde(default = "default_completion_model")]
    pub model: String,

    /// Request timeout in seconds
    #[serde(default = "default_completion_timeout")]
    pub timeout_secs: u64,
}

fn default_completion_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_completion_model() -> String {
    "gpt-4o-mini".to_string()
}

const fn default_completion_timeout() -> u64 {
    60
}

impl CompletionConfig {
    /// True when an API key is present and non-blank.
    pub fn is_configured(&self) -> bool {
        self.api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            base_url: default_completion_base_url(),
            api_key: None,
            model: default_completion_model(),
            timeout_secs: default_completion_timeout(),
        }
    }
}

impl fmt::Debug for CompletionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &redact(self.api_key.as_ref()))
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Repository search provider configuration.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SearchConfig {
    /// Base URL of the GitHub REST API
    #[serde(default = "default_search_base_url")]
    pub base_url: String,

    /// Optional token; unauthenticated search works with lower quotas
    #[serde(default)]
    pub token: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_search_timeout")]
    pub timeout_secs: u64,
}

fn default_search_base_url() -> String {
    "https://api.github.com".to_string()
}

const fn default_search_timeout() -> u64 {
    15
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: default_search_base_url(),
            token: None,
            timeout_secs: default_search_timeout(),
        }
    }
}

impl fmt::Debug for SearchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchConfig")
            .field("base_url", &self.base_url)
            .field("token", &redact(self.token.as_ref()))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Enhanced agent configuration. The agent tier is skipped without a base URL.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AgentConfig {
    /// Base URL of the agent service
    #[serde(default)]
    pub base_url: Option<String>,

    /// Optional bearer token for the agent service
    #[serde(default)]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_agent_timeout")]
    pub timeout_secs: u64,
}

const fn default_agent_timeout() -> u64 {
    30
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            timeout_secs: default_agent_timeout(),
        }
    }
}

impl fmt::Debug for AgentConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AgentConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &redact(self.api_key.as_ref()))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Settings applied to every resolution call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ResolutionConfig {
    /// Default overall deadline in seconds; `None` means no deadline
    #[serde(default)]
    pub deadline_secs: Option<u64>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format
    #[serde(default)]
    pub format: LogFormat,

    /// Directory for log files (logs only to stderr when absent)
    #[serde(default)]
    pub log_dir: Option<PathBuf>,

    /// File rotation policy, only used with `log_dir`
    #[serde(default)]
    pub rotation: RotationPolicy,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
            log_dir: None,
            rotation: RotationPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Pretty,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RotationPolicy {
    Daily,
    Hourly,
    #[default]
    Never,
}
