use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use std::path::Path;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Project configuration file, created by the user.
pub const PROJECT_CONFIG: &str = ".repo-advisor/config.yaml";
/// Optional local overrides, usually git-ignored.
pub const LOCAL_CONFIG: &str = ".repo-advisor/local.yaml";
/// Prefix of environment overrides; nested keys are split on `__`.
pub const ENV_PREFIX: &str = "REPO_ADVISOR_";

/// Conventional variables consulted when no key is configured.
pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const GITHUB_TOKEN_VAR: &str = "GITHUB_TOKEN";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("{0} base URL cannot be empty")]
    EmptyBaseUrl(&'static str),

    #[error("{0} base URL must start with http:// or https://, got '{1}'")]
    InvalidBaseUrl(&'static str, String),

    #[error("Completion model cannot be empty")]
    EmptyModel,

    #[error("Invalid {0} timeout: must be at least 1 second")]
    ZeroTimeout(&'static str),

    #[error("Invalid resolution deadline: must be at least 1 second")]
    ZeroDeadline,
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .repo-advisor/config.yaml
    /// 3. .repo-advisor/local.yaml
    /// 4. Environment variables (REPO_ADVISOR_* prefix)
    ///
    /// `OPENAI_API_KEY` and `GITHUB_TOKEN` fill credentials still unset
    /// after merging.
    pub fn load() -> Result<Config> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(PROJECT_CONFIG))
            .merge(Yaml::file(LOCAL_CONFIG))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        Self::finish(figment).context("Failed to load configuration")
    }

    /// Load configuration from a specific file, still honouring env overrides
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        if !path.exists() {
            anyhow::bail!("Config file not found: {}", path.display());
        }

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        Self::finish(figment).with_context(|| format!("Failed to load config from {}", path.display()))
    }

    fn finish(figment: Figment) -> Result<Config> {
        let mut config: Config = figment
            .extract()
            .context("Failed to extract configuration from figment")?;
        Self::apply_credential_fallbacks(&mut config);
        Self::validate(&config)?;
        Ok(config)
    }

    /// Fill unset credentials from the conventional environment variables.
    pub fn apply_credential_fallbacks(config: &mut Config) {
        fill_from_env(&mut config.completion.api_key, OPENAI_API_KEY_VAR);
        fill_from_env(&mut config.search.token, GITHUB_TOKEN_VAR);
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        validate_base_url("completion", &config.completion.base_url)?;
        validate_base_url("search", &config.search.base_url)?;
        if let Some(agent_url) = &config.agent.base_url {
            validate_base_url("agent", agent_url)?;
        }

        if config.completion.model.trim().is_empty() {
            return Err(ConfigError::EmptyModel);
        }

        for (name, secs) in [
            ("completion", config.completion.timeout_secs),
            ("search", config.search.timeout_secs),
            ("agent", config.agent.timeout_secs),
        ] {
            if secs == 0 {
                return Err(ConfigError::ZeroTimeout(name));
            }
        }

        if config.resolution.deadline_secs == Some(0) {
            return Err(ConfigError::ZeroDeadline);
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        Ok(())
    }
}

fn fill_from_env(slot: &mut Option<String>, var: &str) {
    let unset = slot.as_deref().is_none_or(|s| s.trim().is_empty());
    if unset {
        if let Some(value) = std::env::var(var).ok().filter(|v| !v.trim().is_empty()) {
            *slot = Some(value);
        }
    }
}

fn validate_base_url(name: &'static str, url: &str) -> Result<(), ConfigError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(ConfigError::EmptyBaseUrl(name));
    }
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ConfigError::InvalidBaseUrl(name, url.to_string()));
    }
    Ok(())
}
