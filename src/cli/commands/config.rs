//! Implementation of the `repo-advisor config` commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::Config;

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration with secrets redacted
    Show,
}

#[derive(Debug, Serialize)]
pub struct ConfigShowOutput {
    pub config: Config,
    pub completion_configured: bool,
    pub agent_configured: bool,
}

impl ConfigShowOutput {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.redacted(),
            completion_configured: config.completion.is_configured(),
            agent_configured: config.agent.base_url.is_some(),
        }
    }
}

impl CommandOutput for ConfigShowOutput {
    fn to_human(&self) -> String {
        let yaml = serde_yaml::to_string(&self.config).unwrap_or_default();
        let tier = |on: bool| if on { "enabled" } else { "disabled" };
        format!(
            "{yaml}\n# completion tier: {}\n# enhanced agent tier: {}",
            tier(self.completion_configured),
            tier(self.agent_configured)
        )
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn execute(args: ConfigArgs, config: &Config, json_mode: bool) -> Result<()> {
    match args.command {
        ConfigCommands::Show => output(&ConfigShowOutput::new(config), json_mode),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_never_prints_secrets() {
        let mut config = Config::default();
        config.completion.api_key = Some("sk-very-secret".to_string());
        config.search.token = Some("ghp_secret".to_string());
        let out = ConfigShowOutput::new(&config);

        let human = out.to_human();
        let json = out.to_json().to_string();
        for rendered in [&human, &json] {
            assert!(!rendered.contains("sk-very-secret"));
            assert!(!rendered.contains("ghp_secret"));
        }
        assert!(human.contains("completion tier: enabled"));
        assert!(human.contains("enhanced agent tier: disabled"));
    }
}
