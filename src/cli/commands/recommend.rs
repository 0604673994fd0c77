//! Implementation of the `repo-advisor recommend` command.

use anyhow::{Context, Result};
use clap::Args;
use comfy_table::{presets, Attribute, Cell, CellAlignment, ContentArrangement, Table};
use console::{style, Term};
use serde::Serialize;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use crate::cli::output::{create_spinner, output, truncate, CommandOutput};
use crate::domain::models::{
    Config, ExperienceLevel, Recommendation, RecommendationSource, ResolutionResult,
    UserPreferences,
};
use crate::services::{CallBudget, RecommendationOrchestrator};

#[derive(Args, Debug)]
pub struct RecommendArgs {
    /// What you are looking for, e.g. "react state management"
    pub query: String,

    /// Languages and frameworks you use, most important first
    #[arg(short, long, value_delimiter = ',', value_name = "TECH")]
    pub tech_stack: Vec<String>,

    /// Your experience level (beginner, intermediate, advanced)
    #[arg(short, long)]
    pub experience: Option<ExperienceLevel>,

    /// Topic of interest (repeatable)
    #[arg(short, long = "interest", value_name = "TOPIC")]
    pub interests: Vec<String>,

    /// Overall deadline in seconds, overriding resolution.deadline_secs
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: Option<u64>,
}

impl RecommendArgs {
    /// Preferences, or `None` when no preference flag was given.
    pub fn preferences(&self) -> Option<UserPreferences> {
        if self.tech_stack.is_empty() && self.experience.is_none() && self.interests.is_empty() {
            return None;
        }
        let mut preferences = UserPreferences::new()
            .with_tech_stack(self.tech_stack.iter().map(|s| s.trim().to_string()))
            .with_interests(self.interests.iter().cloned());
        preferences.experience_level = self.experience;
        Some(preferences)
    }

    fn deadline(&self, config: &Config) -> Option<Duration> {
        self.timeout_secs
            .or(config.resolution.deadline_secs)
            .map(Duration::from_secs)
    }
}

#[derive(Debug, Serialize)]
pub struct RecommendOutput {
    pub query: String,
    pub source: RecommendationSource,
    pub recommendations: Vec<Recommendation>,
}

impl RecommendOutput {
    pub fn new(query: impl Into<String>, result: ResolutionResult) -> Self {
        Self {
            query: query.into(),
            source: result.source,
            recommendations: result.recommendations,
        }
    }
}

impl CommandOutput for RecommendOutput {
    fn to_human(&self) -> String {
        let source = match self.source {
            RecommendationSource::Enhanced => style(self.source.to_string()).magenta(),
            RecommendationSource::Completion => style(self.source.to_string()).green(),
            RecommendationSource::Heuristic => style(self.source.to_string()).yellow(),
        };

        if self.recommendations.is_empty() {
            return format!(
                "No repositories found for \"{}\" ({source})",
                self.query
            );
        }

        let mut table = Table::new();
        table
            .load_preset(presets::UTF8_FULL_CONDENSED)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                Cell::new("#").add_attribute(Attribute::Bold),
                Cell::new("Repository").add_attribute(Attribute::Bold),
                Cell::new("Stars").add_attribute(Attribute::Bold),
                Cell::new("Why").add_attribute(Attribute::Bold),
            ]);

        for (rank, rec) in self.recommendations.iter().enumerate() {
            let stars = rec.stars.map_or_else(|| "-".to_string(), |s| s.to_string());
            let mut why = truncate(&rec.reason, 80);
            if !rec.description.is_empty() {
                why = format!("{why}\n{}", truncate(&rec.description, 80));
            }
            table.add_row(vec![
                Cell::new(rank + 1),
                Cell::new(rec.url.as_deref().unwrap_or(&rec.name)),
                Cell::new(stars).set_alignment(CellAlignment::Right),
                Cell::new(why),
            ]);
        }

        format!(
            "Recommendations for \"{}\" (source: {source})\n{table}",
            self.query
        )
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn execute(args: RecommendArgs, config: &Config, json_mode: bool) -> Result<()> {
    let orchestrator = RecommendationOrchestrator::from_config(config)
        .context("Failed to initialize recommendation providers")?;
    let preferences = args.preferences();

    let cancel = CancellationToken::new();
    let mut budget = match args.deadline(config) {
        Some(deadline) => CallBudget::with_timeout(deadline),
        None => CallBudget::unbounded(),
    };
    budget = budget.with_cancellation(cancel.clone());

    let interrupt = tokio::spawn({
        let cancel = cancel.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::warn!("interrupted, finishing with what is available");
                cancel.cancel();
            }
        }
    });

    let spinner = create_spinner(
        format!("Finding repositories for \"{}\"", args.query),
        !json_mode && Term::stderr().is_term(),
    );
    let result = orchestrator
        .resolve_within(&args.query, preferences.as_ref(), &budget)
        .await;
    spinner.finish_and_clear();
    interrupt.abort();

    output(&RecommendOutput::new(args.query, result), json_mode);
    Ok(())
}
