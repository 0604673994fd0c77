//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::commands::config::ConfigArgs;
use super::commands::recommend::RecommendArgs;

#[derive(Parser, Debug)]
#[command(name = "repo-advisor")]
#[command(about = "Recommend open-source repositories for what you want to build", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Read configuration from this file instead of .repo-advisor/
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Recommend up to three repositories for a query
    Recommend(RecommendArgs),

    /// Inspect the effective configuration
    Config(ConfigArgs),
}
