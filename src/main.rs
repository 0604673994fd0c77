//! repo-advisor CLI entry point.

use anyhow::Result;
use clap::Parser;

use repo_advisor::cli::{commands, handle_error, Cli, Commands};
use repo_advisor::infrastructure::config::ConfigLoader;
use repo_advisor::infrastructure::logging::{verbosity_level, LoggerImpl};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;

    if let Err(err) = run(cli).await {
        handle_error(err, json_mode);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };
    let _logger = LoggerImpl::init(&config.logging, verbosity_level(cli.verbose))?;

    match cli.command {
        Commands::Recommend(args) => commands::recommend::execute(args, &config, cli.json).await,
        Commands::Config(args) => commands::config::execute(args, &config, cli.json).await,
    }
}
