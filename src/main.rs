use anyhow::Context;
use clap::Parser;
use github_stats::config::Config;
use github_stats::{GithubClient, StatsFetcher, logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    logger::init_cli_logger(config.verbose);

    let token = Config::token();
    if token.is_none() {
        tracing::debug!("GITHUB_TOKEN not set, using unauthenticated rate limit");
    }

    let client = GithubClient::new(token.as_deref(), &config.api_base)
        .context("Failed to build GitHub client")?;
    let fetcher = StatsFetcher::new(client, config.username.clone(), config.output_dir());

    // A non-200 from GitHub is reported by the fetcher and is not a process failure.
    if fetcher.fetch().await?.is_none() {
        tracing::info!("no snapshot written");
    }

    Ok(())
}
