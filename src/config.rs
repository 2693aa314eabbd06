use crate::github::DEFAULT_API_BASE;
use crate::snapshot;
use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_USERNAME: &str = "pratikkajare";
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

#[derive(Debug, Clone, Parser)]
#[command(name = "github-stats")]
#[command(about = "Snapshot a GitHub user's public stats into github_stats.json")]
pub struct Config {
    #[arg(long, default_value = DEFAULT_USERNAME)]
    pub username: String,

    /// Directory for github_stats.json [default: <repo>/public/data]
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    #[arg(long, default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Config {
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(snapshot::default_output_dir)
    }

    /// `GITHUB_TOKEN`, treating an empty value as unset.
    pub fn token() -> Option<String> {
        std::env::var(TOKEN_ENV).ok().filter(|t| !t.is_empty())
    }
}
