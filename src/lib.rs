pub mod config;
pub mod error;
pub mod fetcher;
pub mod github;
pub mod logger;
pub mod snapshot;
pub mod stats;

pub use error::{Result, StatsError};
pub use fetcher::StatsFetcher;
pub use github::GithubClient;
pub use stats::{StatsSnapshot, TopRepo};
