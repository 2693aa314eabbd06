use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    /// The provider answered, but not with 200 OK.
    #[error("GitHub API returned HTTP {status} for {resource}")]
    Upstream {
        resource: &'static str,
        status: StatusCode,
    },

    #[error("Network error talking to GitHub: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("GITHUB_TOKEN is not a valid header value")]
    InvalidToken,
}

pub type Result<T> = std::result::Result<T, StatsError>;
