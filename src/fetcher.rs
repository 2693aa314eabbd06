use crate::error::{Result, StatsError};
use crate::github::GithubClient;
use crate::snapshot;
use crate::stats::StatsSnapshot;
use chrono::Local;
use std::path::PathBuf;

/// Fetches profile and repositories for one user and writes the snapshot file.
pub struct StatsFetcher {
    client: GithubClient,
    username: String,
    output_dir: PathBuf,
}

impl StatsFetcher {
    pub fn new(client: GithubClient, username: impl Into<String>, output_dir: PathBuf) -> Self {
        Self {
            client,
            username: username.into(),
            output_dir,
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(snapshot::FILE_NAME)
    }

    /// Run the whole pipeline once.
    ///
    /// Returns `Ok(None)` when GitHub answers either call with a non-200 status;
    /// the status has been printed and nothing was written. Transport and
    /// filesystem failures are returned as errors.
    pub async fn fetch(&self) -> Result<Option<StatsSnapshot>> {
        let profile = match self.client.user(&self.username).await {
            Ok(p) => p,
            Err(e) => return upstream_to_none(e),
        };

        let repos = match self.client.repos(&self.username).await {
            Ok(r) => r,
            Err(e) => return upstream_to_none(e),
        };
        tracing::debug!(
            username = %self.username,
            repos = repos.len(),
            "fetched repositories"
        );

        let stats = StatsSnapshot::aggregate(&profile, &repos, Local::now().naive_local());

        let path = snapshot::write(&self.output_dir, &stats)?;
        tracing::info!(path = %path.display(), "snapshot written");
        println!("GitHub stats saved to {}", path.display());

        Ok(Some(stats))
    }
}

fn upstream_to_none(err: StatsError) -> Result<Option<StatsSnapshot>> {
    match err {
        StatsError::Upstream { resource, status } => {
            tracing::warn!(%status, "GitHub refused {resource} request");
            println!("Error fetching {resource}: {}", status.as_u16());
            Ok(None)
        }
        other => Err(other),
    }
}
