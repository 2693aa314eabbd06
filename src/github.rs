use crate::error::{Result, StatsError};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Only the first page is ever requested.
pub const REPOS_PER_PAGE: u32 = 100;

/// Profile fields read from `GET /users/{username}`.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub public_repos: u64,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
    /// Not part of the REST profile payload, so this stays 0 in practice.
    #[serde(default)]
    pub contributions: u64,
}

/// One entry of `GET /users/{username}/repos`.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoSummary {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    pub language: Option<String>,
    pub html_url: Option<String>,
}

#[derive(Clone)]
pub struct GithubClient {
    http: Client,
    api_base: String,
}

impl GithubClient {
    /// Create a REST client. The token, when present and non-empty, is sent as
    /// `Authorization: token <value>`.
    pub fn new(token: Option<&str>, api_base: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github.v3+json"),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("github-stats"));

        if let Some(token) = token.filter(|t| !t.is_empty()) {
            let mut value = HeaderValue::from_str(&format!("token {token}"))
                .map_err(|_| StatsError::InvalidToken)?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            http,
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }

    #[cfg(test)]
    fn api_base(&self) -> &str {
        &self.api_base
    }

    /// GET a JSON document, failing with `Upstream` on anything but 200.
    async fn get_json<T: DeserializeOwned>(
        &self,
        resource: &'static str,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        tracing::debug!(%url, "GET {resource}");

        let resp = self.http.get(url).query(query).send().await?;
        let status = resp.status();
        if status != StatusCode::OK {
            return Err(StatsError::Upstream { resource, status });
        }

        // parse failures surface as StatsError::Serialization
        let body = resp.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetch the public profile of `username`.
    pub async fn user(&self, username: &str) -> Result<UserProfile> {
        let url = format!("{}/users/{username}", self.api_base);
        self.get_json("user data", &url, &[]).await
    }

    /// First page (up to 100 entries) of the repositories owned by `username`.
    pub async fn repos(&self, username: &str) -> Result<Vec<RepoSummary>> {
        let url = format!("{}/users/{username}/repos", self.api_base);
        self.get_json(
            "repositories",
            &url,
            &[("per_page", REPOS_PER_PAGE.to_string())],
        )
        .await
    }
}
