//! Upstream gist fetcher.
//!
//! # Responsibilities
//! - Issue one GET per request to the gists endpoint
//! - Classify the upstream HTTP status into the error taxonomy
//! - Deserialize the gist array on success
//!
//! # Design Decisions
//! - The reqwest client is injected, not a global; tests substitute a
//!   local mock upstream via the configured base URL
//! - No retries, no backoff, no timeout override beyond the client
//!   defaults; every failure is terminal for the current request
//! - The username is appended to the URL verbatim, without
//!   percent-encoding. Usernames containing reserved URL characters
//!   produce malformed upstream requests; known limitation.

use crate::config::GithubConfig;
use crate::github::types::{FetchError, FetchResult, Gist};

/// Accept header value for the GitHub REST API.
const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// Fetches a user's public gists from the GitHub API.
#[derive(Debug, Clone)]
pub struct GistFetcher {
    client: reqwest::Client,
    config: GithubConfig,
}

impl GistFetcher {
    /// Create a fetcher from an explicitly constructed client.
    pub fn new(client: reqwest::Client, config: GithubConfig) -> Self {
        Self { client, config }
    }

    /// Build a fetcher with a fresh client configured from `config`.
    pub fn from_config(config: GithubConfig) -> FetchResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self::new(client, config))
    }

    /// Fetch all public gists for `username`.
    ///
    /// An empty array from upstream is a valid, empty result.
    pub async fn fetch(&self, username: &str) -> FetchResult<Vec<Gist>> {
        let url = format!("{}/users/{}/gists", self.config.api_base_url, username);

        tracing::debug!(username = %username, url = %url, "Fetching gists");

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, GITHUB_ACCEPT)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        classify_response(status, &body, username)
    }
}

/// Map an upstream status/body pair to the fetch outcome.
///
/// Pure so the status dispatch is testable without a network.
fn classify_response(status: u16, body: &str, username: &str) -> FetchResult<Vec<Gist>> {
    match status {
        200 => serde_json::from_str(body).map_err(FetchError::Parse),
        404 => Err(FetchError::UserNotFound(username.to_string())),
        429 => Err(FetchError::RateLimited),
        _ => Err(FetchError::Upstream {
            status,
            body: body.to_string(),
        }),
    }
}
