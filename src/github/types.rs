//! Gist records and upstream error definitions.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// A single public gist as returned by the GitHub API.
///
/// Upstream objects carry many more fields; everything not modelled here is
/// ignored during deserialization. Records are transient, built per request
/// and discarded once the response is written.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Gist {
    /// Gist identifier.
    pub id: String,

    /// Free-form description. The API sends `null` for gists without one;
    /// that is normalized to an empty string.
    #[serde(default, deserialize_with = "null_as_empty_string")]
    pub description: String,

    /// API URL of the gist.
    pub url: String,

    /// Files in the gist, keyed by filename.
    pub files: HashMap<String, GistFile>,
}

/// Per-file metadata within a gist.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GistFile {
    pub filename: String,
}

fn null_as_empty_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// Errors that can occur while fetching gists from the upstream API.
///
/// All variants are terminal for the current request; the fetcher never
/// retries. The router maps each variant to an HTTP status and a JSON
/// error envelope.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Upstream returned 404 for the username.
    #[error("GitHub user not found: {0}")]
    UserNotFound(String),

    /// Upstream returned 429.
    #[error("GitHub API rate limit exceeded.")]
    RateLimited,

    /// Upstream returned any other non-200 status.
    #[error("GitHub API error: {status} - {body}")]
    Upstream { status: u16, body: String },

    /// The request never produced an HTTP response (connection refused,
    /// timeout, reset).
    #[error("GitHub API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Upstream returned 200 but the body was not a JSON array of gists.
    #[error("malformed gist payload from GitHub: {0}")]
    Parse(#[source] serde_json::Error),
}

/// Result type for fetcher operations.
pub type FetchResult<T> = Result<T, FetchError>;
