//! Configuration schema definitions.
//!
//! All types derive Serde traits and carry defaults so a bare
//! `ProxyConfig::default()` is a runnable configuration.

use serde::{Deserialize, Serialize};

/// Default listen port, used when no (or an unparsable) port argument is given.
pub const DEFAULT_PORT: u16 = 8080;

/// Root configuration for the gist proxy.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ProxyConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Upstream GitHub API settings.
    pub github: GithubConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: format!("0.0.0.0:{DEFAULT_PORT}"),
        }
    }
}

/// Upstream GitHub API configuration.
///
/// The base URL is configurable so tests can point the fetcher at a local
/// mock upstream instead of the real API.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GithubConfig {
    /// Base URL of the GitHub REST API, without a trailing slash.
    pub api_base_url: String,

    /// User-Agent sent on upstream requests (the GitHub API rejects
    /// requests without one).
    pub user_agent: String,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.github.com".to_string(),
            user_agent: concat!("gist-proxy/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}
