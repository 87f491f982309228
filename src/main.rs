//! GitHub Gist Proxy
//!
//! A small HTTP proxy built with Tokio and Axum that exposes a GitHub
//! username's public gists as JSON.
//!
//! # Architecture Overview
//!
//! ```text
//!                     ┌──────────────────────────────────────────┐
//!                     │               GIST PROXY                  │
//!                     │                                           │
//!     GET /health ────┼─▶ http::server ──▶ 200 "OK"               │
//!                     │                                           │
//!     GET /{user} ────┼─▶ http::server ──▶ github::client ────────┼──▶ GitHub API
//!                     │        │                  │               │    /users/{user}/gists
//!     JSON response ◀─┼── http::response ◀── status classify ◀────┼─── upstream status + body
//!                     │                                           │
//!                     │  ┌─────────────────────────────────────┐  │
//!                     │  │       Cross-Cutting Concerns        │  │
//!                     │  │   ┌────────┐   ┌────────────────┐   │  │
//!                     │  │   │ config │   │ tracing (logs) │   │  │
//!                     │  │   └────────┘   └────────────────┘   │  │
//!                     │  └─────────────────────────────────────┘  │
//!                     └──────────────────────────────────────────┘
//! ```

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gist_proxy::config::{ProxyConfig, DEFAULT_PORT};
use gist_proxy::github::GistFetcher;
use gist_proxy::http::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gist_proxy=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("gist-proxy v0.1.0 starting");

    let mut config = ProxyConfig::default();

    // The only runtime input: an optional listen port as the first
    // argument. Anything unparsable falls back to the default.
    if let Some(arg) = std::env::args().nth(1) {
        match arg.parse::<u16>() {
            Ok(port) => config.listener.bind_address = format!("0.0.0.0:{port}"),
            Err(_) => tracing::warn!(
                argument = %arg,
                default_port = DEFAULT_PORT,
                "Invalid port argument, using default port"
            ),
        }
    }

    tracing::info!(
        bind_address = %config.listener.bind_address,
        github_api = %config.github.api_base_url,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(address = %local_addr, "Listening for connections");
    tracing::info!("Access health check at http://localhost:{}/health", local_addr.port());
    tracing::info!("Access gists at http://localhost:{}/<username>", local_addr.port());

    let fetcher = GistFetcher::from_config(config.github.clone())?;
    let server = HttpServer::new(fetcher);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
