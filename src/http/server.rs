//! HTTP server setup and request routing.
//!
//! # Responsibilities
//! - Create the Axum Router with the liveness and gists handlers
//! - Wire up request tracing middleware
//! - Dispatch path captures to the gist fetcher
//! - Map fetch outcomes to HTTP status codes and JSON bodies
//!
//! # Design Decisions
//! - Handlers are registered for any method; the reference behavior does
//!   not distinguish by method, GET semantics apply throughout
//! - The wildcard capture passes embedded slashes through to the fetcher
//!   verbatim; usernames are not validated here

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::any,
    Json, Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::github::types::FetchResult;
use crate::github::{FetchError, Gist, GistFetcher};
use crate::http::response::{error_response, message_response};

/// Guidance returned for requests to the bare root path.
const ROOT_GUIDANCE: &str = "Please specify a GitHub username, e.g., /octocat";

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<GistFetcher>,
}

/// HTTP server for the gist proxy.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server around the given fetcher.
    pub fn new(fetcher: GistFetcher) -> Self {
        let state = AppState {
            fetcher: Arc::new(fetcher),
        };
        Self {
            router: Self::build_router(state),
        }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/health", any(health_handler))
            .route("/", any(root_handler))
            .route("/{*username}", any(gists_handler))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Liveness probe. Never touches the upstream.
async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Bare root path carries no username to look up.
async fn root_handler() -> Response {
    message_response(StatusCode::BAD_REQUEST, ROOT_GUIDANCE)
}

/// Catch-all: the remainder of the path is the username.
async fn gists_handler(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Response {
    let outcome = state.fetcher.fetch(&username).await;
    fetch_response(&username, outcome)
}

/// Map a fetch outcome to the client-facing status and JSON body.
fn fetch_response(username: &str, outcome: FetchResult<Vec<Gist>>) -> Response {
    match outcome {
        Ok(gists) => (StatusCode::OK, Json(gists)).into_response(),
        Err(err @ FetchError::UserNotFound(_)) => {
            error_response(StatusCode::NOT_FOUND, &err.to_string())
        }
        Err(err @ FetchError::RateLimited) => {
            error_response(StatusCode::TOO_MANY_REQUESTS, &err.to_string())
        }
        // Generic upstream errors, transport failures, and malformed
        // payloads all degrade to 500.
        Err(err) => {
            tracing::error!(username = %username, error = %err, "Failed to fetch gists");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                &format!("Internal Server Error: {err}"),
            )
        }
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
