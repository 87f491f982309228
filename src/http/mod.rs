//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound request
//!     → server.rs (Axum setup, path dispatch)
//!     → /health    → liveness response
//!     → /          → guidance response
//!     → /{user}    → github::client fetch → outcome mapping
//!     → response.rs (JSON envelopes)
//!     → Send to client
//! ```

pub mod response;
pub mod server;

pub use server::HttpServer;
