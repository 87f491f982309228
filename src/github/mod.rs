//! GitHub upstream integration subsystem.
//!
//! # Data Flow
//! ```text
//! username (from router)
//!     → client.rs (GET {base}/users/{username}/gists)
//!     → status classification (200 / 404 / 429 / other / transport)
//!     → types.rs (Vec<Gist> or FetchError)
//! ```
//!
//! # Design Decisions
//! - One upstream call per inbound request; no caching or memoization
//! - Errors are classified here, mapped to HTTP responses by the router

pub mod client;
pub mod types;

pub use client::GistFetcher;
pub use types::{FetchError, Gist, GistFile};
