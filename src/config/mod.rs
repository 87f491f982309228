//! Configuration management subsystem.
//!
//! # Design Decisions
//! - Config is immutable once constructed; there is no reload path
//! - All fields have defaults so the proxy runs with zero configuration
//! - The only runtime input is the listen port (first process argument)

pub mod schema;

pub use schema::GithubConfig;
pub use schema::ListenerConfig;
pub use schema::ProxyConfig;
pub use schema::DEFAULT_PORT;
