//! GitHub Gist Proxy Library

pub mod config;
pub mod github;
pub mod http;

pub use config::ProxyConfig;
pub use github::GistFetcher;
pub use http::HttpServer;
