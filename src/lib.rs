//! Linkscout: a bounded, concurrent site link crawler
//!
//! Given a seed URL, this crate discovers and classifies reachable links
//! (internal vs. external to the seed's domain) up to a configurable URL
//! budget and depth limit, while respecting per-host robots.txt policy.

pub mod config;
pub mod crawler;
pub mod output;
pub mod registry;
pub mod robots;
pub mod url;

use thiserror::Error;

/// Main error type for linkscout operations
///
/// The crawl itself has no fatal error class: per-page transport failures,
/// unreachable robots.txt, and malformed hrefs are all soft outcomes handled
/// inside the worker loop. These variants cover the construction-time seams
/// (configuration, HTTP client build) and the shutdown path.
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Worker task failed: {0}")]
    Worker(#[from] tokio::task::JoinError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid seed URL '{url}': {reason}")]
    InvalidSeed { url: String, reason: String },

    #[error("Seed URL '{0}' has no host")]
    MissingHost(String),

    #[error("Worker count must be at least 1")]
    NoWorkers,
}

/// A single page fetch failure
///
/// Always non-fatal: scoped to the one fetch attempt that triggered it and
/// reported as "zero links discovered from this page".
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP status {0}")]
    Status(u16),

    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

/// Result type alias for linkscout operations
pub type Result<T> = std::result::Result<T, CrawlError>;

// Re-export commonly used types
pub use config::CrawlConfig;
pub use crawler::{crawl, CrawlReport};
pub use registry::VisitedRegistry;
pub use url::{classify, resolve_href, LinkClass};
