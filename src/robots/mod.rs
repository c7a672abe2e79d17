//! Robots.txt handling
//!
//! Fetching, parsing, and per-host caching of crawl-exclusion policy.
//! Every failure path here is fail-open: a robots.txt that cannot be
//! fetched or read means "no restriction", never a crawl error.

mod cache;
mod parser;

pub use cache::RobotsCache;
pub use parser::{is_allowed, RobotsPolicy};

use reqwest::Client;
use url::Url;

/// Fetches and parses a robots.txt document
///
/// Returns `None` on any transport failure or non-success status; the
/// caller treats an absent document as allowing everything.
pub async fn fetch_robots(client: &Client, robots_url: &Url) -> Option<RobotsPolicy> {
    let response = match client.get(robots_url.as_str()).send().await {
        Ok(r) => r,
        Err(e) => {
            tracing::debug!("robots.txt fetch failed for {}: {}", robots_url, e);
            return None;
        }
    };

    if !response.status().is_success() {
        tracing::debug!(
            "robots.txt unavailable for {} (status {})",
            robots_url,
            response.status()
        );
        return None;
    }

    match response.text().await {
        Ok(body) => Some(RobotsPolicy::parse(&body)),
        Err(e) => {
            tracing::debug!("robots.txt body read failed for {}: {}", robots_url, e);
            None
        }
    }
}
