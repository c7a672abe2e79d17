//! HTTP fetching
//!
//! One shared client for the whole crawl; redirects are followed by the
//! client itself (reqwest's default limit of 10 hops) and per-request
//! timeouts bound every fetch. A failed fetch is always scoped to the page
//! that triggered it.

use crate::FetchError;
use reqwest::Client;
use std::time::Duration;

/// Builds the HTTP client shared by all workers
pub fn build_http_client(user_agent: &str) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a page body
///
/// Follows redirects and returns the final body text. A non-success status
/// or transport failure is returned as a `FetchError`; callers log it and
/// treat the page as having yielded zero links.
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, FetchError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }
    Ok(response.text().await?)
}
