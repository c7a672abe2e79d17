//! Per-host robots.txt cache
//!
//! Robots policy is assumed static for the duration of a crawl, so each
//! host's document is fetched at most about once instead of on every page.
//! The map is keyed by the robots.txt URL itself (scheme + authority), which
//! keeps distinct ports distinct.

use crate::robots::{fetch_robots, RobotsPolicy};
use reqwest::Client;
use std::collections::HashMap;
use std::sync::Mutex;
use url::Url;

/// Caches fetched robots.txt policies per host for the lifetime of a crawl
///
/// `None` entries record hosts whose document was absent or unreachable, so
/// the failure is not retried on every page either.
#[derive(Debug, Default)]
pub struct RobotsCache {
    entries: Mutex<HashMap<String, Option<RobotsPolicy>>>,
}

impl RobotsCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the policy for the host of `page_url`, fetching it on first use
    ///
    /// The lock is not held across the network fetch, so two workers hitting
    /// a new host at the same time may both fetch its robots.txt. That race
    /// is benign (idempotent GET, identical result) and cheaper than
    /// serializing all workers behind one fetch.
    pub async fn get_or_fetch(&self, client: &Client, page_url: &Url) -> Option<RobotsPolicy> {
        let robots_url = match robots_url_for(page_url) {
            Some(u) => u,
            None => return None,
        };
        let key = robots_url.as_str().to_string();

        {
            let entries = self.entries.lock().unwrap();
            if let Some(cached) = entries.get(&key) {
                return cached.clone();
            }
        }

        tracing::debug!("Fetching robots.txt: {}", robots_url);
        let policy = fetch_robots(client, &robots_url).await;

        let mut entries = self.entries.lock().unwrap();
        entries.entry(key).or_insert_with(|| policy.clone());
        policy
    }

    #[cfg(test)]
    fn insert(&self, key: &str, policy: Option<RobotsPolicy>) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), policy);
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}

/// Builds the robots.txt URL for the host serving `page_url`
fn robots_url_for(page_url: &Url) -> Option<Url> {
    page_url.host_str()?;
    let mut url = page_url.clone();
    url.set_path("/robots.txt");
    url.set_query(None);
    url.set_fragment(None);
    Some(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_robots_url_for_page() {
        let page = Url::parse("https://example.com/deep/page?q=1").unwrap();
        let robots = robots_url_for(&page).unwrap();
        assert_eq!(robots.as_str(), "https://example.com/robots.txt");
    }

    #[test]
    fn test_robots_url_keeps_port() {
        let page = Url::parse("http://127.0.0.1:8080/page").unwrap();
        let robots = robots_url_for(&page).unwrap();
        assert_eq!(robots.as_str(), "http://127.0.0.1:8080/robots.txt");
    }

    #[tokio::test]
    async fn test_cached_policy_served_without_fetch() {
        // Pre-populate the cache; a hit must not touch the network, so an
        // unroutable client is fine here.
        let cache = RobotsCache::new();
        cache.insert(
            "https://example.com/robots.txt",
            Some(RobotsPolicy::parse("User-agent: *\nDisallow: /private")),
        );

        let client = Client::new();
        let page = Url::parse("https://example.com/page").unwrap();
        let policy = cache.get_or_fetch(&client, &page).await;

        assert!(!policy.unwrap().allows("/private/x"));
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_absent_entry_cached() {
        let cache = RobotsCache::new();
        cache.insert("https://example.com/robots.txt", None);

        let client = Client::new();
        let page = Url::parse("https://example.com/page").unwrap();
        assert!(cache.get_or_fetch(&client, &page).await.is_none());
    }
}
