//! Crawl configuration
//!
//! All run parameters come from the command line; they are validated once
//! here and read-only for the rest of the crawl.

use crate::ConfigError;
use url::Url;

/// Identity string sent when the user does not override `--user-agent`
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Validated configuration for a single crawl run
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Seed URL, normalized (query and fragment stripped)
    pub seed: Url,

    /// Domain of the seed URL; the internal/external classification key
    pub site_domain: String,

    /// Global visit budget: maximum total URLs to fetch
    pub max_urls: usize,

    /// Maximum traversal depth from the seed
    pub max_depth: u32,

    /// Number of concurrent worker tasks
    pub num_workers: usize,

    /// Whether to persist the result sets to text files
    pub save_results: bool,

    /// User-agent header value for all requests
    pub user_agent: String,
}

impl CrawlConfig {
    /// Builds and validates a configuration
    ///
    /// The seed must parse as an absolute URL with a host, and at least one
    /// worker is required. The seed is normalized here so that the string
    /// stored in the visited registry matches what discovered links resolve
    /// to.
    pub fn new(
        seed: &str,
        max_urls: usize,
        max_depth: u32,
        num_workers: usize,
        save_results: bool,
        user_agent: Option<String>,
    ) -> Result<Self, ConfigError> {
        if num_workers == 0 {
            return Err(ConfigError::NoWorkers);
        }

        let mut seed_url = Url::parse(seed).map_err(|e| ConfigError::InvalidSeed {
            url: seed.to_string(),
            reason: e.to_string(),
        })?;

        let site_domain = seed_url
            .host_str()
            .ok_or_else(|| ConfigError::MissingHost(seed.to_string()))?
            .to_string();

        seed_url.set_query(None);
        seed_url.set_fragment(None);

        Ok(Self {
            seed: seed_url,
            site_domain,
            max_urls,
            max_depth,
            num_workers,
            save_results,
            user_agent: user_agent.unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        })
    }
}
