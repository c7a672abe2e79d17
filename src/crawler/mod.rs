//! Crawl engine
//!
//! The concurrent core of the crate: the frontier work queue, the worker
//! pool that fetches and filters pages, and the coordinator that seeds the
//! crawl and collects the result.

mod coordinator;
mod extract;
mod fetcher;
mod frontier;
mod worker;

pub use coordinator::{crawl, Coordinator, CrawlReport};
pub use extract::extract_hrefs;
pub use fetcher::{build_http_client, fetch_page};
pub use frontier::{CrawlTarget, Frontier};
