//! Worker loop and link discovery
//!
//! Each worker repeatedly dequeues a target, claims a unit of the visit
//! budget, fetches and filters the page's links, and feeds accepted internal
//! links back into the frontier at depth + 1. All failure modes are soft:
//! a worker never aborts the crawl, and on budget exhaustion it keeps
//! dequeuing (and discarding) so the frontier always drains.

use crate::config::CrawlConfig;
use crate::crawler::extract::extract_hrefs;
use crate::crawler::fetcher::fetch_page;
use crate::crawler::frontier::{CrawlTarget, Frontier};
use crate::registry::VisitedRegistry;
use crate::robots::{is_allowed, RobotsCache};
use crate::url::{classify, resolve_href, LinkClass};
use reqwest::Client;
use std::sync::Arc;

/// Everything a worker needs, shared across the pool
pub(crate) struct CrawlContext {
    pub config: CrawlConfig,
    pub client: Client,
    pub registry: Arc<VisitedRegistry>,
    pub frontier: Arc<Frontier>,
    pub robots: RobotsCache,
}

/// Runs one worker until the frontier drains
pub(crate) async fn run_worker(ctx: Arc<CrawlContext>, worker_id: usize) {
    tracing::debug!("Worker {} started", worker_id);

    while let Some(target) = ctx.frontier.pop().await {
        // Claim budget before spending a fetch on this target. On
        // exhaustion the target is dropped but the loop continues, so
        // leftover queue entries still get consumed and the drain
        // condition is reached.
        if !ctx.registry.try_visit(ctx.config.max_urls) {
            tracing::debug!(
                "Worker {}: budget exhausted, discarding {}",
                worker_id,
                target.url
            );
            ctx.frontier.task_done();
            continue;
        }

        println!("[*] Crawling: {} (Depth: {})", target.url, target.depth);
        let found = discover(&ctx, &target).await;

        for child in found {
            // Soft overshoot guard: stop enqueuing once the budget is
            // spent. Racy by design; admission already happened, so a
            // skipped child stays recorded but is never fetched.
            if ctx.registry.visited_count() >= ctx.config.max_urls {
                break;
            }
            ctx.frontier.push(child);
        }

        ctx.frontier.task_done();
    }

    tracing::debug!("Worker {} finished", worker_id);
}

/// Fetches one page and returns the newly accepted internal links at
/// `target.depth + 1`
///
/// External links are admitted into the registry as a side effect of
/// discovery and are never returned for traversal. Every failure here is
/// scoped to this one page and yields an empty result.
pub(crate) async fn discover(ctx: &CrawlContext, target: &CrawlTarget) -> Vec<CrawlTarget> {
    let mut accepted = Vec::new();

    // Depth is checked before any network I/O is spent.
    if target.depth > ctx.config.max_depth {
        return accepted;
    }

    let body = match fetch_page(&ctx.client, target.url.as_str()).await {
        Ok(body) => body,
        Err(e) => {
            println!("[!] Failed to retrieve {}: {}", target.url, e);
            return accepted;
        }
    };

    let policy = ctx.robots.get_or_fetch(&ctx.client, &target.url).await;
    if !is_allowed(policy.as_ref(), target.url.path()) {
        println!("[!] Skipping URL due to robots.txt: {}", target.url);
        return accepted;
    }

    for href in extract_hrefs(&body) {
        let link = match resolve_href(&target.url, &href) {
            Some(link) => link,
            None => {
                tracing::debug!("Discarding unusable href '{}' on {}", href, target.url);
                continue;
            }
        };

        match classify(&link, &ctx.config.site_domain) {
            LinkClass::External => {
                if ctx.registry.try_admit(link.as_str(), LinkClass::External) {
                    println!("[!] External: {}", link);
                }
            }
            LinkClass::Internal => {
                // A link past the depth limit is observed but neither
                // admitted nor enqueued; it may still be reached later
                // through a shorter path.
                if target.depth + 1 > ctx.config.max_depth {
                    tracing::debug!("Beyond depth limit, not following: {}", link);
                    continue;
                }
                if ctx.registry.try_admit(link.as_str(), LinkClass::Internal) {
                    println!("[*] Internal: {}", link);
                    accepted.push(CrawlTarget {
                        url: link,
                        depth: target.depth + 1,
                    });
                }
            }
        }
    }

    accepted
}
