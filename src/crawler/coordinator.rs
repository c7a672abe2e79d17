//! Crawl coordinator
//!
//! Owns the registry and frontier, seeds the crawl, launches the worker
//! pool, waits for the frontier to drain, and assembles the final report.

use crate::config::CrawlConfig;
use crate::crawler::fetcher::build_http_client;
use crate::crawler::frontier::{CrawlTarget, Frontier};
use crate::crawler::worker::{run_worker, CrawlContext};
use crate::registry::VisitedRegistry;
use crate::robots::RobotsCache;
use crate::url::LinkClass;
use crate::Result;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Aggregate result of a completed crawl
#[derive(Debug, Clone)]
pub struct CrawlReport {
    /// Distinct internal URLs (the seed plus every admitted same-site link)
    pub internal: HashSet<String>,

    /// Distinct external URLs (admitted, never traversed)
    pub external: HashSet<String>,

    /// Total fetch attempts charged against the budget
    pub visited_count: usize,

    /// Wall-clock duration of the crawl
    pub elapsed: Duration,
}

impl CrawlReport {
    /// Total distinct URLs across both sets
    pub fn total_urls(&self) -> usize {
        self.internal.len() + self.external.len()
    }
}

/// Orchestrates a crawl run from seed to report
pub struct Coordinator {
    ctx: Arc<CrawlContext>,
}

impl Coordinator {
    /// Builds the shared crawl state and seeds the frontier
    ///
    /// The seed is admitted into the internal set up front: it is part of
    /// the crawl result, and any page linking back to it can then never
    /// re-enter the frontier.
    pub fn new(config: CrawlConfig) -> Result<Self> {
        let client = build_http_client(&config.user_agent)?;
        let registry = Arc::new(VisitedRegistry::new());
        let frontier = Arc::new(Frontier::new());

        registry.try_admit(config.seed.as_str(), LinkClass::Internal);
        frontier.push(CrawlTarget {
            url: config.seed.clone(),
            depth: 0,
        });

        Ok(Self {
            ctx: Arc::new(CrawlContext {
                config,
                client,
                registry,
                frontier,
                robots: RobotsCache::new(),
            }),
        })
    }

    /// Runs the worker pool to completion and reports aggregate results
    ///
    /// The crawl ends when the frontier drains (queue empty and every
    /// worker idle) or, effectively, when the budget starves it; either way
    /// all workers exit on their own and are joined here.
    pub async fn run(self) -> Result<CrawlReport> {
        let start = Instant::now();
        let num_workers = self.ctx.config.num_workers;
        tracing::info!(
            "Starting crawl of {} with {} workers (budget {}, max depth {})",
            self.ctx.config.seed,
            num_workers,
            self.ctx.config.max_urls,
            self.ctx.config.max_depth
        );

        let mut handles = Vec::with_capacity(num_workers);
        for worker_id in 0..num_workers {
            let ctx = Arc::clone(&self.ctx);
            handles.push(tokio::spawn(run_worker(ctx, worker_id)));
        }
        for handle in handles {
            handle.await?;
        }

        // All workers have joined; the registry is frozen from here on.
        let snapshot = self.ctx.registry.snapshot();
        let report = CrawlReport {
            internal: snapshot.internal,
            external: snapshot.external,
            visited_count: self.ctx.registry.visited_count(),
            elapsed: start.elapsed(),
        };

        tracing::info!(
            "Crawl completed: {} internal, {} external, {} visited in {:?}",
            report.internal.len(),
            report.external.len(),
            report.visited_count,
            report.elapsed
        );

        Ok(report)
    }
}

/// Runs a complete crawl with the given configuration
pub async fn crawl(config: CrawlConfig) -> Result<CrawlReport> {
    Coordinator::new(config)?.run().await
}
