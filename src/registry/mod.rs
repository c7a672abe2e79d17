//! Visited URL registry
//!
//! The registry is the single source of truth for "have we seen this URL".
//! It holds the internal and external URL sets plus the global visit counter,
//! and is the only mutable state shared by all workers. Every operation is
//! atomic with respect to concurrent callers: the crawl's no-double-fetch
//! invariant rests entirely on `try_admit`, and the budget rests on
//! `try_visit`.

use crate::url::LinkClass;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Debug, Default)]
struct LinkSets {
    internal: HashSet<String>,
    external: HashSet<String>,
}

/// Point-in-time copy of the registry contents, taken after workers join
#[derive(Debug, Clone)]
pub struct RegistrySnapshot {
    pub internal: HashSet<String>,
    pub external: HashSet<String>,
}

/// Concurrent deduplicated sets of internal and external URLs
///
/// Invariant: a URL string appears in at most one of the two sets for the
/// lifetime of a crawl, and once present is never removed.
#[derive(Debug, Default)]
pub struct VisitedRegistry {
    sets: Mutex<LinkSets>,
    visited: AtomicUsize,
}

impl VisitedRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically admits a URL into the set matching its class
    ///
    /// Checks membership in both sets under one lock; inserts and returns
    /// `true` only if the URL was absent from both. This single
    /// check-and-insert is the sole deduplication guard, so no caller may
    /// read the sets and act on the answer outside this method.
    pub fn try_admit(&self, url: &str, class: LinkClass) -> bool {
        let mut sets = self.sets.lock().unwrap();
        if sets.internal.contains(url) || sets.external.contains(url) {
            return false;
        }
        match class {
            LinkClass::Internal => sets.internal.insert(url.to_string()),
            LinkClass::External => sets.external.insert(url.to_string()),
        };
        true
    }

    /// Atomically claims one unit of the visit budget
    ///
    /// A single compare-and-swap increments the counter only while it is
    /// below `budget`, so the counter never passes the budget no matter how
    /// many workers race here, and no worker ever blocks on it. Returns
    /// `false` once the budget is exhausted; the caller discards its target
    /// and moves on.
    pub fn try_visit(&self, budget: usize) -> bool {
        self.visited
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| {
                (n < budget).then_some(n + 1)
            })
            .is_ok()
    }

    /// Total visits claimed so far
    pub fn visited_count(&self) -> usize {
        self.visited.load(Ordering::SeqCst)
    }

    pub fn internal_count(&self) -> usize {
        self.sets.lock().unwrap().internal.len()
    }

    pub fn external_count(&self) -> usize {
        self.sets.lock().unwrap().external.len()
    }

    /// Copies both sets out for reporting
    pub fn snapshot(&self) -> RegistrySnapshot {
        let sets = self.sets.lock().unwrap();
        RegistrySnapshot {
            internal: sets.internal.clone(),
            external: sets.external.clone(),
        }
    }
}
