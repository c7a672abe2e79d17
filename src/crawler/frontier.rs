//! The frontier: the shared queue of pending crawl targets
//!
//! A FIFO queue with queue-join drain semantics: `pop` blocks while the
//! queue is empty but some dequeued target is still being processed, because
//! that target may yet produce new work. Only when the queue is empty and
//! nothing is in flight does `pop` return `None`, which is the crawl's sole
//! termination signal.
//!
//! Blocked consumers wake by re-polling on a short sleep rather than by
//! notification; at 20ms against multi-second fetch latencies the cost is
//! noise, and there is no wakeup to lose.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;
use tokio::time::sleep;
use url::Url;

/// How long an idle consumer sleeps before re-checking the queue
const IDLE_POLL_INTERVAL: Duration = Duration::from_millis(20);

/// A unit of pending work: a normalized URL and its distance from the seed
///
/// Created when a link is accepted by the filtering pipeline (or at seeding,
/// with depth 0), consumed exactly once by a worker, never mutated.
#[derive(Debug, Clone)]
pub struct CrawlTarget {
    pub url: Url,
    pub depth: u32,
}

#[derive(Debug, Default)]
struct FrontierState {
    queue: VecDeque<CrawlTarget>,
    in_flight: usize,
}

/// Multi-producer multi-consumer FIFO work queue shared by all workers
#[derive(Debug, Default)]
pub struct Frontier {
    state: Mutex<FrontierState>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueues a target
    pub fn push(&self, target: CrawlTarget) {
        let mut state = self.state.lock().unwrap();
        state.queue.push_back(target);
    }

    /// Dequeues the next target, waiting while the crawl may still grow
    ///
    /// Returns `None` exactly once the queue is empty and every previously
    /// dequeued target has been marked done via [`Frontier::task_done`].
    /// Each returned target counts as in flight until then.
    pub async fn pop(&self) -> Option<CrawlTarget> {
        loop {
            {
                let mut state = self.state.lock().unwrap();
                if let Some(target) = state.queue.pop_front() {
                    state.in_flight += 1;
                    return Some(target);
                }
                if state.in_flight == 0 {
                    return None;
                }
            }
            sleep(IDLE_POLL_INTERVAL).await;
        }
    }

    /// Marks one dequeued target as fully processed
    pub fn task_done(&self) {
        let mut state = self.state.lock().unwrap();
        debug_assert!(state.in_flight > 0, "task_done without matching pop");
        state.in_flight = state.in_flight.saturating_sub(1);
    }

    pub fn len(&self) -> usize {
        self.state.lock().unwrap().queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.lock().unwrap().queue.is_empty()
    }
}
