//! URL resolution and classification
//!
//! This module turns raw href attribute values into normalized absolute URLs
//! and decides whether a URL belongs to the crawled site or points elsewhere.

mod classify;
mod resolve;

pub use classify::{classify, LinkClass};
pub use resolve::resolve_href;
