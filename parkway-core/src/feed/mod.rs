//! Live queue telemetry: sources, name matching, and snapshot caching
//!
//! The telemetry backend labels rides differently from the park catalog, so
//! raw records go through an explicit matching step ([`matching`]) before
//! they weight any route. Sources are fallible; the cache keeps the last
//! good data so a flaky feed degrades planning instead of failing it.

mod cache;
pub mod matching;
mod snapshot;
mod sources;

pub use cache::CachedFeed;
pub use snapshot::WaitSnapshot;
pub use sources::{CsvWaitFeed, StaticWaitFeed};

use serde::Deserialize;

use crate::{Error, Minutes};

/// One raw telemetry row: the feed's own label for a ride and its current
/// queue estimate.
#[derive(Debug, Clone, Deserialize)]
pub struct WaitRecord {
    pub label: String,
    pub minutes: Minutes,
}

/// Supplier of raw wait-time telemetry.
///
/// Implementations are assumed idempotent within their refresh window and
/// may fail outright; callers go through [`CachedFeed`] rather than hitting
/// a source directly.
pub trait WaitTimeSource: Send + Sync {
    /// Fetches the current telemetry records.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FeedUnavailable`] when the backing store cannot be
    /// reached or read.
    fn fetch_records(&self) -> Result<Vec<WaitRecord>, Error>;
}

impl<S: WaitTimeSource + ?Sized> WaitTimeSource for Box<S> {
    fn fetch_records(&self) -> Result<Vec<WaitRecord>, Error> {
        (**self).fetch_records()
    }
}
