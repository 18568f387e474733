//! Stale-preferring TTL cache over a wait-time source

use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use log::warn;

use super::matching::resolve_snapshot;
use super::snapshot::WaitSnapshot;
use super::{WaitRecord, WaitTimeSource};
use crate::Minutes;

struct CacheEntry {
    records: Arc<Vec<WaitRecord>>,
    fetched_at: Instant,
    as_of: DateTime<Utc>,
}

/// Caches the last successful fetch from a [`WaitTimeSource`].
///
/// Within the TTL the source is not touched. On a failed refresh the stale
/// records are served; with nothing cached at all the snapshot degrades to
/// the flat default. Planning requests never fail on feed trouble.
pub struct CachedFeed<S> {
    source: S,
    ttl: Duration,
    default_wait: Minutes,
    state: Mutex<Option<CacheEntry>>,
}

impl<S: WaitTimeSource> CachedFeed<S> {
    pub fn new(source: S, ttl: Duration, default_wait: Minutes) -> Self {
        Self {
            source,
            ttl,
            default_wait,
            state: Mutex::new(None),
        }
    }

    /// Current wait snapshot for the given attraction names.
    pub fn snapshot<'a, I>(&self, names: I) -> WaitSnapshot
    where
        I: IntoIterator<Item = &'a str>,
    {
        match self.records() {
            Ok((records, as_of)) => resolve_snapshot(names, &records, self.default_wait, as_of),
            Err(err) => {
                warn!("wait feed unavailable, using flat default of {} min: {err}", self.default_wait);
                WaitSnapshot::flat(self.default_wait, Utc::now())
            }
        }
    }

    fn records(&self) -> Result<(Arc<Vec<WaitRecord>>, DateTime<Utc>), crate::Error> {
        let mut state = self
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(entry) = state.as_ref() {
            if entry.fetched_at.elapsed() < self.ttl {
                return Ok((Arc::clone(&entry.records), entry.as_of));
            }
        }

        match self.source.fetch_records() {
            Ok(records) => {
                let entry = CacheEntry {
                    records: Arc::new(records),
                    fetched_at: Instant::now(),
                    as_of: Utc::now(),
                };
                let result = (Arc::clone(&entry.records), entry.as_of);
                *state = Some(entry);
                Ok(result)
            }
            Err(err) => {
                // Serve the last good records rather than failing the request
                if let Some(entry) = state.as_ref() {
                    warn!("wait feed refresh failed, serving stale snapshot: {err}");
                    Ok((Arc::clone(&entry.records), entry.as_of))
                } else {
                    Err(err)
                }
            }
        }
    }
}
