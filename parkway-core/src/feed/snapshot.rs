use chrono::{DateTime, Utc};
use hashbrown::HashMap;

use crate::Minutes;

/// Point-in-time mapping of attraction name to wait minutes.
///
/// Built once per refresh from raw telemetry and read by any number of
/// concurrent planning requests. Lookups never fail: an attraction without
/// an entry gets the configured default.
#[derive(Debug, Clone)]
pub struct WaitSnapshot {
    waits: HashMap<String, Minutes>,
    default_wait: Minutes,
    as_of: DateTime<Utc>,
}

impl WaitSnapshot {
    pub fn new(waits: HashMap<String, Minutes>, default_wait: Minutes, as_of: DateTime<Utc>) -> Self {
        Self {
            waits,
            default_wait,
            as_of,
        }
    }

    /// Snapshot with no telemetry at all; every attraction reports the same
    /// flat default.
    pub fn flat(default_wait: Minutes, as_of: DateTime<Utc>) -> Self {
        Self::new(HashMap::new(), default_wait, as_of)
    }

    pub fn wait_for(&self, name: &str) -> Minutes {
        self.waits.get(name).copied().unwrap_or(self.default_wait)
    }

    pub fn default_wait(&self) -> Minutes {
        self.default_wait
    }

    pub fn as_of(&self) -> DateTime<Utc> {
        self.as_of
    }
}
