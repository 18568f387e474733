use std::path::PathBuf;

use serde::Deserialize;

use crate::{DEFAULT_FEED_TTL_SECS, DEFAULT_WAIT_MINUTES, Minutes};

/// Configuration for building a park model and its wait feed.
#[derive(Debug, Clone, Deserialize)]
pub struct ParkModelConfig {
    /// CSV catalog of attractions (`name,x,y`)
    pub attractions_path: PathBuf,
    /// CSV catalog of walkways (`from,to,walk_minutes`)
    pub walkways_path: PathBuf,
    /// CSV telemetry export (`label,minutes`)
    pub wait_times_path: PathBuf,
    /// Wait applied to attractions without a telemetry match
    #[serde(default = "default_wait")]
    pub default_wait: Minutes,
    /// Snapshot freshness window in seconds
    #[serde(default = "default_feed_ttl")]
    pub feed_ttl_seconds: u64,
}

fn default_wait() -> Minutes {
    DEFAULT_WAIT_MINUTES
}

fn default_feed_ttl() -> u64 {
    DEFAULT_FEED_TTL_SECS
}
