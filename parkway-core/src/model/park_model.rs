//! Top-level park model shared by all planning requests

use std::time::Duration;

use crate::model::park::ParkGraph;
use crate::{DEFAULT_FEED_TTL_SECS, DEFAULT_WAIT_MINUTES, Minutes};

/// Runtime parameters attached to a loaded park model.
#[derive(Debug, Clone, Copy)]
pub struct ParkModelMeta {
    /// Wait applied to attractions without a telemetry match
    pub default_wait: Minutes,
    /// Freshness window of a fetched wait snapshot
    pub feed_ttl: Duration,
}

impl Default for ParkModelMeta {
    fn default() -> Self {
        Self {
            default_wait: DEFAULT_WAIT_MINUTES,
            feed_ttl: Duration::from_secs(DEFAULT_FEED_TTL_SECS),
        }
    }
}

/// Immutable park model: topology plus planning parameters.
///
/// Loaded once at startup; requests only ever read it.
#[derive(Debug, Clone)]
pub struct ParkModel {
    pub graph: ParkGraph,
    pub meta: ParkModelMeta,
}

impl ParkModel {
    pub fn new(graph: ParkGraph, meta: ParkModelMeta) -> Self {
        Self { graph, meta }
    }
}
