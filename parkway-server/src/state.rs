use parkway_core::feed::{CachedFeed, WaitSnapshot, WaitTimeSource};
use parkway_core::model::ParkModel;

/// Shared read-only state: the immutable park model and the cached feed.
pub struct AppState {
    pub model: ParkModel,
    pub feed: CachedFeed<Box<dyn WaitTimeSource>>,
}

impl AppState {
    pub fn new(model: ParkModel, feed: CachedFeed<Box<dyn WaitTimeSource>>) -> Self {
        Self { model, feed }
    }

    /// Fresh-or-stale wait snapshot covering the whole catalog.
    pub fn snapshot(&self) -> WaitSnapshot {
        self.feed.snapshot(self.model.graph.attraction_names())
    }
}
