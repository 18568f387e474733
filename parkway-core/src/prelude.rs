// Re-export key components
pub use crate::error::Error;
pub use crate::feed::{
    CachedFeed, CsvWaitFeed, StaticWaitFeed, WaitRecord, WaitSnapshot, WaitTimeSource,
};
pub use crate::loading::{ParkModelConfig, create_park_model};
pub use crate::model::{AttractionNode, ParkGraph, ParkModel, ParkModelMeta, Walkway};
pub use crate::routing::{Route, RouteStep, plan, plan_one_to_many};
pub use crate::scene::{RouteScene, WaitBand, project};

// Core time unit
pub use crate::Minutes;
