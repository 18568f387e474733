//! Route planning over the weighted attraction network

pub mod dijkstra;
pub mod itinerary;
pub mod weights;

pub use itinerary::{Route, RouteStep, plan, plan_one_to_many};
pub use weights::WeightOverlay;
