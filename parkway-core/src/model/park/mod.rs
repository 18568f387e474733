//! Attraction and walkway network model

pub mod components;
pub mod network;

pub use components::{AttractionNode, Walkway};
pub use network::ParkGraph;
