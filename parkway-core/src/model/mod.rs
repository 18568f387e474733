//! Data model for park route optimization
//!
//! Contains types and structures for representing the attraction network.

pub mod park;
pub mod park_model;

pub use park::{AttractionNode, ParkGraph, Walkway};
pub use park_model::{ParkModel, ParkModelMeta};
