//! Raw catalog rows as they appear on disk

use serde::Deserialize;

use crate::Minutes;

/// `attractions.csv` row
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogAttraction {
    pub name: String,
    /// Display position, never a path cost input
    pub x: f64,
    pub y: f64,
}

/// `walkways.csv` row
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogWalkway {
    pub from: String,
    pub to: String,
    pub walk_minutes: Minutes,
}
