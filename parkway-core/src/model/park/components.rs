//! Park network components - attraction nodes and walkway edges

use geo::Point;

use crate::Minutes;

/// Park graph node
#[derive(Debug, Clone)]
pub struct AttractionNode {
    /// Attraction name, unique within the park
    pub name: String,
    /// Display position on the park map, never a path cost input
    pub geometry: Point<f64>,
}

/// Park graph edge (walkway between two attractions)
///
/// One physical undirected edge; the traversal cost is direction-dependent
/// because the wait at the destination is added on top of this base time.
#[derive(Debug, Clone)]
pub struct Walkway {
    /// Base walking time in minutes
    pub walk_minutes: Minutes,
}

impl Walkway {
    pub fn walking_time(&self) -> Minutes {
        self.walk_minutes
    }
}
