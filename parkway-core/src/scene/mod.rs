//! Projection of the park, live waits, and a planned route into a
//! renderable scene
//!
//! Pure data transform for the UI layer: walkway segments, wait-banded node
//! markers, and the highlighted path polyline. No planning logic lives here.

use chrono::{DateTime, Utc};
use hashbrown::{HashMap, HashSet};
use petgraph::visit::EdgeRef;
use serde::Serialize;

use crate::feed::WaitSnapshot;
use crate::model::ParkModel;
use crate::routing::Route;
use crate::{Error, Minutes};

/// Queue-status band for a node marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WaitBand {
    Low,
    Medium,
    High,
}

impl WaitBand {
    /// Bands: under 15 low, 15 to 45 medium, above 45 high.
    pub fn from_wait(minutes: Minutes) -> Self {
        if minutes < 15 {
            Self::Low
        } else if minutes <= 45 {
            Self::Medium
        } else {
            Self::High
        }
    }

    /// Marker color used by the park map UI.
    pub fn color(self) -> &'static str {
        match self {
            Self::Low => "#A6D86B",
            Self::Medium => "#F57C00",
            Self::High => "#D92B7D",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NodeMarker {
    pub name: String,
    pub position: [f64; 2],
    pub wait_minutes: Minutes,
    pub band: WaitBand,
    pub color: &'static str,
    pub on_path: bool,
    /// Shown only for attractions on the planned route
    pub label: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EdgeSegment {
    pub from: [f64; 2],
    pub to: [f64; 2],
}

/// Renderable description of the park map, ready for the chart layer.
#[derive(Debug, Clone, Serialize)]
pub struct RouteScene {
    pub as_of: DateTime<Utc>,
    pub nodes: Vec<NodeMarker>,
    pub edges: Vec<EdgeSegment>,
    /// Highlighted polyline over the planned route, empty without one
    pub path: Vec<[f64; 2]>,
}

impl RouteScene {
    /// JSON payload for a browser chart.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SerializationError`] if encoding fails.
    pub fn to_json_string(&self) -> Result<String, Error> {
        serde_json::to_string(self).map_err(|err| Error::SerializationError(err.to_string()))
    }
}

/// Builds the scene for the current snapshot and an optional planned route.
pub fn project(model: &ParkModel, snapshot: &WaitSnapshot, route: Option<&Route>) -> RouteScene {
    let graph = &model.graph;

    let on_path: HashSet<&str> = route
        .map(|route| route.path.iter().map(String::as_str).collect())
        .unwrap_or_default();

    let mut positions: HashMap<&str, [f64; 2]> = HashMap::with_capacity(graph.node_count());
    let nodes = graph
        .attractions()
        .map(|attraction| {
            let position = [attraction.geometry.x(), attraction.geometry.y()];
            positions.insert(attraction.name.as_str(), position);
            let wait_minutes = snapshot.wait_for(&attraction.name);
            let band = WaitBand::from_wait(wait_minutes);
            let on_path = on_path.contains(attraction.name.as_str());
            NodeMarker {
                name: attraction.name.clone(),
                position,
                wait_minutes,
                band,
                color: band.color(),
                on_path,
                label: on_path.then(|| attraction.name.clone()),
            }
        })
        .collect();

    let edges = graph
        .graph
        .edge_references()
        .map(|edge| {
            let from = &graph.graph[edge.source()];
            let to = &graph.graph[edge.target()];
            EdgeSegment {
                from: [from.geometry.x(), from.geometry.y()],
                to: [to.geometry.x(), to.geometry.y()],
            }
        })
        .collect();

    let path = route
        .map(|route| {
            route
                .path
                .iter()
                .filter_map(|name| positions.get(name.as_str()).copied())
                .collect()
        })
        .unwrap_or_default();

    RouteScene {
        as_of: snapshot.as_of(),
        nodes,
        edges,
        path,
    }
}
