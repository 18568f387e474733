//! Directional edge weighting from live wait data
//!
//! Topology stays untouched; each planning request builds a fresh overlay
//! of effective waits from the current snapshot. The cost of traversing a
//! walkway is its base walking time plus the wait at the destination, so one
//! undirected edge carries two different directional costs whenever its
//! endpoints queue differently.

use petgraph::graph::NodeIndex;

use crate::Minutes;
use crate::feed::WaitSnapshot;
use crate::model::ParkGraph;

/// Per-request wait overlay, indexed by node.
#[derive(Debug, Clone)]
pub struct WeightOverlay {
    waits: Vec<Minutes>,
}

impl WeightOverlay {
    /// Resolves every attraction's effective wait through the snapshot.
    pub fn build(graph: &ParkGraph, snapshot: &WaitSnapshot) -> Self {
        let waits = graph
            .attraction_names()
            .map(|name| snapshot.wait_for(name))
            .collect();
        Self { waits }
    }

    /// Effective wait at a node.
    pub fn wait(&self, node: NodeIndex) -> Minutes {
        self.waits[node.index()]
    }

    /// Cost of stepping over a walkway into `to`.
    pub fn traversal_cost(&self, walk_minutes: Minutes, to: NodeIndex) -> Minutes {
        walk_minutes + self.wait(to)
    }
}
