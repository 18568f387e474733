//! Planning entry points and the itinerary they produce

use itertools::Itertools;
use rayon::prelude::*;
use serde::Serialize;

use super::dijkstra::shortest_path;
use super::weights::WeightOverlay;
use crate::feed::WaitSnapshot;
use crate::model::ParkModel;
use crate::{Error, Minutes};

/// One leg of a route: walk to `to`, then queue there.
#[derive(Debug, Clone, Serialize)]
pub struct RouteStep {
    pub to: String,
    pub walk_minutes: Minutes,
    pub wait_minutes: Minutes,
}

/// A computed walk+wait minimizing traversal of the park.
#[derive(Debug, Clone, Serialize)]
pub struct Route {
    /// Attraction names from start to end, inclusive
    pub path: Vec<String>,
    /// Sum of traversed directional costs
    pub total_minutes: Minutes,
    pub steps: Vec<RouteStep>,
}

/// Plans the cheapest route between two attractions.
///
/// Pure function of its inputs: topology from the model, waits from the
/// snapshot, nothing cached or mutated. `start == end` yields the trivial
/// single-node route at cost zero.
///
/// # Errors
///
/// [`Error::AttractionNotFound`] for an unknown start or end,
/// [`Error::NoPath`] when the endpoints are disconnected.
pub fn plan(
    model: &ParkModel,
    snapshot: &WaitSnapshot,
    start: &str,
    end: &str,
) -> Result<Route, Error> {
    let graph = &model.graph;
    let start_node = graph.node_index(start)?;
    let end_node = graph.node_index(end)?;

    if start_node == end_node {
        return Ok(Route {
            path: vec![start.to_string()],
            total_minutes: 0,
            steps: Vec::new(),
        });
    }

    let overlay = WeightOverlay::build(graph, snapshot);
    let (node_path, total_minutes) = shortest_path(graph, &overlay, start_node, end_node)
        .ok_or_else(|| Error::NoPath {
            start: start.to_string(),
            end: end.to_string(),
        })?;

    let steps = node_path
        .iter()
        .tuple_windows()
        .map(|(&from, &to)| {
            // Adjacent path nodes always share a walkway
            let walk_minutes = graph.walk_minutes(from, to).unwrap_or_default();
            RouteStep {
                to: graph.attraction_name(to).to_string(),
                walk_minutes,
                wait_minutes: overlay.wait(to),
            }
        })
        .collect();

    Ok(Route {
        path: node_path
            .into_iter()
            .map(|node| graph.attraction_name(node).to_string())
            .collect(),
        total_minutes,
        steps,
    })
}

/// Plans routes from one start to many destinations in parallel.
pub fn plan_one_to_many(
    model: &ParkModel,
    snapshot: &WaitSnapshot,
    start: &str,
    ends: &[&str],
) -> Vec<Result<Route, Error>> {
    ends.par_iter()
        .map(|end| plan(model, snapshot, start, end))
        .collect()
}
