//! Shortest-path search over the directed-cost view of the park graph

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use hashbrown::HashMap;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;

use super::weights::WeightOverlay;
use crate::Minutes;
use crate::model::ParkGraph;

#[derive(Copy, Clone, Eq, PartialEq)]
struct State {
    cost: Minutes,
    node: NodeIndex,
}

// Implement Ord for State to use in BinaryHeap
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap by cost (reversed from standard Rust BinaryHeap);
        // equal costs pop in catalog insertion order, keeping results
        // deterministic
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.index().cmp(&self.node.index()))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra's algorithm between two attractions.
///
/// Traversal costs come from the overlay, so the undirected graph is
/// searched with direction-dependent weights. Returns the node path from
/// `start` to `target` and its total cost, or `None` when `target` is
/// unreachable.
pub(crate) fn shortest_path(
    graph: &ParkGraph,
    overlay: &WeightOverlay,
    start: NodeIndex,
    target: NodeIndex,
) -> Option<(Vec<NodeIndex>, Minutes)> {
    let estimated_nodes = graph.node_count();
    let mut distances: HashMap<NodeIndex, Minutes> = HashMap::with_capacity(estimated_nodes);
    let mut predecessors: HashMap<NodeIndex, NodeIndex> = HashMap::with_capacity(estimated_nodes);
    let mut heap = BinaryHeap::with_capacity(estimated_nodes);

    heap.push(State {
        cost: 0,
        node: start,
    });
    distances.insert(start, 0);

    while let Some(State { cost, node }) = heap.pop() {
        if node == target {
            break;
        }

        // Skip if we've found a better path
        if let Some(&best) = distances.get(&node) {
            if cost > best {
                continue;
            }
        }

        for edge in graph.graph.edges(node) {
            let next = edge.target();
            let step_cost = overlay.traversal_cost(edge.weight().walk_minutes, next);
            let next_cost = cost + step_cost;

            match distances.entry(next) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    heap.push(State {
                        cost: next_cost,
                        node: next,
                    });
                    predecessors.insert(next, node);
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        heap.push(State {
                            cost: next_cost,
                            node: next,
                        });
                        predecessors.insert(next, node);
                    }
                }
            }
        }
    }

    let total = *distances.get(&target)?;
    if target != start && !predecessors.contains_key(&target) {
        return None;
    }

    // Follow predecessors backward from target to start
    let mut path = vec![target];
    let mut current = target;
    while current != start {
        let &prev = predecessors.get(&current)?;
        path.push(prev);
        current = prev;
    }
    path.reverse();

    Some((path, total))
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use geo::Point;

    use super::*;
    use crate::feed::WaitSnapshot;

    fn line_park() -> ParkGraph {
        ParkGraph::from_parts(
            vec![
                ("A".to_string(), Point::new(0.0, 0.0)),
                ("B".to_string(), Point::new(1.0, 0.0)),
                ("C".to_string(), Point::new(2.0, 0.0)),
            ],
            vec![
                ("A".to_string(), "B".to_string(), 5),
                ("B".to_string(), "C".to_string(), 5),
            ],
        )
        .unwrap()
    }

    #[test]
    fn waits_steer_the_search() {
        // Diamond: two equal-walk detours to D, one through a long queue
        let graph = ParkGraph::from_parts(
            vec![
                ("A".to_string(), Point::new(0.0, 0.0)),
                ("B".to_string(), Point::new(1.0, 1.0)),
                ("C".to_string(), Point::new(1.0, -1.0)),
                ("D".to_string(), Point::new(2.0, 0.0)),
            ],
            vec![
                ("A".to_string(), "B".to_string(), 3),
                ("A".to_string(), "C".to_string(), 3),
                ("B".to_string(), "D".to_string(), 3),
                ("C".to_string(), "D".to_string(), 3),
            ],
        )
        .unwrap();

        let mut waits = hashbrown::HashMap::new();
        waits.insert("B".to_string(), 30);
        waits.insert("C".to_string(), 5);
        waits.insert("D".to_string(), 0);
        let snapshot = WaitSnapshot::new(waits, 0, Utc::now());
        let overlay = WeightOverlay::build(&graph, &snapshot);

        let a = graph.node_index("A").unwrap();
        let c = graph.node_index("C").unwrap();
        let d = graph.node_index("D").unwrap();
        let (path, total) = shortest_path(&graph, &overlay, a, d).unwrap();
        // walk 3 + wait 5 at C, walk 3 + wait 0 at D
        assert_eq!(total, 11);
        assert_eq!(path, vec![a, c, d]);
    }

    #[test]
    fn equal_cost_tie_keeps_the_first_discovered_path() {
        // Direct edge ties with a two-leg detour; the predecessor set at
        // first discovery is never replaced by an equal cost
        let graph = ParkGraph::from_parts(
            vec![
                ("A".to_string(), Point::new(0.0, 0.0)),
                ("B".to_string(), Point::new(1.0, 1.0)),
                ("C".to_string(), Point::new(2.0, 0.0)),
            ],
            vec![
                ("A".to_string(), "C".to_string(), 4),
                ("A".to_string(), "B".to_string(), 2),
                ("B".to_string(), "C".to_string(), 2),
            ],
        )
        .unwrap();

        let snapshot = WaitSnapshot::flat(0, Utc::now());
        let overlay = WeightOverlay::build(&graph, &snapshot);
        let a = graph.node_index("A").unwrap();
        let c = graph.node_index("C").unwrap();
        let (path, total) = shortest_path(&graph, &overlay, a, c).unwrap();
        assert_eq!(total, 4);
        assert_eq!(path, vec![a, c]);
    }

    #[test]
    fn unreachable_target_is_none() {
        let graph = ParkGraph::from_parts(
            vec![
                ("A".to_string(), Point::new(0.0, 0.0)),
                ("D".to_string(), Point::new(9.0, 9.0)),
            ],
            vec![],
        )
        .unwrap();
        let snapshot = WaitSnapshot::flat(10, Utc::now());
        let overlay = WeightOverlay::build(&graph, &snapshot);
        let a = graph.node_index("A").unwrap();
        let d = graph.node_index("D").unwrap();
        assert!(shortest_path(&graph, &overlay, a, d).is_none());
    }

    #[test]
    fn trivial_start_equals_target() {
        let graph = line_park();
        let snapshot = WaitSnapshot::flat(10, Utc::now());
        let overlay = WeightOverlay::build(&graph, &snapshot);
        let a = graph.node_index("A").unwrap();
        let (path, total) = shortest_path(&graph, &overlay, a, a).unwrap();
        assert_eq!(path, vec![a]);
        assert_eq!(total, 0);
    }
}
