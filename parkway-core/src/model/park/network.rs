//! Static park topology and adjacency lookup

use geo::Point;
use hashbrown::HashMap;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use super::components::{AttractionNode, Walkway};
use crate::{Error, Minutes};

/// Immutable attraction network.
///
/// Topology never changes after construction; per-request wait overlays are
/// kept outside the graph so this stays a pure reference structure shared
/// between concurrent planning requests.
#[derive(Debug, Clone)]
pub struct ParkGraph {
    pub(crate) graph: UnGraph<AttractionNode, Walkway>,
    index: HashMap<String, NodeIndex>,
}

impl ParkGraph {
    /// Builds the park graph from a catalog of attractions and walkways.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCatalog`] for a duplicate attraction name, a
    /// walkway referencing an undefined attraction, or a non-positive
    /// walking time.
    pub fn from_parts(
        attractions: Vec<(String, Point<f64>)>,
        walkways: Vec<(String, String, Minutes)>,
    ) -> Result<Self, Error> {
        let mut graph = UnGraph::with_capacity(attractions.len(), walkways.len());
        let mut index = HashMap::with_capacity(attractions.len());

        for (name, geometry) in attractions {
            let node = graph.add_node(AttractionNode {
                name: name.clone(),
                geometry,
            });
            if index.insert(name, node).is_some() {
                let name = &graph[node].name;
                return Err(Error::InvalidCatalog(format!(
                    "duplicate attraction name: {name}"
                )));
            }
        }

        for (from, to, walk_minutes) in walkways {
            let (a, b) = match (index.get(&from), index.get(&to)) {
                (Some(&a), Some(&b)) => (a, b),
                (None, _) => {
                    return Err(Error::InvalidCatalog(format!(
                        "walkway references undefined attraction: {from}"
                    )));
                }
                (_, None) => {
                    return Err(Error::InvalidCatalog(format!(
                        "walkway references undefined attraction: {to}"
                    )));
                }
            };
            if walk_minutes == 0 {
                return Err(Error::InvalidCatalog(format!(
                    "walkway {from} - {to} must have a positive walking time"
                )));
            }
            // A repeated pair replaces the earlier walkway instead of
            // creating a parallel edge
            graph.update_edge(a, b, Walkway { walk_minutes });
        }

        Ok(Self { graph, index })
    }

    /// Resolves an attraction name to its node index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AttractionNotFound`] if the name is not in the catalog.
    pub fn node_index(&self, name: &str) -> Result<NodeIndex, Error> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| Error::AttractionNotFound(name.to_string()))
    }

    /// Adjacent attractions with their base walking times.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AttractionNotFound`] if the name is not in the catalog.
    pub fn neighbors(&self, name: &str) -> Result<Vec<(&str, Minutes)>, Error> {
        let node = self.node_index(name)?;
        Ok(self
            .graph
            .edges(node)
            .map(|edge| {
                (
                    self.graph[edge.target()].name.as_str(),
                    edge.weight().walk_minutes,
                )
            })
            .collect())
    }

    /// Base walking time of the walkway between two adjacent nodes, if any.
    pub(crate) fn walk_minutes(&self, a: NodeIndex, b: NodeIndex) -> Option<Minutes> {
        self.graph
            .find_edge(a, b)
            .map(|edge| self.graph[edge].walk_minutes)
    }

    pub fn attraction_name(&self, node: NodeIndex) -> &str {
        &self.graph[node].name
    }

    pub fn attraction_names(&self) -> impl Iterator<Item = &str> {
        self.graph.node_weights().map(|node| node.name.as_str())
    }

    pub fn attractions(&self) -> impl Iterator<Item = &AttractionNode> {
        self.graph.node_weights()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> ParkGraph {
        ParkGraph::from_parts(
            vec![
                ("Entrance".to_string(), Point::new(0.0, 0.0)),
                ("Carousel".to_string(), Point::new(1.0, 2.0)),
                ("Log Flume".to_string(), Point::new(3.0, 1.0)),
            ],
            vec![
                ("Entrance".to_string(), "Carousel".to_string(), 5),
                ("Carousel".to_string(), "Log Flume".to_string(), 4),
            ],
        )
        .unwrap()
    }

    #[test]
    fn neighbors_include_walk_times() {
        let park = triangle();
        let mut neighbors = park.neighbors("Carousel").unwrap();
        neighbors.sort();
        assert_eq!(neighbors, vec![("Entrance", 5), ("Log Flume", 4)]);
    }

    #[test]
    fn unknown_name_is_not_found() {
        let park = triangle();
        let err = park.neighbors("Ghost Train").unwrap_err();
        assert!(matches!(err, Error::AttractionNotFound(name) if name == "Ghost Train"));
    }

    #[test]
    fn undefined_endpoint_rejected() {
        let err = ParkGraph::from_parts(
            vec![("Entrance".to_string(), Point::new(0.0, 0.0))],
            vec![("Entrance".to_string(), "Carousel".to_string(), 5)],
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidCatalog(_)));
    }

    #[test]
    fn zero_walk_time_rejected() {
        let err = ParkGraph::from_parts(
            vec![
                ("Entrance".to_string(), Point::new(0.0, 0.0)),
                ("Carousel".to_string(), Point::new(1.0, 2.0)),
            ],
            vec![("Entrance".to_string(), "Carousel".to_string(), 0)],
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidCatalog(_)));
    }

    #[test]
    fn repeated_walkway_replaces_earlier_one() {
        let park = ParkGraph::from_parts(
            vec![
                ("Entrance".to_string(), Point::new(0.0, 0.0)),
                ("Carousel".to_string(), Point::new(1.0, 2.0)),
            ],
            vec![
                ("Entrance".to_string(), "Carousel".to_string(), 5),
                ("Carousel".to_string(), "Entrance".to_string(), 8),
            ],
        )
        .unwrap();
        assert_eq!(park.edge_count(), 1);
        assert_eq!(park.neighbors("Entrance").unwrap(), vec![("Carousel", 8)]);
    }

    #[test]
    fn duplicate_name_rejected() {
        let err = ParkGraph::from_parts(
            vec![
                ("Entrance".to_string(), Point::new(0.0, 0.0)),
                ("Entrance".to_string(), Point::new(1.0, 2.0)),
            ],
            vec![],
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidCatalog(_)));
    }
}
