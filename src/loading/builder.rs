use geo::Point;
use hashbrown::HashMap;
use log::{debug, info};
use petgraph::graph::UnGraph;
use serde::{Deserialize, Serialize};

use crate::geodesic::GeodesicEngine;
use crate::model::{StreetEdge, StreetGraph, StreetNode};
use crate::{Error, NetworkNodeId};

/// Node of the external network description
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkNode {
    pub id: NetworkNodeId,
    pub lon: f64,
    pub lat: f64,
}

/// Edge of the external network description.
///
/// When `weight` is absent the geodesic distance between the endpoints
/// is used; suppliers with precomputed segment lengths can pass them
/// through unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkEdge {
    pub from: NetworkNodeId,
    pub to: NetworkNodeId,
    #[serde(default)]
    pub weight: Option<f64>,
}

/// In-memory street network description, as handed over by whatever
/// loader parsed the source dataset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetworkData {
    pub nodes: Vec<NetworkNode>,
    pub edges: Vec<NetworkEdge>,
}

/// Builds the street graph and its spatial index from a network
/// description.
///
/// # Errors
///
/// Returns [`Error::MalformedNetwork`] for an empty node set, duplicate
/// node IDs, non-finite coordinates, or edges referencing unknown
/// nodes. All of these are fatal: no routing is possible without a
/// valid graph.
pub fn create_street_graph(
    network: &NetworkData,
    engine: &GeodesicEngine,
) -> Result<StreetGraph, Error> {
    validate_network(network)?;

    info!(
        "Building street graph: {} nodes, {} edges",
        network.nodes.len(),
        network.edges.len()
    );

    let mut graph = UnGraph::with_capacity(network.nodes.len(), network.edges.len());
    let mut node_indices = HashMap::with_capacity(network.nodes.len());

    for node in &network.nodes {
        let geometry = Point::new(node.lon, node.lat);
        let index = graph.add_node(StreetNode {
            id: node.id,
            geometry,
        });
        if node_indices.insert(node.id, index).is_some() {
            return Err(Error::MalformedNetwork(format!(
                "duplicate node id {}",
                node.id
            )));
        }
    }

    for edge in &network.edges {
        let from = *node_indices.get(&edge.from).ok_or_else(|| {
            Error::MalformedNetwork(format!("edge references unknown node {}", edge.from))
        })?;
        let to = *node_indices.get(&edge.to).ok_or_else(|| {
            Error::MalformedNetwork(format!("edge references unknown node {}", edge.to))
        })?;

        let weight = match edge.weight {
            Some(weight) if weight.is_finite() && weight >= 0.0 => weight,
            Some(weight) => {
                return Err(Error::MalformedNetwork(format!(
                    "invalid edge weight {weight} on {} -> {}",
                    edge.from, edge.to
                )));
            }
            // A geodesic failure here means the node coordinates are
            // unusable, which is fatal at construction time.
            None => engine
                .inverse(graph[from].geometry, graph[to].geometry)
                .map_err(|e| Error::MalformedNetwork(e.to_string()))?,
        };

        graph.add_edge(from, to, StreetEdge { weight });
    }

    let streets = StreetGraph::from_graph(graph);
    debug!(
        "Street graph ready: {} nodes, {} edges",
        streets.node_count(),
        streets.edge_count()
    );
    Ok(streets)
}

fn validate_network(network: &NetworkData) -> Result<(), Error> {
    if network.nodes.is_empty() {
        return Err(Error::MalformedNetwork(
            "network has no nodes".to_string(),
        ));
    }
    for node in &network.nodes {
        if !node.lon.is_finite() || !node.lat.is_finite() || node.lat.abs() > 90.0 {
            return Err(Error::MalformedNetwork(format!(
                "node {} has invalid coordinates ({}, {})",
                node.id, node.lon, node.lat
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> GeodesicEngine {
        GeodesicEngine::default()
    }

    fn simple_network() -> NetworkData {
        NetworkData {
            nodes: vec![
                NetworkNode {
                    id: 1,
                    lon: -2.24,
                    lat: 53.48,
                },
                NetworkNode {
                    id: 2,
                    lon: -2.23,
                    lat: 53.48,
                },
            ],
            edges: vec![NetworkEdge {
                from: 1,
                to: 2,
                weight: None,
            }],
        }
    }

    #[test]
    fn builds_graph_with_geodesic_weights() {
        let streets = create_street_graph(&simple_network(), &engine()).unwrap();
        assert_eq!(streets.node_count(), 2);
        assert_eq!(streets.edge_count(), 1);

        let edge = streets.graph.edge_indices().next().unwrap();
        let weight = streets.graph[edge].weight;
        // ~0.01 degrees of longitude at 53.5N is roughly 660 m.
        assert!(weight > 500.0 && weight < 800.0, "weight was {weight}");
    }

    #[test]
    fn precomputed_weights_pass_through() {
        let mut network = simple_network();
        network.edges[0].weight = Some(123.5);
        let streets = create_street_graph(&network, &engine()).unwrap();
        let edge = streets.graph.edge_indices().next().unwrap();
        assert_eq!(streets.graph[edge].weight, 123.5);
    }

    #[test]
    fn empty_node_set_is_fatal() {
        let network = NetworkData::default();
        assert!(matches!(
            create_street_graph(&network, &engine()),
            Err(Error::MalformedNetwork(_))
        ));
    }

    #[test]
    fn unknown_edge_endpoint_is_fatal() {
        let mut network = simple_network();
        network.edges.push(NetworkEdge {
            from: 1,
            to: 99,
            weight: None,
        });
        assert!(matches!(
            create_street_graph(&network, &engine()),
            Err(Error::MalformedNetwork(_))
        ));
    }

    #[test]
    fn duplicate_node_id_is_fatal() {
        let mut network = simple_network();
        network.nodes.push(NetworkNode {
            id: 1,
            lon: 0.0,
            lat: 0.0,
        });
        assert!(matches!(
            create_street_graph(&network, &engine()),
            Err(Error::MalformedNetwork(_))
        ));
    }

    #[test]
    fn negative_weight_is_fatal() {
        let mut network = simple_network();
        network.edges[0].weight = Some(-1.0);
        assert!(matches!(
            create_street_graph(&network, &engine()),
            Err(Error::MalformedNetwork(_))
        ));
    }
}
