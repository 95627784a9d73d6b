//! Shortest-path routing between street graph nodes

mod astar;

use log::debug;
use petgraph::graph::NodeIndex;

use crate::Error;
use crate::geodesic::GeodesicEngine;
use crate::model::StreetGraph;
use astar::astar_path;

/// Result of a routing query.
///
/// `Unreachable` is a normal outcome (the endpoints lie in different
/// graph components), not a fault.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteOutcome {
    /// Node sequence from origin to target inclusive, length >= 1
    Path(Vec<NodeIndex>),
    Unreachable,
}

impl RouteOutcome {
    pub fn is_unreachable(&self) -> bool {
        matches!(self, RouteOutcome::Unreachable)
    }

    pub fn path(&self) -> Option<&[NodeIndex]> {
        match self {
            RouteOutcome::Path(nodes) => Some(nodes),
            RouteOutcome::Unreachable => None,
        }
    }
}

/// Computes the shortest path by total edge weight between two graph
/// nodes.
///
/// Reachability is checked first with the precomputed component labels,
/// so no search is ever attempted across disconnected components.
///
/// # Errors
///
/// Returns [`Error::DegenerateGeodesic`] if the heuristic cannot be
/// evaluated for some node, and [`Error::InvalidNodeIndex`] for indices
/// outside the graph.
pub fn route(
    graph: &StreetGraph,
    engine: &GeodesicEngine,
    origin: NodeIndex,
    target: NodeIndex,
) -> Result<RouteOutcome, Error> {
    if graph.node(origin).is_none() || graph.node(target).is_none() {
        return Err(Error::InvalidNodeIndex);
    }
    if !graph.is_reachable(origin, target) {
        debug!(
            "Nodes {} and {} are in disconnected components",
            origin.index(),
            target.index()
        );
        return Ok(RouteOutcome::Unreachable);
    }

    match astar_path(graph, engine, origin, target)? {
        Some(path) => Ok(RouteOutcome::Path(path)),
        None => Ok(RouteOutcome::Unreachable),
    }
}
