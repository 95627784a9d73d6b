//! Street network components - nodes and edges

use geo::Point;

use crate::NetworkNodeId;

/// Street graph node
#[derive(Debug, Clone)]
pub struct StreetNode {
    /// External (source dataset) ID of the node
    pub id: NetworkNodeId,
    /// Node coordinates
    pub geometry: Point<f64>,
}

/// Street graph edge (street segment), undirected
#[derive(Debug, Clone)]
pub struct StreetEdge {
    /// Geodesic segment length in meters
    pub weight: f64,
}

impl StreetEdge {
    pub fn length(&self) -> f64 {
        self.weight
    }
}
