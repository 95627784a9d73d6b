//! Street graph with spatial index and connectivity labels
//!
//! The graph is built once by the loading layer and is read-only
//! afterwards. Connected-component labels are computed at build time so
//! reachability between two nodes is an O(1) lookup, never a search.

use geo::Point;
use petgraph::graph::{Edges, NodeIndex, UnGraph};
use petgraph::Undirected;
use petgraph::unionfind::UnionFind;
use rstar::{AABB, PointDistance, RTree, RTreeObject};

use super::{StreetEdge, StreetNode};
use crate::Error;

/// R-tree entry: node coordinates plus the graph index it resolves to
#[derive(Debug, Clone)]
pub struct IndexedPoint {
    pub geometry: Point<f64>,
    pub node: NodeIndex,
}

impl RTreeObject for IndexedPoint {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point([self.geometry.x(), self.geometry.y()])
    }
}

impl PointDistance for IndexedPoint {
    // Squared lon/lat distance. Fine for nearest-node ranking at city
    // scale; real distances always go through the geodesic engine.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.geometry.x() - point[0];
        let dy = self.geometry.y() - point[1];
        dx * dx + dy * dy
    }
}

/// Walkable street network: undirected weighted graph, R-tree index and
/// precomputed component labels.
#[derive(Debug, Clone)]
pub struct StreetGraph {
    pub graph: UnGraph<StreetNode, StreetEdge>,
    rtree: RTree<IndexedPoint>,
    components: Vec<usize>,
}

impl StreetGraph {
    /// Wraps a finished node/edge graph, bulk-loading the spatial index
    /// and labelling connected components.
    pub(crate) fn from_graph(graph: UnGraph<StreetNode, StreetEdge>) -> Self {
        let entries: Vec<IndexedPoint> = graph
            .node_indices()
            .map(|node| IndexedPoint {
                geometry: graph[node].geometry,
                node,
            })
            .collect();
        let rtree = RTree::bulk_load(entries);

        let mut union_find = UnionFind::new(graph.node_count());
        for edge in graph.edge_indices() {
            if let Some((a, b)) = graph.edge_endpoints(edge) {
                union_find.union(a.index(), b.index());
            }
        }
        let components = (0..graph.node_count())
            .map(|i| union_find.find(i))
            .collect();

        Self {
            graph,
            rtree,
            components,
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn node(&self, index: NodeIndex) -> Option<&StreetNode> {
        self.graph.node_weight(index)
    }

    /// Coordinates of a graph node
    pub fn node_point(&self, index: NodeIndex) -> Option<Point<f64>> {
        self.graph.node_weight(index).map(|node| node.geometry)
    }

    /// Edges incident to `node`; `EdgeRef::target()` is the neighbor
    pub fn edges(&self, node: NodeIndex) -> Edges<'_, StreetEdge, Undirected> {
        self.graph.edges(node)
    }

    /// Whether `a` and `b` lie in the same connected component
    pub fn is_reachable(&self, a: NodeIndex, b: NodeIndex) -> bool {
        match (
            self.components.get(a.index()),
            self.components.get(b.index()),
        ) {
            (Some(ca), Some(cb)) => ca == cb,
            _ => false,
        }
    }

    /// Returns the graph node closest to an arbitrary geographic point.
    ///
    /// Equidistant ties are broken deterministically: the node with the
    /// lowest graph index wins.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoPointsFound`] if the graph has no nodes.
    pub fn nearest_node(&self, point: Point<f64>) -> Result<NodeIndex, Error> {
        let query = [point.x(), point.y()];
        let mut candidates = self.rtree.nearest_neighbor_iter_with_distance_2(&query);

        let (first, best_distance) = candidates.next().ok_or(Error::NoPointsFound)?;
        let mut best = first.node;
        for (entry, distance) in candidates {
            if distance > best_distance {
                break;
            }
            if entry.node < best {
                best = entry.node;
            }
        }
        Ok(best)
    }
}
