use std::{cmp::Ordering, collections::BinaryHeap};

use hashbrown::HashMap;
use petgraph::{graph::NodeIndex, visit::EdgeRef};

use crate::Error;
use crate::geodesic::GeodesicEngine;
use crate::model::StreetGraph;

#[derive(Copy, Clone)]
struct State {
    /// Cost so far plus the geodesic lower bound to the target
    estimate: f64,
    /// Cost so far in meters
    cost: f64,
    node: NodeIndex,
}

// Min-heap by estimate (reversed from standard Rust BinaryHeap), node
// index as secondary key so tie-breaking is deterministic.
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .estimate
            .total_cmp(&self.estimate)
            .then_with(|| other.node.index().cmp(&self.node.index()))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State {}

/// A* search over the street graph, weighted by edge length in meters.
///
/// The heuristic is the straight-line geodesic distance to the target:
/// admissible and consistent, since no network path between two points
/// can be shorter than the geodesic between them.
///
/// Returns the node sequence from `start` to `goal` inclusive, or
/// `None` when the frontier empties without reaching `goal`.
pub(crate) fn astar_path(
    graph: &StreetGraph,
    engine: &GeodesicEngine,
    start: NodeIndex,
    goal: NodeIndex,
) -> Result<Option<Vec<NodeIndex>>, Error> {
    let goal_point = graph.node_point(goal).ok_or(Error::InvalidNodeIndex)?;
    let heuristic = |node: NodeIndex| -> Result<f64, Error> {
        let point = graph.node_point(node).ok_or(Error::InvalidNodeIndex)?;
        engine.inverse(point, goal_point)
    };

    let estimated_nodes = graph.node_count().min(1000);
    let mut costs: HashMap<NodeIndex, f64> = HashMap::with_capacity(estimated_nodes);
    let mut predecessors: HashMap<NodeIndex, NodeIndex> = HashMap::with_capacity(estimated_nodes);
    let mut heap = BinaryHeap::with_capacity(estimated_nodes / 4);

    heap.push(State {
        estimate: heuristic(start)?,
        cost: 0.0,
        node: start,
    });
    costs.insert(start, 0.0);

    while let Some(State { cost, node, .. }) = heap.pop() {
        if node == goal {
            return Ok(Some(reconstruct_path(&predecessors, start, goal)));
        }

        // Skip stale heap entries
        if let Some(&best) = costs.get(&node) {
            if cost > best {
                continue;
            }
        }

        for edge in graph.edges(node) {
            let next = edge.target();
            let next_cost = cost + edge.weight().length();

            match costs.entry(next) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    predecessors.insert(next, node);
                    heap.push(State {
                        estimate: next_cost + heuristic(next)?,
                        cost: next_cost,
                        node: next,
                    });
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        predecessors.insert(next, node);
                        heap.push(State {
                            estimate: next_cost + heuristic(next)?,
                            cost: next_cost,
                            node: next,
                        });
                    }
                }
            }
        }
    }

    Ok(None)
}

fn reconstruct_path(
    predecessors: &HashMap<NodeIndex, NodeIndex>,
    start: NodeIndex,
    goal: NodeIndex,
) -> Vec<NodeIndex> {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        match predecessors.get(&current) {
            Some(&previous) => {
                path.push(previous);
                current = previous;
            }
            None => break,
        }
    }
    path.reverse();
    path
}
