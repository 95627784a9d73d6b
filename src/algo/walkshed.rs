//! Walkability classification pipeline
//!
//! candidates -> category filter -> bounding-box prefilter -> nearest
//! node -> shortest path -> cumulative geodesic distance -> threshold.
//! Per-candidate routing runs in parallel over the read-only graph; a
//! single candidate's failure never aborts the batch.

use geo::{LineString, Point};
use itertools::Itertools;
use log::{debug, info};
use petgraph::graph::NodeIndex;
use rayon::prelude::*;

use crate::Error;
use crate::algo::prefilter::prefilter;
use crate::filter::CandidateFilter;
use crate::geodesic::GeodesicEngine;
use crate::loading::WalkshedConfig;
use crate::model::{Candidate, StreetGraph};
use crate::routing::{RouteOutcome, route};

/// A candidate together with its resolved network route.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub candidate: Candidate,
    /// Graph nodes from the origin to the candidate's snap node
    pub path: Vec<NodeIndex>,
    /// Path coordinates, for display collaborators
    pub geometry: LineString<f64>,
    /// Cumulative geodesic path length in meters
    pub distance: f64,
}

/// Why a candidate was left out of the walkable set.
#[derive(Debug, Clone, PartialEq)]
pub enum RejectReason {
    /// Routed fine, but the network distance reached the threshold
    TooFar(f64),
    /// Origin and candidate lie in disconnected components
    Unreachable,
    /// Geodesic computation failed for this candidate only
    Geodesic(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RejectedCandidate {
    pub candidate: Candidate,
    pub reason: RejectReason,
}

/// Aggregate pipeline output: the walkable set plus the per-candidate
/// rejection diagnostics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WalkshedResult {
    pub walkable: Vec<Route>,
    pub rejected: Vec<RejectedCandidate>,
}

impl WalkshedResult {
    pub fn is_empty(&self) -> bool {
        self.walkable.is_empty() && self.rejected.is_empty()
    }
}

/// Reconstructs the ordered coordinate sequence of a path.
pub fn path_geometry(graph: &StreetGraph, path: &[NodeIndex]) -> Result<LineString<f64>, Error> {
    let coords = path
        .iter()
        .map(|&node| {
            graph
                .node_point(node)
                .map(|point| point.0)
                .ok_or(Error::InvalidNodeIndex)
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(LineString::new(coords))
}

/// Sums the inverse geodesic distance over every consecutive
/// coordinate pair of a path geometry.
pub fn path_distance(engine: &GeodesicEngine, geometry: &LineString<f64>) -> Result<f64, Error> {
    geometry
        .points()
        .tuple_windows()
        .map(|(a, b)| engine.inverse(a, b))
        .sum()
}

/// Runs the full walkability pipeline for one origin. All geodesic
/// work uses an engine built from the configured ellipsoid.
///
/// Failures from the prefilter or the origin snap are fatal (nothing
/// can be classified without them); everything after that point is
/// isolated per candidate and reported in the aggregate result.
///
/// An empty candidate set is not an error and yields an empty result.
pub fn compute_walkshed(
    streets: &StreetGraph,
    origin: Point<f64>,
    candidates: Vec<Candidate>,
    filter: &dyn CandidateFilter,
    config: &WalkshedConfig,
) -> Result<WalkshedResult, Error> {
    let engine = config.engine();
    let matching: Vec<Candidate> = candidates
        .into_iter()
        .filter(|candidate| filter.matches(candidate))
        .collect();
    let nearby = prefilter(&engine, origin, config.prefilter_radius, matching)?;
    info!("{} candidates within the prefilter box", nearby.len());

    let origin_node = streets.nearest_node(origin)?;
    debug!("Origin snapped to node {}", origin_node.index());

    let mut result = WalkshedResult::default();
    let classified: Vec<_> = nearby
        .into_par_iter()
        .map(|candidate| {
            classify_candidate(
                streets,
                &engine,
                origin_node,
                candidate,
                config.max_walk_distance,
            )
        })
        .collect();

    for outcome in classified {
        match outcome {
            Ok(walkable) => result.walkable.push(walkable),
            Err(rejected) => result.rejected.push(rejected),
        }
    }

    info!(
        "{} walkable candidates, {} rejected",
        result.walkable.len(),
        result.rejected.len()
    );
    Ok(result)
}

fn classify_candidate(
    streets: &StreetGraph,
    engine: &GeodesicEngine,
    origin_node: NodeIndex,
    candidate: Candidate,
    max_walk_distance: f64,
) -> Result<Route, RejectedCandidate> {
    let reject = |candidate: Candidate, reason: RejectReason| RejectedCandidate {
        candidate,
        reason,
    };

    let target = match streets.nearest_node(candidate.geometry) {
        Ok(target) => target,
        Err(e) => return Err(reject(candidate, RejectReason::Geodesic(e.to_string()))),
    };

    let path = match route(streets, engine, origin_node, target) {
        Ok(RouteOutcome::Path(path)) => path,
        Ok(RouteOutcome::Unreachable) => {
            return Err(reject(candidate, RejectReason::Unreachable));
        }
        Err(e) => return Err(reject(candidate, RejectReason::Geodesic(e.to_string()))),
    };

    let (geometry, distance) = match path_geometry(streets, &path)
        .and_then(|geometry| path_distance(engine, &geometry).map(|d| (geometry, d)))
    {
        Ok(resolved) => resolved,
        Err(e) => return Err(reject(candidate, RejectReason::Geodesic(e.to_string()))),
    };

    // Strictly less than: a path exactly at the threshold is not
    // walkable.
    if distance < max_walk_distance {
        Ok(Route {
            candidate,
            path,
            geometry,
            distance,
        })
    } else {
        Err(reject(candidate, RejectReason::TooFar(distance)))
    }
}
