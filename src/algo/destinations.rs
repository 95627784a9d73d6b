//! Named-destination resolution
//!
//! A handful of explicitly requested targets are always routed from
//! the origin, whatever their distance. Outcomes are reported per
//! destination: the caller asked for these, so an unreachable or
//! failed one is surfaced rather than dropped.

use geo::{LineString, Point};
use log::info;
use petgraph::graph::NodeIndex;

use crate::Error;
use crate::algo::walkshed::{path_distance, path_geometry};
use crate::geodesic::GeodesicEngine;
use crate::model::{NamedDestination, StreetGraph};
use crate::routing::{RouteOutcome, route};

#[derive(Debug, Clone, PartialEq)]
pub enum DestinationOutcome {
    Reachable {
        path: Vec<NodeIndex>,
        geometry: LineString<f64>,
        distance: f64,
    },
    /// Destination lies in a disconnected component
    Unreachable,
    /// Geodesic computation failed for this destination
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DestinationRoute {
    pub label: String,
    pub outcome: DestinationOutcome,
}

impl DestinationRoute {
    pub fn is_reachable(&self) -> bool {
        matches!(self.outcome, DestinationOutcome::Reachable { .. })
    }
}

/// Routes from the origin to every named destination, ignoring the
/// walkability threshold. Output order follows the input order.
///
/// # Errors
///
/// Only the origin snap is fatal; per-destination failures land in the
/// corresponding [`DestinationOutcome`].
pub fn resolve_destinations(
    streets: &StreetGraph,
    engine: &GeodesicEngine,
    origin: Point<f64>,
    destinations: &[NamedDestination],
) -> Result<Vec<DestinationRoute>, Error> {
    let origin_node = streets.nearest_node(origin)?;

    let routes = destinations
        .iter()
        .map(|destination| DestinationRoute {
            label: destination.label.clone(),
            outcome: resolve_one(streets, engine, origin_node, destination),
        })
        .collect::<Vec<_>>();

    info!(
        "Resolved {} of {} named destinations",
        routes.iter().filter(|r| r.is_reachable()).count(),
        routes.len()
    );
    Ok(routes)
}

fn resolve_one(
    streets: &StreetGraph,
    engine: &GeodesicEngine,
    origin_node: NodeIndex,
    destination: &NamedDestination,
) -> DestinationOutcome {
    let target = match streets.nearest_node(destination.geometry) {
        Ok(target) => target,
        Err(e) => return DestinationOutcome::Failed(e.to_string()),
    };

    let path = match route(streets, engine, origin_node, target) {
        Ok(RouteOutcome::Path(path)) => path,
        Ok(RouteOutcome::Unreachable) => return DestinationOutcome::Unreachable,
        Err(e) => return DestinationOutcome::Failed(e.to_string()),
    };

    match path_geometry(streets, &path)
        .and_then(|geometry| path_distance(engine, &geometry).map(|d| (geometry, d)))
    {
        Ok((geometry, distance)) => DestinationOutcome::Reachable {
            path,
            geometry,
            distance,
        },
        Err(e) => DestinationOutcome::Failed(e.to_string()),
    }
}
