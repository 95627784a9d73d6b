//! Street-network walkability analysis.
//!
//! Given an origin, a set of point-of-interest candidates and a street
//! network, this crate determines which candidates are reachable on
//! foot within a maximum network distance, and computes unconditional
//! routes to a small list of named destinations for display.
//!
//! The pipeline runs candidates through a geodesic bounding-box
//! prefilter, snaps the survivors to the street graph with an R-tree,
//! routes each one with A* (geodesic straight-line heuristic) and sums
//! the ellipsoidal length of the resulting path against the threshold.
//!
//! File-format I/O and rendering are external collaborators: the crate
//! consumes in-memory network and feature descriptions and hands back
//! typed results plus GeoJSON.

pub mod algo;
mod error;
pub mod filter;
pub mod geodesic;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;

/// External node identifier type used by network descriptions
pub type NetworkNodeId = i64;

/// Default maximum network walking distance in meters: a 30-minute
/// walk on flat terrain per Naismith's rule.
pub const DEFAULT_MAX_WALK_DISTANCE: f64 = 2500.0;

/// Default straight-line radius for the bounding-box prefilter, meters
pub const DEFAULT_PREFILTER_RADIUS: f64 = 2500.0;

/// Default category predicate value (`amenity` tag)
pub const DEFAULT_CATEGORY: &str = "cafe";
