//! This module is responsible for turning externally loaded network and
//! feature descriptions into the read-only model structures.
//!
//! File-format I/O (shapefiles, OSM extracts) belongs to the callers;
//! everything here consumes in-memory values.

mod builder;
mod config;
mod features;

pub use builder::{NetworkData, NetworkEdge, NetworkNode, create_street_graph};
pub use config::WalkshedConfig;
pub use features::{Feature, FeatureGeometry, collect_candidates};
