//! Data model for street-network walkability analysis
//!
//! Contains the street graph, its spatial index, and point-of-interest
//! value types.

pub mod poi;
pub mod streets;

pub use poi::{Candidate, NamedDestination};
pub use streets::network::StreetGraph;
pub use streets::{IndexedPoint, StreetEdge, StreetNode};
