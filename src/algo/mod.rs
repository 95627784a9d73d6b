//! Walkability algorithms: prefiltering, classification and
//! named-destination resolution

pub mod destinations;
pub mod prefilter;
pub mod to_geojson;
pub mod walkshed;
