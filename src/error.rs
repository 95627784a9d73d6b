use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No nearby nodes found for snapping")]
    NoPointsFound,
    #[error("Invalid node index")]
    InvalidNodeIndex,
    #[error("Malformed network data: {0}")]
    MalformedNetwork(String),
    #[error("Degenerate geodesic input: {0}")]
    DegenerateGeodesic(String),
    #[error("Unknown ellipsoid: {0}")]
    UnknownEllipsoid(String),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
}
