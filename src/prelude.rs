pub use crate::{
    DEFAULT_CATEGORY, DEFAULT_MAX_WALK_DISTANCE, DEFAULT_PREFILTER_RADIUS, Error, NetworkNodeId,
};

// Re-export key components
pub use crate::algo::destinations::{DestinationOutcome, DestinationRoute, resolve_destinations};
pub use crate::algo::prefilter::{bounding_box, prefilter};
pub use crate::algo::to_geojson::destination_routes_to_geojson;
pub use crate::algo::walkshed::{
    RejectReason, RejectedCandidate, Route, WalkshedResult, compute_walkshed, path_distance,
    path_geometry,
};
pub use crate::filter::{AllOf, CandidateFilter, TagEquals};
pub use crate::geodesic::{Ellipsoid, GeodesicEngine};
pub use crate::loading::{
    Feature, FeatureGeometry, NetworkData, NetworkEdge, NetworkNode, WalkshedConfig,
    collect_candidates, create_street_graph,
};
pub use crate::model::{Candidate, NamedDestination, StreetEdge, StreetGraph, StreetNode};
pub use crate::routing::{RouteOutcome, route};
