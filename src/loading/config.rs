use serde::{Deserialize, Serialize};

use crate::geodesic::{Ellipsoid, GeodesicEngine};
use crate::{DEFAULT_MAX_WALK_DISTANCE, DEFAULT_PREFILTER_RADIUS};

/// Configuration for a walkshed computation.
///
/// The prefilter radius and the network-distance threshold are the same
/// value by default (both derive from the same 30-minute Naismith
/// estimate) but are deliberately independent knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalkshedConfig {
    /// Maximum network walking distance in meters (strict upper bound)
    pub max_walk_distance: f64,
    /// Straight-line radius for the bounding-box prefilter, meters
    pub prefilter_radius: f64,
    /// Reference ellipsoid the pipeline's geodesic engine is built on
    pub ellipsoid: Ellipsoid,
}

impl WalkshedConfig {
    /// Geodesic engine on this configuration's ellipsoid; the pipeline
    /// derives its engine from here so the knob cannot drift from the
    /// computation.
    pub fn engine(&self) -> GeodesicEngine {
        GeodesicEngine::new(self.ellipsoid)
    }
}

impl Default for WalkshedConfig {
    fn default() -> Self {
        Self {
            max_walk_distance: DEFAULT_MAX_WALK_DISTANCE,
            prefilter_radius: DEFAULT_PREFILTER_RADIUS,
            ellipsoid: Ellipsoid::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_naismith_estimate() {
        let config = WalkshedConfig::default();
        assert_eq!(config.max_walk_distance, 2500.0);
        assert_eq!(config.prefilter_radius, 2500.0);
        assert_eq!(config.ellipsoid, Ellipsoid::Airy1830);
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = WalkshedConfig {
            max_walk_distance: 1800.0,
            prefilter_radius: 2000.0,
            ellipsoid: Ellipsoid::Wgs84,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: WalkshedConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.max_walk_distance, 1800.0);
        assert_eq!(back.ellipsoid, Ellipsoid::Wgs84);
    }
}
