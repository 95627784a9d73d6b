//! Point-of-interest value types

use geo::Point;
use hashbrown::HashMap;

/// A point of interest under consideration for the walkable set.
///
/// Candidates come from two feature sources: native point features and
/// centroids derived from polygon features. Both carry their original
/// tag metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Candidate coordinates (polygon features are reduced to centroids)
    pub geometry: Point<f64>,
    /// Source feature tags, e.g. `amenity -> cafe`
    pub tags: HashMap<String, String>,
}

impl Candidate {
    pub fn new(geometry: Point<f64>, tags: HashMap<String, String>) -> Self {
        Self { geometry, tags }
    }

    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }
}

/// A display target that is always routed to, independent of the
/// walkability threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedDestination {
    pub label: String,
    pub geometry: Point<f64>,
}

impl NamedDestination {
    pub fn new(label: impl Into<String>, geometry: Point<f64>) -> Self {
        Self {
            label: label.into(),
            geometry,
        }
    }
}
