use geo::{Centroid, Point, Polygon};
use hashbrown::HashMap;
use log::{debug, warn};

use crate::filter::CandidateFilter;
use crate::model::Candidate;

/// Geometry of a source feature. Polygons are reduced to their
/// centroids when they become candidates, which makes distance
/// measurement and display placement uniform.
#[derive(Debug, Clone)]
pub enum FeatureGeometry {
    Point(Point<f64>),
    Polygon(Polygon<f64>),
}

/// A raw feature as parsed by an external loader: geometry plus tags.
#[derive(Debug, Clone)]
pub struct Feature {
    pub geometry: FeatureGeometry,
    pub tags: HashMap<String, String>,
}

impl Feature {
    pub fn point(point: Point<f64>, tags: HashMap<String, String>) -> Self {
        Self {
            geometry: FeatureGeometry::Point(point),
            tags,
        }
    }

    pub fn polygon(polygon: Polygon<f64>, tags: HashMap<String, String>) -> Self {
        Self {
            geometry: FeatureGeometry::Polygon(polygon),
            tags,
        }
    }
}

/// Derives the candidate set from raw features: the union of native
/// point features and polygon centroids, restricted to those matching
/// the category predicate.
///
/// Degenerate polygons without a centroid are skipped with a warning;
/// an empty result is not an error.
pub fn collect_candidates(features: Vec<Feature>, filter: &dyn CandidateFilter) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    for feature in features {
        let geometry = match feature.geometry {
            FeatureGeometry::Point(point) => point,
            FeatureGeometry::Polygon(polygon) => match polygon.centroid() {
                Some(centroid) => centroid,
                None => {
                    warn!("Skipping degenerate polygon feature with no centroid");
                    continue;
                }
            },
        };

        let candidate = Candidate::new(geometry, feature.tags);
        if filter.matches(&candidate) {
            candidates.push(candidate);
        }
    }

    debug!("Collected {} candidates", candidates.len());
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::TagEquals;
    use geo::polygon;

    fn cafe_tags() -> HashMap<String, String> {
        let mut tags = HashMap::new();
        tags.insert("amenity".to_string(), "cafe".to_string());
        tags
    }

    #[test]
    fn unions_points_and_polygon_centroids() {
        let square = polygon![
            (x: 0.0, y: 0.0),
            (x: 2.0, y: 0.0),
            (x: 2.0, y: 2.0),
            (x: 0.0, y: 2.0),
        ];
        let features = vec![
            Feature::point(Point::new(5.0, 5.0), cafe_tags()),
            Feature::polygon(square, cafe_tags()),
        ];

        let candidates = collect_candidates(features, &TagEquals::cafes());
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].geometry, Point::new(5.0, 5.0));
        assert_eq!(candidates[1].geometry, Point::new(1.0, 1.0));
    }

    #[test]
    fn predicate_rejects_other_categories() {
        let mut pub_tags = HashMap::new();
        pub_tags.insert("amenity".to_string(), "pub".to_string());
        let features = vec![
            Feature::point(Point::new(0.0, 0.0), cafe_tags()),
            Feature::point(Point::new(1.0, 1.0), pub_tags),
        ];

        let candidates = collect_candidates(features, &TagEquals::cafes());
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].tag("amenity"), Some("cafe"));
    }

    #[test]
    fn empty_input_yields_empty_set() {
        assert!(collect_candidates(Vec::new(), &TagEquals::cafes()).is_empty());
    }
}
