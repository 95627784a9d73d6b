//! GeoJSON hand-off for rendering collaborators

use geo::{LineString, Point};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value as GeoJsonValue};
use serde_json::json;

use crate::Error;
use crate::algo::destinations::{DestinationOutcome, DestinationRoute};
use crate::algo::walkshed::WalkshedResult;

impl WalkshedResult {
    /// Converts the walkable set to a `GeoJSON` `FeatureCollection` of
    /// point features carrying the network distance and source tags.
    /// Rejected candidates are not included; they are diagnostics, not
    /// display data.
    pub fn to_geojson(&self) -> FeatureCollection {
        let features = self
            .walkable
            .iter()
            .map(|route| {
                let mut properties = JsonObject::new();
                properties.insert("distance".to_string(), json!(route.distance));
                for (key, value) in &route.candidate.tags {
                    properties.insert(key.clone(), json!(value));
                }
                feature(
                    point_geometry(route.candidate.geometry),
                    properties,
                )
            })
            .collect();

        FeatureCollection {
            features,
            bbox: None,
            foreign_members: None,
        }
    }

    pub fn to_geojson_string(&self) -> Result<String, Error> {
        serde_json::to_string(&self.to_geojson()).map_err(|e| Error::GeoJsonError(e.to_string()))
    }
}

impl DestinationRoute {
    /// One feature per destination. Reachable routes become line
    /// features; unreachable or failed ones keep their label and flag
    /// so the caller sees what happened.
    pub fn to_feature(&self) -> Feature {
        let mut properties = JsonObject::new();
        properties.insert("label".to_string(), json!(self.label));
        properties.insert("reachable".to_string(), json!(self.is_reachable()));

        let geometry = match &self.outcome {
            DestinationOutcome::Reachable {
                geometry, distance, ..
            } => {
                properties.insert("distance".to_string(), json!(distance));
                Some(line_geometry(geometry))
            }
            DestinationOutcome::Unreachable => None,
            DestinationOutcome::Failed(message) => {
                properties.insert("error".to_string(), json!(message));
                None
            }
        };

        feature_or_empty(geometry, properties)
    }
}

/// Collects named-destination routes into a single collection.
pub fn destination_routes_to_geojson(routes: &[DestinationRoute]) -> FeatureCollection {
    FeatureCollection {
        features: routes.iter().map(DestinationRoute::to_feature).collect(),
        bbox: None,
        foreign_members: None,
    }
}

fn point_geometry(point: Point<f64>) -> Geometry {
    Geometry::new(GeoJsonValue::from(&point))
}

fn line_geometry(line: &LineString<f64>) -> Geometry {
    Geometry::new(GeoJsonValue::from(line))
}

fn feature(geometry: Geometry, properties: JsonObject) -> Feature {
    feature_or_empty(Some(geometry), properties)
}

fn feature_or_empty(geometry: Option<Geometry>, properties: JsonObject) -> Feature {
    Feature {
        bbox: None,
        geometry,
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}
