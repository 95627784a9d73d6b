//! Geodesic bounding-box prefilter
//!
//! Cheaply narrows the candidate set before network routing. The box
//! corners are found with two forward geodesic calls at bearings 45°
//! and 225°, with the offset inflated by √2 so the box fully contains
//! the circle of the target radius. Over-inclusion is expected;
//! under-inclusion would be a correctness bug.

use geo::{Point, Rect};

use crate::Error;
use crate::geodesic::GeodesicEngine;
use crate::model::Candidate;

/// Builds the prefilter box around `origin` for a straight-line radius
/// of `radius` meters.
pub fn bounding_box(
    engine: &GeodesicEngine,
    origin: Point<f64>,
    radius: f64,
) -> Result<Rect<f64>, Error> {
    let offset = radius * std::f64::consts::SQRT_2;
    let bottom_left = engine.forward(origin, 225.0, offset)?;
    let top_right = engine.forward(origin, 45.0, offset)?;
    // Rect::new orders the corners, keeping min <= max on both axes.
    Ok(Rect::new(bottom_left.0, top_right.0))
}

/// Retains the candidates inside the prefilter box (boundary
/// inclusive).
pub fn prefilter(
    engine: &GeodesicEngine,
    origin: Point<f64>,
    radius: f64,
    candidates: Vec<Candidate>,
) -> Result<Vec<Candidate>, Error> {
    let bbox = bounding_box(engine, origin, radius)?;
    Ok(candidates
        .into_iter()
        .filter(|candidate| contains(&bbox, candidate.geometry))
        .collect())
}

// Closed-box containment; geo's Contains excludes the boundary, which
// would let edge candidates slip away.
fn contains(bbox: &Rect<f64>, point: Point<f64>) -> bool {
    point.x() >= bbox.min().x
        && point.x() <= bbox.max().x
        && point.y() >= bbox.min().y
        && point.y() <= bbox.max().y
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashbrown::HashMap;

    fn engine() -> GeodesicEngine {
        GeodesicEngine::default()
    }

    fn candidate_at(point: Point<f64>) -> Candidate {
        Candidate::new(point, HashMap::new())
    }

    #[test]
    fn box_corners_are_ordered() {
        let bbox = bounding_box(&engine(), Point::new(-2.24, 53.48), 2500.0).unwrap();
        assert!(bbox.min().x < bbox.max().x);
        assert!(bbox.min().y < bbox.max().y);
    }

    #[test]
    fn no_false_negatives_within_radius() {
        let e = engine();
        let origin = Point::new(-2.24, 53.48);
        let radius = 2500.0;

        // Points just inside the circle at many bearings must all pass.
        let candidates: Vec<Candidate> = (0..36)
            .map(|i| {
                let bearing = f64::from(i) * 10.0;
                candidate_at(e.forward(origin, bearing, radius * 0.999).unwrap())
            })
            .collect();

        let kept = prefilter(&e, origin, radius, candidates).unwrap();
        assert_eq!(kept.len(), 36);
    }

    #[test]
    fn far_candidates_are_excluded() {
        let e = engine();
        let origin = Point::new(-2.24, 53.48);
        let radius = 2500.0;

        // Four times the box half-width, due north: well outside.
        let far = candidate_at(e.forward(origin, 0.0, radius * 4.0).unwrap());
        let near = candidate_at(origin);

        let kept = prefilter(&e, origin, radius, vec![far, near.clone()]).unwrap();
        assert_eq!(kept, vec![near]);
    }

    #[test]
    fn empty_candidate_set_is_fine() {
        let kept = prefilter(&engine(), Point::new(0.0, 0.0), 2500.0, Vec::new()).unwrap();
        assert!(kept.is_empty());
    }
}
