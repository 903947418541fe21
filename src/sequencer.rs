//! Greedy nearest-neighbor visit ordering.

use crate::geo::{GeoPoint, PointOfInterest};
use crate::haversine::{self, DistanceUnit};

/// An ordered tour over the catalog: a permutation of the input points,
/// nearest hop first. Owned by whoever asked for it.
pub type VisitOrder = Vec<PointOfInterest>;

/// Orders `points` by repeatedly hopping to the closest unvisited point,
/// starting from `origin`.
///
/// Operates on an owned copy; the caller's slice is never mutated. Ties
/// resolve to the earliest point in input order. Quadratic in the number
/// of points, which is acceptable for the small, fixed catalog this runs
/// on; a different tour heuristic would change the output order.
pub fn order(origin: GeoPoint, points: &[PointOfInterest]) -> VisitOrder {
    let mut remaining = points.to_vec();
    let mut sequence = Vec::with_capacity(remaining.len());
    let mut current = origin;

    while !remaining.is_empty() {
        let mut nearest = 0;
        let mut nearest_km = f64::INFINITY;
        for (index, poi) in remaining.iter().enumerate() {
            let km = haversine::distance(current, poi.point, DistanceUnit::Kilometers);
            if km < nearest_km {
                nearest = index;
                nearest_km = km;
            }
        }

        let next = remaining.remove(nearest);
        current = next.point;
        sequence.push(next);
    }

    sequence
}
