//! Haversine great-circle distance.
//!
//! Straight-line distance on a spherical Earth; ignores roads. Every
//! distance comparison in the crate goes through this metric so the
//! sequencer's ordering stays consistent.

use crate::geo::GeoPoint;

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Kilometers per statute mile.
const KM_PER_MILE: f64 = 1.60934;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceUnit {
    Kilometers,
    Miles,
}

/// Great-circle distance between two points.
///
/// Symmetric, non-negative, zero for equal points.
pub fn distance(from: GeoPoint, to: GeoPoint, unit: DistanceUnit) -> f64 {
    let lat1_rad = from.latitude.to_radians();
    let lat2_rad = to.latitude.to_radians();
    let delta_lat = (to.latitude - from.latitude).to_radians();
    let delta_lng = (to.longitude - from.longitude).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();
    let km = EARTH_RADIUS_KM * c;

    match unit {
        DistanceUnit::Kilometers => km,
        DistanceUnit::Miles => km / KM_PER_MILE,
    }
}
