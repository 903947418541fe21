//! Route geometry as a decoded coordinate sequence.
//!
//! The directions service exchanges geometry as a GeoJSON LineString with
//! longitude-first pairs. Decoding happens at that boundary; the rest of
//! the crate works with latitude/longitude points.

use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

/// The drivable path returned by the directions service.
///
/// Replaced wholesale on each successful routing cycle; never patched
/// incrementally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteGeometry {
    points: Vec<GeoPoint>,
}

impl RouteGeometry {
    pub fn new(points: Vec<GeoPoint>) -> Self {
        Self { points }
    }

    /// Builds geometry from GeoJSON-ordered `[longitude, latitude]` pairs.
    pub fn from_lon_lat(coordinates: Vec<[f64; 2]>) -> Self {
        let points = coordinates
            .into_iter()
            .map(|[lng, lat]| GeoPoint::new(lat, lng))
            .collect();
        Self { points }
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    pub fn into_points(self) -> Vec<GeoPoint> {
        self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
