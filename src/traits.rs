//! Collaborator seams for the tour planner.
//!
//! The platform position source and the routing service sit behind traits
//! so the orchestrator can be exercised without a device or a network.

use std::fmt;

use crate::directions::{DirectionsError, RouteRequest};
use crate::geo::GeoPoint;
use crate::geometry::RouteGeometry;

/// Source of the current subject position (device geolocation in the app).
pub trait PositionProvider {
    fn current_position(&self) -> Result<GeoPoint, PositionError>;
}

/// Why a position fix could not be produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    PermissionDenied,
    Unavailable(String),
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::PermissionDenied => write!(f, "geolocation permission denied"),
            PositionError::Unavailable(reason) => {
                write!(f, "geolocation unavailable: {}", reason)
            }
        }
    }
}

impl std::error::Error for PositionError {}

/// Driving-directions service: one built request in, route geometry out.
pub trait DirectionsApi {
    fn route(&self, request: &RouteRequest) -> Result<RouteGeometry, DirectionsError>;
}
