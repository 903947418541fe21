//! Directions service HTTP adapter and request serialization.

use std::fmt;

use serde::Deserialize;

use crate::geo::{GeoPoint, PointOfInterest};
use crate::geometry::RouteGeometry;
use crate::traits::DirectionsApi;

#[derive(Debug, Clone)]
pub struct DirectionsConfig {
    pub base_url: String,
    pub profile: String,
    /// Access credential, injected here rather than read from the
    /// process environment.
    pub access_token: String,
    pub timeout_secs: u64,
}

impl Default for DirectionsConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.mapbox.com/directions/v5/mapbox".to_string(),
            profile: "driving".to_string(),
            access_token: String::new(),
            timeout_secs: 10,
        }
    }
}

/// A fully serialized directions request, ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    url: String,
}

impl RouteRequest {
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Raised when a route request cannot form a two-vertex path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestBuildError {
    /// Path vertices available (origin included).
    pub vertices: usize,
}

impl fmt::Display for RequestBuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "directions request needs at least two path vertices, got {}",
            self.vertices
        )
    }
}

impl std::error::Error for RequestBuildError {}

/// Serializes an origin plus a visit order into one directions request.
///
/// No I/O happens here.
#[derive(Debug, Clone)]
pub struct RouteRequestBuilder {
    config: DirectionsConfig,
}

impl RouteRequestBuilder {
    pub fn new(config: DirectionsConfig) -> Self {
        Self { config }
    }

    /// Builds the request for `origin` followed by each ordered point.
    ///
    /// The coordinate path is longitude-first, `;`-separated, with no
    /// trailing separator. An empty `order` is a build error: a directions
    /// query needs the origin plus at least one destination.
    pub fn build(
        &self,
        origin: GeoPoint,
        order: &[PointOfInterest],
    ) -> Result<RouteRequest, RequestBuildError> {
        if order.is_empty() {
            return Err(RequestBuildError { vertices: 1 });
        }

        let path = std::iter::once(origin)
            .chain(order.iter().map(|poi| poi.point))
            .map(|point| format!("{},{}", point.longitude, point.latitude))
            .collect::<Vec<_>>()
            .join(";");

        let url = format!(
            "{}/{}/{}?access_token={}&geometries=geojson&overview=full",
            self.config.base_url, self.config.profile, path, self.config.access_token
        );

        Ok(RouteRequest { url })
    }
}

#[derive(Debug)]
pub enum DirectionsError {
    /// Transport failure, non-success status, or a malformed response body.
    Http(reqwest::Error),
    /// The service answered with an empty `routes` array.
    NoRouteFound,
}

impl From<reqwest::Error> for DirectionsError {
    fn from(err: reqwest::Error) -> Self {
        DirectionsError::Http(err)
    }
}

impl fmt::Display for DirectionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectionsError::Http(err) => write!(f, "directions service error: {}", err),
            DirectionsError::NoRouteFound => write!(f, "no route found"),
        }
    }
}

impl std::error::Error for DirectionsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DirectionsError::Http(err) => Some(err),
            DirectionsError::NoRouteFound => None,
        }
    }
}

/// Blocking Mapbox Directions v5 client.
#[derive(Debug, Clone)]
pub struct MapboxDirections {
    client: reqwest::blocking::Client,
}

impl MapboxDirections {
    pub fn new(config: &DirectionsConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client })
    }
}

impl DirectionsApi for MapboxDirections {
    fn route(&self, request: &RouteRequest) -> Result<RouteGeometry, DirectionsError> {
        tracing::debug!("requesting driving directions");

        let response = self
            .client
            .get(request.url())
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<DirectionsResponse>())?;

        let route = response
            .routes
            .into_iter()
            .next()
            .ok_or(DirectionsError::NoRouteFound)?;

        Ok(RouteGeometry::from_lon_lat(route.geometry.coordinates))
    }
}

#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    routes: Vec<DirectionsRoute>,
}

#[derive(Debug, Deserialize)]
struct DirectionsRoute {
    geometry: LineString,
}

#[derive(Debug, Deserialize)]
struct LineString {
    coordinates: Vec<[f64; 2]>,
}
