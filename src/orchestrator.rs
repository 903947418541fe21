//! One-shot route computation cycle.
//!
//! Coordinates sequencing, request building, and the single directions
//! call, then publishes the result for the presentation layer.

use std::fmt;

use serde::Serialize;

use crate::directions::{DirectionsConfig, DirectionsError, RequestBuildError, RouteRequestBuilder};
use crate::geo::{GeoPoint, PointOfInterest};
use crate::geometry::RouteGeometry;
use crate::sequencer::{self, VisitOrder};
use crate::traits::{DirectionsApi, PositionError, PositionProvider};

/// Where the current cycle stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleState {
    Idle,
    Ordering,
    Requesting,
    /// Terminal for the session; later origin updates are ignored.
    Published,
}

/// What the presentation layer consumes: the visit order for markers and
/// the route geometry for the path line. Replaced as one value, never
/// observed half-updated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PublishedRoute {
    pub order: VisitOrder,
    pub geometry: RouteGeometry,
}

/// Errors recovered at the orchestrator boundary. Each one ends the
/// current cycle back at `Idle`; nothing partial is published and no
/// retry is attempted.
#[derive(Debug)]
pub enum RouteError {
    GeolocationUnavailable(PositionError),
    RequestBuild(RequestBuildError),
    DirectionsService(DirectionsError),
    NoRouteFound,
}

impl From<RequestBuildError> for RouteError {
    fn from(err: RequestBuildError) -> Self {
        RouteError::RequestBuild(err)
    }
}

impl From<DirectionsError> for RouteError {
    fn from(err: DirectionsError) -> Self {
        match err {
            DirectionsError::NoRouteFound => RouteError::NoRouteFound,
            other => RouteError::DirectionsService(other),
        }
    }
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::GeolocationUnavailable(err) => {
                write!(f, "unable to compute route: {}", err)
            }
            RouteError::RequestBuild(err) => write!(f, "unable to compute route: {}", err),
            RouteError::DirectionsService(err) => write!(f, "unable to compute route: {}", err),
            RouteError::NoRouteFound => write!(f, "unable to compute route: no route found"),
        }
    }
}

impl std::error::Error for RouteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RouteError::GeolocationUnavailable(err) => Some(err),
            RouteError::RequestBuild(err) => Some(err),
            RouteError::DirectionsService(err) => Some(err),
            RouteError::NoRouteFound => None,
        }
    }
}

/// Drives one order → request → publish cycle over the catalog.
pub struct RouteOrchestrator<D> {
    catalog: Vec<PointOfInterest>,
    builder: RouteRequestBuilder,
    directions: D,
    state: CycleState,
    published: Option<PublishedRoute>,
}

impl<D: DirectionsApi> RouteOrchestrator<D> {
    pub fn new(catalog: Vec<PointOfInterest>, config: DirectionsConfig, directions: D) -> Self {
        Self {
            catalog,
            builder: RouteRequestBuilder::new(config),
            directions,
            state: CycleState::Idle,
            published: None,
        }
    }

    pub fn state(&self) -> CycleState {
        self.state
    }

    /// The last successfully computed route, if any.
    pub fn published(&self) -> Option<&PublishedRoute> {
        self.published.as_ref()
    }

    /// Acquires a position fix and runs the cycle with it.
    ///
    /// Provider failure aborts before the cycle starts; the state stays
    /// `Idle`.
    pub fn acquire<P: PositionProvider>(&mut self, provider: &P) -> Result<(), RouteError> {
        let origin = provider
            .current_position()
            .map_err(RouteError::GeolocationUnavailable)?;
        self.origin_acquired(origin)
    }

    /// Runs one full cycle for `origin`.
    ///
    /// Once a route has been published the session is done: further origin
    /// updates are dropped without another service call. A failed cycle
    /// returns to `Idle`, leaves any previously published route as is, and
    /// the next origin acquisition may try again.
    pub fn origin_acquired(&mut self, origin: GeoPoint) -> Result<(), RouteError> {
        if self.state == CycleState::Published {
            tracing::debug!("route already published, ignoring origin update");
            return Ok(());
        }

        self.state = CycleState::Ordering;
        let order = sequencer::order(origin, &self.catalog);

        self.state = CycleState::Requesting;
        match self.request_route(origin, &order) {
            Ok(geometry) => {
                tracing::info!(stops = order.len(), "route published");
                self.published = Some(PublishedRoute { order, geometry });
                self.state = CycleState::Published;
                Ok(())
            }
            Err(err) => {
                tracing::warn!("route cycle failed: {}", err);
                self.state = CycleState::Idle;
                Err(err)
            }
        }
    }

    fn request_route(
        &self,
        origin: GeoPoint,
        order: &[PointOfInterest],
    ) -> Result<RouteGeometry, RouteError> {
        let request = self.builder.build(origin, order)?;
        let geometry = self.directions.route(&request)?;
        Ok(geometry)
    }
}
