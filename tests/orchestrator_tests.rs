//! Orchestrator cycle tests with stub collaborators.

use std::cell::{Cell, RefCell};

use tour_planner::directions::{DirectionsConfig, DirectionsError, RouteRequest};
use tour_planner::geo::{GeoPoint, PointOfInterest};
use tour_planner::geometry::RouteGeometry;
use tour_planner::orchestrator::{CycleState, RouteError, RouteOrchestrator};
use tour_planner::traits::{DirectionsApi, PositionError, PositionProvider};

const OCEAN_MALL: PointOfInterest = PointOfInterest::new("Ocean Mall", 11.232024, -74.199805);
const BUENA_VISTA: PointOfInterest = PointOfInterest::new("Buena vista", 11.227931, -74.17257);

const ORIGIN: GeoPoint = GeoPoint::new(11.22, -74.19);

/// Directions stub: serves canned outcomes in order and records what it
/// was asked.
struct StubDirections {
    outcomes: RefCell<Vec<Result<Vec<[f64; 2]>, DirectionsError>>>,
    calls: Cell<usize>,
    last_url: RefCell<Option<String>>,
}

impl StubDirections {
    fn returning(coordinates: Vec<[f64; 2]>) -> Self {
        Self::with_outcomes(vec![Ok(coordinates)])
    }

    fn failing(err: DirectionsError) -> Self {
        Self::with_outcomes(vec![Err(err)])
    }

    fn with_outcomes(outcomes: Vec<Result<Vec<[f64; 2]>, DirectionsError>>) -> Self {
        Self {
            outcomes: RefCell::new(outcomes),
            calls: Cell::new(0),
            last_url: RefCell::new(None),
        }
    }
}

impl DirectionsApi for &StubDirections {
    fn route(&self, request: &RouteRequest) -> Result<RouteGeometry, DirectionsError> {
        self.calls.set(self.calls.get() + 1);
        *self.last_url.borrow_mut() = Some(request.url().to_string());
        self.outcomes
            .borrow_mut()
            .remove(0)
            .map(RouteGeometry::from_lon_lat)
    }
}

struct StubPosition {
    result: Result<GeoPoint, PositionError>,
}

impl PositionProvider for StubPosition {
    fn current_position(&self) -> Result<GeoPoint, PositionError> {
        self.result.clone()
    }
}

fn orchestrator(
    catalog: Vec<PointOfInterest>,
    stub: &StubDirections,
) -> RouteOrchestrator<&StubDirections> {
    RouteOrchestrator::new(catalog, DirectionsConfig::default(), stub)
}

#[test]
fn publishes_order_and_geometry_from_one_cycle() {
    let stub = StubDirections::returning(vec![[-74.19, 11.22], [-74.2, 11.23]]);
    let mut planner = orchestrator(vec![OCEAN_MALL, BUENA_VISTA], &stub);

    planner.origin_acquired(ORIGIN).unwrap();

    assert_eq!(planner.state(), CycleState::Published);
    let published = planner.published().unwrap();

    let names: Vec<_> = published.order.iter().map(|poi| poi.name).collect();
    assert_eq!(names, ["Ocean Mall", "Buena vista"]);
    assert_eq!(
        published.geometry.points(),
        &[GeoPoint::new(11.22, -74.19), GeoPoint::new(11.23, -74.2)]
    );
}

#[test]
fn request_follows_origin_then_visit_order() {
    let stub = StubDirections::returning(vec![[-74.19, 11.22]]);
    let mut planner = orchestrator(vec![BUENA_VISTA, OCEAN_MALL], &stub);

    planner.origin_acquired(ORIGIN).unwrap();

    let url = stub.last_url.borrow().clone().unwrap();
    assert!(
        url.contains("/-74.19,11.22;-74.199805,11.232024;-74.17257,11.227931?"),
        "unexpected url: {}",
        url
    );
    assert_eq!(stub.calls.get(), 1);
}

#[test]
fn empty_routes_reports_no_route_found() {
    let stub = StubDirections::failing(DirectionsError::NoRouteFound);
    let mut planner = orchestrator(vec![OCEAN_MALL, BUENA_VISTA], &stub);

    let err = planner.origin_acquired(ORIGIN).unwrap_err();

    assert!(matches!(err, RouteError::NoRouteFound));
    assert_eq!(planner.state(), CycleState::Idle);
    assert!(planner.published().is_none());
}

#[test]
fn second_origin_update_is_ignored_after_publish() {
    let stub = StubDirections::returning(vec![[-74.19, 11.22]]);
    let mut planner = orchestrator(vec![OCEAN_MALL, BUENA_VISTA], &stub);

    planner.origin_acquired(ORIGIN).unwrap();
    let published_before = planner.published().cloned();

    planner.origin_acquired(GeoPoint::new(11.5, -74.5)).unwrap();

    assert_eq!(stub.calls.get(), 1);
    assert_eq!(planner.state(), CycleState::Published);
    assert_eq!(planner.published().cloned(), published_before);
}

#[test]
fn failed_cycle_can_retry_on_a_fresh_origin() {
    let stub = StubDirections::with_outcomes(vec![
        Err(DirectionsError::NoRouteFound),
        Ok(vec![[-74.19, 11.22]]),
    ]);
    let mut planner = orchestrator(vec![OCEAN_MALL, BUENA_VISTA], &stub);

    assert!(planner.origin_acquired(ORIGIN).is_err());
    assert_eq!(planner.state(), CycleState::Idle);

    planner.origin_acquired(ORIGIN).unwrap();
    assert_eq!(planner.state(), CycleState::Published);
    assert_eq!(stub.calls.get(), 2);
}

#[test]
fn geolocation_failure_aborts_before_the_cycle() {
    let stub = StubDirections::returning(vec![[-74.19, 11.22]]);
    let mut planner = orchestrator(vec![OCEAN_MALL, BUENA_VISTA], &stub);
    let provider = StubPosition {
        result: Err(PositionError::PermissionDenied),
    };

    let err = planner.acquire(&provider).unwrap_err();

    assert!(matches!(
        err,
        RouteError::GeolocationUnavailable(PositionError::PermissionDenied)
    ));
    assert_eq!(planner.state(), CycleState::Idle);
    assert_eq!(stub.calls.get(), 0);
    assert!(planner.published().is_none());
}

#[test]
fn acquire_runs_the_full_cycle_from_a_position_fix() {
    let stub = StubDirections::returning(vec![[-74.19, 11.22], [-74.2, 11.23]]);
    let mut planner = orchestrator(vec![OCEAN_MALL, BUENA_VISTA], &stub);
    let provider = StubPosition { result: Ok(ORIGIN) };

    planner.acquire(&provider).unwrap();

    assert_eq!(planner.state(), CycleState::Published);
    assert_eq!(stub.calls.get(), 1);
}

#[test]
fn empty_catalog_fails_the_request_build() {
    let stub = StubDirections::returning(vec![[-74.19, 11.22]]);
    let mut planner = orchestrator(Vec::new(), &stub);

    let err = planner.origin_acquired(ORIGIN).unwrap_err();

    assert!(matches!(err, RouteError::RequestBuild(_)));
    assert_eq!(planner.state(), CycleState::Idle);
    assert_eq!(stub.calls.get(), 0);
}
