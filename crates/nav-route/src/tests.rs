//! Unit tests for nav-route.
//!
//! All routes are hand-built so the tests run without any routing service.

#[cfg(test)]
mod helpers {
    use nav_core::GeoPoint;

    use crate::{Route, Step};

    /// Straight route north along the prime meridian.
    ///
    /// Points every 0.001° (~111 m); three steps ending at points 1, 2, 3.
    pub fn straight_route() -> Route {
        let polyline: Vec<GeoPoint> = (0..4).map(|i| GeoPoint::new(i as f64 * 0.001, 0.0)).collect();
        let steps = vec![
            Step::new("Head north", 111.0, 10.0, polyline[1]),
            Step::new("Continue", 111.0, 20.0, polyline[2]),
            Step::new("Arrive", 111.0, 30.0, polyline[3]),
        ];
        let destination = polyline[3];
        Route::new(polyline, steps, destination, 340.0, 65.0)
    }
}

// ── Step & Route ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod route {
    use nav_core::{GeoPoint, NavError, project_onto_polyline};

    use super::helpers::straight_route;
    use crate::{Route, Step};

    #[test]
    fn step_clamps_negative_and_nan() {
        let s = Step::new("x", -5.0, f64::NAN, GeoPoint::new(0.0, 0.0));
        assert_eq!(s.distance_m, 0.0);
        assert_eq!(s.duration_s, 0.0);
    }

    #[test]
    fn service_totals_are_kept() {
        let r = straight_route();
        assert_eq!(r.total_distance_m(), 340.0);
        assert_eq!(r.total_duration_s(), 65.0);
    }

    #[test]
    fn from_steps_sums_totals() {
        let r = straight_route();
        let r2 = Route::from_steps(r.polyline().to_vec(), r.steps().to_vec(), r.destination());
        assert_eq!(r2.total_distance_m(), 333.0);
        assert_eq!(r2.total_duration_s(), 60.0);
    }

    #[test]
    fn length_is_cumulative_haversine() {
        let r = straight_route();
        assert!((r.length_m() - 3.0 * 111.195).abs() < 0.05, "got {}", r.length_m());
    }

    #[test]
    fn remaining_from_sums_tail() {
        let r = straight_route();
        assert_eq!(r.remaining_from(0), (333.0, 60.0));
        assert_eq!(r.remaining_from(1), (222.0, 50.0));
        assert_eq!(r.remaining_from(2), (111.0, 30.0));
        assert_eq!(r.remaining_from(3), (0.0, 0.0));
        assert_eq!(r.remaining_from(99), (0.0, 0.0));
    }

    #[test]
    fn along_track_adds_segment_offset() {
        let r = straight_route();
        let proj = project_onto_polyline(GeoPoint::new(0.0015, 0.0001), r.polyline());
        assert_eq!(proj.segment, 1);
        let along = r.along_track_m(&proj).unwrap();
        assert!((along - 1.5 * 111.195).abs() < 0.05, "got {along}");
    }

    #[test]
    fn along_track_none_without_segments() {
        let r = Route::from_steps(vec![], vec![], GeoPoint::new(0.0, 0.0));
        let proj = project_onto_polyline(GeoPoint::new(1.0, 1.0), r.polyline());
        assert_eq!(r.along_track_m(&proj), None);
        assert_eq!(r.length_m(), 0.0);
    }

    #[test]
    fn degenerate_geometry_reported() {
        let p = GeoPoint::new(0.0, 0.0);
        let r = Route::from_steps(vec![p], vec![], p);
        assert!(matches!(r.check_geometry(), Err(NavError::DegenerateGeometry { points: 1 })));
        assert!(straight_route().check_geometry().is_ok());
    }
}

// ── RoutingProfile ────────────────────────────────────────────────────────────

#[cfg(test)]
mod profile {
    use crate::RoutingProfile;

    #[test]
    fn default_is_car() {
        assert_eq!(RoutingProfile::default(), RoutingProfile::Car);
    }

    #[test]
    fn display_and_parse() {
        assert_eq!(RoutingProfile::Bike.to_string(), "bike");
        assert_eq!("Foot".parse::<RoutingProfile>(), Ok(RoutingProfile::Foot));
        assert_eq!("walk".parse::<RoutingProfile>(), Ok(RoutingProfile::Foot));
        assert!("boat".parse::<RoutingProfile>().is_err());
    }
}

// ── Router ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod router {
    use nav_core::{GeoPoint, NavError};

    use super::helpers::straight_route;
    use crate::{Router, RoutingError, RoutingProfile, StaticRouter};

    #[tokio::test]
    async fn static_router_returns_route() {
        let router = StaticRouter::new(straight_route());
        let r = router
            .route(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.003, 0.0), RoutingProfile::Car)
            .await
            .unwrap();
        assert_eq!(r, straight_route());
    }

    #[tokio::test]
    async fn failing_router_returns_error() {
        let router = StaticRouter::failing(RoutingError::NoPath);
        let err = router
            .route(GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 1.0), RoutingProfile::Foot)
            .await
            .unwrap_err();
        assert_eq!(err, RoutingError::NoPath);
    }

    #[test]
    fn routing_error_becomes_nav_error() {
        let nav: NavError = RoutingError::Network("connection reset".into()).into();
        assert!(matches!(&nav, NavError::RoutingFailed(_)));
        assert_eq!(nav.to_string(), "network error: connection reset");
    }
}

// ── GraphHopper decoding ──────────────────────────────────────────────────────

#[cfg(all(test, feature = "graphhopper"))]
mod graphhopper {
    use nav_core::GeoPoint;

    use crate::RoutingError;
    use crate::graphhopper::parse_response;

    const DEST: GeoPoint = GeoPoint { lat: 37.9715, lon: 23.7267 };

    const BODY: &str = r#"{
        "paths": [{
            "distance": 1520.4,
            "time": 183000,
            "points": { "coordinates": [[23.7275, 37.9838], [23.7270, 37.9780], [23.7267, 37.9715]] },
            "instructions": [
                { "text": "Continue onto Athinas", "distance": 640.0, "time": 75000, "interval": [0, 1] },
                { "text": "Arrive at destination", "distance": 880.4, "interval": [1, 9] }
            ]
        }]
    }"#;

    #[test]
    fn decodes_path() {
        let route = parse_response(BODY, DEST).unwrap();
        assert_eq!(route.polyline().len(), 3);
        assert_eq!(route.polyline()[0], GeoPoint::new(37.9838, 23.7275));
        assert_eq!(route.total_distance_m(), 1520.4);
        assert_eq!(route.total_duration_s(), 183.0);
        assert_eq!(route.destination(), DEST);

        let steps = route.steps();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].instruction, "Continue onto Athinas");
        assert_eq!(steps[0].duration_s, 75.0);
        assert_eq!(steps[0].end, GeoPoint::new(37.9780, 23.7270));
    }

    #[test]
    fn missing_time_defaults_to_zero_and_interval_is_clamped() {
        let route = parse_response(BODY, DEST).unwrap();
        let last = &route.steps()[1];
        assert_eq!(last.duration_s, 0.0);
        assert_eq!(last.end, GeoPoint::new(37.9715, 23.7267));
    }

    #[test]
    fn no_paths_is_no_path() {
        assert_eq!(parse_response(r#"{"paths": []}"#, DEST), Err(RoutingError::NoPath));
    }

    #[test]
    fn error_message_is_service_error() {
        let err = parse_response(r#"{"message": "Cannot find point 0"}"#, DEST).unwrap_err();
        assert_eq!(err, RoutingError::Service("Cannot find point 0".into()));
    }

    #[test]
    fn empty_coordinates_are_malformed() {
        let body = r#"{"paths": [{"points": {"coordinates": []}, "instructions": []}]}"#;
        assert!(matches!(parse_response(body, DEST), Err(RoutingError::Malformed(_))));
    }

    #[test]
    fn invalid_json_is_malformed() {
        assert!(matches!(parse_response("not json", DEST), Err(RoutingError::Malformed(_))));
    }
}
