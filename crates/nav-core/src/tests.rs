//! Unit tests for nav-core primitives.

#[cfg(test)]
mod geo {
    use crate::{GeoPoint, distance};

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(37.9838, 23.7275);
        assert!(p.distance_m(p) < 1e-9);
    }

    #[test]
    fn one_degree_latitude() {
        // ~1 degree of latitude ≈ 111.2 km on a 6 371 km sphere
        let a = GeoPoint::new(30.0, -88.0);
        let b = GeoPoint::new(31.0, -88.0);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 1.0, "got {d}");
    }

    #[test]
    fn thousandth_degree_at_equator() {
        let d = distance(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.001, 0.0));
        assert!((d - 111.195).abs() < 0.01, "got {d}");
    }

    #[test]
    fn symmetric() {
        let a = GeoPoint::new(37.9838, 23.7275);
        let b = GeoPoint::new(37.9715, 23.7267);
        assert!((a.distance_m(b) - b.distance_m(a)).abs() < 1e-9);
    }

    #[test]
    fn display() {
        assert_eq!(GeoPoint::new(1.5, -2.25).to_string(), "(1.500000, -2.250000)");
    }
}

#[cfg(test)]
mod segment {
    use crate::{GeoPoint, nearest_point_on_segment};

    const A: GeoPoint = GeoPoint { lat: 0.0, lon: 0.0 };
    const B: GeoPoint = GeoPoint { lat: 0.001, lon: 0.0 };

    #[test]
    fn perpendicular_foot_inside_segment() {
        // 0.0005° east of the midpoint of a north-running segment.
        let p = GeoPoint::new(0.0005, 0.0005);
        let q = nearest_point_on_segment(p, A, B);
        assert!((q.lat - 0.0005).abs() < 1e-9, "got {q}");
        assert!(q.lon.abs() < 1e-9, "got {q}");
    }

    #[test]
    fn clamped_before_start() {
        let p = GeoPoint::new(-0.002, 0.0001);
        let q = nearest_point_on_segment(p, A, B);
        assert!(q.lat.abs() < 1e-12 && q.lon.abs() < 1e-12, "got {q}");
    }

    #[test]
    fn clamped_past_end() {
        let p = GeoPoint::new(0.005, -0.0001);
        let q = nearest_point_on_segment(p, A, B);
        assert!((q.lat - B.lat).abs() < 1e-12 && (q.lon - B.lon).abs() < 1e-12, "got {q}");
    }

    #[test]
    fn zero_length_segment_returns_start() {
        let p = GeoPoint::new(1.0, 1.0);
        assert_eq!(nearest_point_on_segment(p, A, A), A);
    }

    #[test]
    fn point_on_segment_is_fixed_point() {
        let p = GeoPoint::new(0.0003, 0.0);
        let q = nearest_point_on_segment(p, A, B);
        assert!(p.distance_m(q) < 1e-6);
    }

    #[test]
    fn pole_does_not_produce_nan() {
        let p = GeoPoint::new(90.0, 0.0);
        let q = nearest_point_on_segment(p, GeoPoint::new(89.9, 0.0), GeoPoint::new(89.9, 90.0));
        assert!(q.is_finite());
    }
}

#[cfg(test)]
mod polyline {
    use crate::{GeoPoint, nearest_point_on_polyline, project_onto_polyline};

    #[test]
    fn empty_polyline_is_infinitely_far() {
        let p = GeoPoint::new(1.0, 2.0);
        let (d, q) = nearest_point_on_polyline(p, &[]);
        assert!(d.is_infinite());
        assert_eq!(q, p);
    }

    #[test]
    fn single_point_polyline_is_infinitely_far() {
        let p = GeoPoint::new(1.0, 2.0);
        let (d, _) = nearest_point_on_polyline(p, &[GeoPoint::new(1.0, 2.0)]);
        assert!(d.is_infinite());
    }

    #[test]
    fn picks_closest_segment() {
        // L-shaped route: north 0.001°, then east 0.001°.
        let line = [
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.001, 0.0),
            GeoPoint::new(0.001, 0.001),
        ];
        let p = GeoPoint::new(0.0012, 0.0006);
        let proj = project_onto_polyline(p, &line);
        assert_eq!(proj.segment, 1);
        assert!((proj.point.lat - 0.001).abs() < 1e-9);
        assert!((proj.distance_m - 22.24).abs() < 0.05, "got {}", proj.distance_m);
    }

    #[test]
    fn tie_keeps_first_segment() {
        // Out-and-back-and-out: segments 0 and 2 are the same segment, and a
        // fix on its start vertex is at distance 0 from both.
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.001, 0.0);
        let proj = project_onto_polyline(a, &[a, b, a, b]);
        assert_eq!(proj.segment, 0);
        assert_eq!(proj.distance_m, 0.0);
    }

    #[test]
    fn distance_is_haversine_to_projection() {
        let line = [GeoPoint::new(0.0, 0.0), GeoPoint::new(0.001, 0.0)];
        let p = GeoPoint::new(0.0005, 0.0003);
        let proj = project_onto_polyline(p, &line);
        assert!((proj.distance_m - p.distance_m(proj.point)).abs() < 1e-9);
    }
}

#[cfg(test)]
mod properties {
    use proptest::prelude::*;

    use crate::{GeoPoint, nearest_point_on_segment};

    fn near(base_lat: f64, base_lon: f64) -> impl Strategy<Value = GeoPoint> {
        (-0.01f64..0.01, -0.01f64..0.01)
            .prop_map(move |(dl, dn)| GeoPoint::new(base_lat + dl, base_lon + dn))
    }

    fn local_triple() -> impl Strategy<Value = (GeoPoint, GeoPoint, GeoPoint)> {
        (-60.0f64..60.0, -179.0f64..179.0)
            .prop_flat_map(|(lat, lon)| (near(lat, lon), near(lat, lon), near(lat, lon)))
    }

    proptest! {
        #[test]
        fn result_stays_on_closed_segment((p, a, b) in local_triple()) {
            let q = nearest_point_on_segment(p, a, b);
            let eps = 1e-9;
            prop_assert!(q.lat >= a.lat.min(b.lat) - eps && q.lat <= a.lat.max(b.lat) + eps);
            prop_assert!(q.lon >= a.lon.min(b.lon) - eps && q.lon <= a.lon.max(b.lon) + eps);
        }

        #[test]
        fn result_is_no_farther_than_either_end((p, a, b) in local_triple()) {
            let q = nearest_point_on_segment(p, a, b);
            let d = p.distance_m(q);
            // Planar minimisation vs. haversine measurement: allow a small
            // relative slack over the ~2 km neighbourhood.
            let slack = |x: f64| x * 5e-3 + 1e-3;
            prop_assert!(d <= p.distance_m(a) + slack(p.distance_m(a)));
            prop_assert!(d <= p.distance_m(b) + slack(p.distance_m(b)));
        }
    }
}

#[cfg(test)]
mod config {
    use crate::{NavConfig, NavError};

    #[test]
    fn defaults_match_policy() {
        let cfg = NavConfig::default();
        assert_eq!(cfg.snap_threshold_m, 20.0);
        assert_eq!(cfg.step_complete_threshold_m, 25.0);
        assert_eq!(cfg.reroute_threshold_m, 40.0);
        assert_eq!(cfg.arrival_phrase, "You have arrived");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn negative_threshold_rejected() {
        let cfg = NavConfig { reroute_threshold_m: -1.0, ..NavConfig::default() };
        assert!(matches!(cfg.validate(), Err(NavError::Config(_))));
    }

    #[test]
    fn nan_threshold_rejected() {
        let cfg = NavConfig { snap_threshold_m: f64::NAN, ..NavConfig::default() };
        assert!(matches!(cfg.validate(), Err(NavError::Config(_))));
    }

    #[test]
    fn zero_timeout_rejected() {
        let cfg = NavConfig { routing_timeout_secs: 0, ..NavConfig::default() };
        assert!(cfg.validate().is_err());
    }
}
