//! Point-to-segment and point-to-polyline projection.
//!
//! # Local equirectangular approximation
//!
//! Segment projection flattens the neighbourhood of the query point `p` into
//! a metric plane centred on `p`:
//!
//! ```text
//! y = (lat - p.lat) · 111 132.954
//! x = (lon - p.lon) · 111 132.954 · cos(p.lat)
//! ```
//!
//! The projection parameter `t` is clamped to `[0, 1]`, so the result always
//! lies on the closed segment.  Valid for segments up to a few kilometres;
//! it is not geodesically exact.  Distances reported to callers are always
//! haversine ([`GeoPoint::distance_m`]), never planar.

use crate::GeoPoint;

/// Metres per degree of latitude used by the local flat-earth projection.
pub const METERS_PER_DEGREE_LAT: f64 = 111_132.954;

// ── Projection ────────────────────────────────────────────────────────────────

/// The nearest point on a polyline to a fix, and how far away it is.
///
/// Transient: recomputed for every fix.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Projection {
    /// Haversine distance from the fix to `point`, metres.  `+∞` when the
    /// polyline has no segments.
    pub distance_m: f64,
    /// Nearest point on the polyline.  Equals the fix itself when the
    /// polyline has no segments (sentinel, never displayed).
    pub point: GeoPoint,
    /// Index `i` of the winning segment `polyline[i] → polyline[i + 1]`.
    pub segment: usize,
}

impl Projection {
    /// The "no segments" result for fix `p`.
    #[inline]
    pub fn unreachable(p: GeoPoint) -> Self {
        Self { distance_m: f64::INFINITY, point: p, segment: 0 }
    }

    /// `false` for the degenerate-geometry sentinel.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.distance_m.is_finite()
    }
}

// ── Segment ───────────────────────────────────────────────────────────────────

/// Nearest point to `p` on the segment `a → b`.
///
/// A zero-length segment (`a == b`) returns `a`.
pub fn nearest_point_on_segment(p: GeoPoint, a: GeoPoint, b: GeoPoint) -> GeoPoint {
    if a == b {
        return a;
    }

    let m_per_deg_lat = METERS_PER_DEGREE_LAT;
    let m_per_deg_lon = METERS_PER_DEGREE_LAT * p.lat.to_radians().cos();

    // At the poles the longitude axis collapses; fall back to the nearer end.
    if m_per_deg_lon.abs() < f64::EPSILON {
        return if p.distance_m(a) <= p.distance_m(b) { a } else { b };
    }

    // Planar offsets relative to p (p sits at the origin).
    let ax = (a.lon - p.lon) * m_per_deg_lon;
    let ay = (a.lat - p.lat) * m_per_deg_lat;
    let bx = (b.lon - p.lon) * m_per_deg_lon;
    let by = (b.lat - p.lat) * m_per_deg_lat;

    let abx = bx - ax;
    let aby = by - ay;
    let apx = -ax;
    let apy = -ay;

    let ab2 = abx * abx + aby * aby;
    let t = if ab2 == 0.0 {
        0.0
    } else {
        ((apx * abx + apy * aby) / ab2).clamp(0.0, 1.0)
    };

    let cx = ax + t * abx;
    let cy = ay + t * aby;

    GeoPoint::new(p.lat + cy / m_per_deg_lat, p.lon + cx / m_per_deg_lon)
}

// ── Polyline ──────────────────────────────────────────────────────────────────

/// Project `p` onto every consecutive segment of `polyline` and keep the
/// closest.
///
/// Fewer than two points means no segments: the result is
/// [`Projection::unreachable`].  Ties keep the first segment that reached
/// the minimum.
pub fn project_onto_polyline(p: GeoPoint, polyline: &[GeoPoint]) -> Projection {
    let mut best = Projection::unreachable(p);

    for (i, pair) in polyline.windows(2).enumerate() {
        let candidate = nearest_point_on_segment(p, pair[0], pair[1]);
        let d = p.distance_m(candidate);
        if d < best.distance_m {
            best = Projection { distance_m: d, point: candidate, segment: i };
        }
    }

    best
}

/// `(distance_m, nearest_point)` view of [`project_onto_polyline`].
#[inline]
pub fn nearest_point_on_polyline(p: GeoPoint, polyline: &[GeoPoint]) -> (f64, GeoPoint) {
    let proj = project_onto_polyline(p, polyline);
    (proj.distance_m, proj.point)
}
