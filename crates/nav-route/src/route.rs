//! Route and maneuver-step types.
//!
//! A [`Route`] is produced once by the routing service and never mutated.
//! Installing a new route replaces the whole value.

use nav_core::{GeoPoint, NavError, NavResult, Projection};

// ── Step ──────────────────────────────────────────────────────────────────────

/// One maneuver instruction, complete once the traveller reaches `end`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    /// Instruction text, shown and spoken as-is.
    pub instruction: String,
    /// Planned length of the maneuver, metres (≥ 0).
    pub distance_m: f64,
    /// Planned duration of the maneuver, seconds (≥ 0).
    pub duration_s: f64,
    /// Where the step counts as complete.
    pub end: GeoPoint,
}

impl Step {
    /// Negative or non-finite planned values are stored as 0.
    pub fn new(instruction: impl Into<String>, distance_m: f64, duration_s: f64, end: GeoPoint) -> Self {
        Self {
            instruction: instruction.into(),
            distance_m:  non_negative(distance_m),
            duration_s:  non_negative(duration_s),
            end,
        }
    }
}

#[inline]
fn non_negative(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a routing query: the path to follow, the maneuvers along
/// it, and the service-reported totals.
///
/// The last step's end point is expected to lie at (or near) the final
/// polyline point, but nothing here depends on it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    polyline:         Vec<GeoPoint>,
    steps:            Vec<Step>,
    destination:      GeoPoint,
    total_distance_m: f64,
    total_duration_s: f64,
    /// `cumulative_m[i]` = haversine length of `polyline[..=i]`.
    cumulative_m:     Vec<f64>,
}

impl Route {
    /// Build a route, precomputing cumulative polyline distances.
    pub fn new(
        polyline:         Vec<GeoPoint>,
        steps:            Vec<Step>,
        destination:      GeoPoint,
        total_distance_m: f64,
        total_duration_s: f64,
    ) -> Self {
        let mut cumulative_m = Vec::with_capacity(polyline.len());
        let mut acc = 0.0;
        for (i, p) in polyline.iter().enumerate() {
            if i > 0 {
                acc += polyline[i - 1].distance_m(*p);
            }
            cumulative_m.push(acc);
        }

        Self {
            polyline,
            steps,
            destination,
            total_distance_m: non_negative(total_distance_m),
            total_duration_s: non_negative(total_duration_s),
            cumulative_m,
        }
    }

    /// Build a route whose totals are the sums over `steps`.
    pub fn from_steps(polyline: Vec<GeoPoint>, steps: Vec<Step>, destination: GeoPoint) -> Self {
        let distance = steps.iter().map(|s| s.distance_m).sum();
        let duration = steps.iter().map(|s| s.duration_s).sum();
        Self::new(polyline, steps, destination, distance, duration)
    }

    #[inline]
    pub fn polyline(&self) -> &[GeoPoint] {
        &self.polyline
    }

    #[inline]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    #[inline]
    pub fn step(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    #[inline]
    pub fn destination(&self) -> GeoPoint {
        self.destination
    }

    /// Service-reported total distance, metres.
    #[inline]
    pub fn total_distance_m(&self) -> f64 {
        self.total_distance_m
    }

    /// Service-reported total duration, seconds.
    #[inline]
    pub fn total_duration_s(&self) -> f64 {
        self.total_duration_s
    }

    /// Geometric length of the polyline, metres.
    #[inline]
    pub fn length_m(&self) -> f64 {
        self.cumulative_m.last().copied().unwrap_or(0.0)
    }

    /// `true` if there is no maneuver to follow.
    #[inline]
    pub fn has_steps(&self) -> bool {
        !self.steps.is_empty()
    }

    /// Check that the polyline has at least one segment.
    pub fn check_geometry(&self) -> NavResult<()> {
        if self.polyline.len() < 2 {
            return Err(NavError::DegenerateGeometry { points: self.polyline.len() });
        }
        Ok(())
    }

    /// Planned `(distance_m, duration_s)` still ahead when `index` is the
    /// current step: the sum over `steps[index..]`.
    ///
    /// An index past the end yields `(0.0, 0.0)`.
    pub fn remaining_from(&self, index: usize) -> (f64, f64) {
        self.steps
            .get(index..)
            .unwrap_or(&[])
            .iter()
            .fold((0.0, 0.0), |(d, t), s| (d + s.distance_m, t + s.duration_s))
    }

    /// Distance along the polyline from its first point to `proj.point`.
    ///
    /// Returns `None` for the no-segments sentinel.
    pub fn along_track_m(&self, proj: &Projection) -> Option<f64> {
        if !proj.is_finite() {
            return None;
        }
        let start = *self.polyline.get(proj.segment)?;
        let base = *self.cumulative_m.get(proj.segment)?;
        Some(base + start.distance_m(proj.point))
    }
}
