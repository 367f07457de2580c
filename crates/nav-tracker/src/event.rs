//! Events and per-fix results emitted by the tracker.

use nav_core::GeoPoint;

/// Planned totals still ahead after an advance.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Progress {
    /// The new current step.
    pub step_index: usize,
    /// Sum of `distance_m` over the remaining steps, including the current one.
    pub remaining_distance_m: f64,
    /// Sum of `duration_s` over the remaining steps, including the current one.
    pub remaining_duration_s: f64,
}

/// What a fix (or a manual advance) changed.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NavEvent {
    /// The current step was completed and the next one is now current.
    StepAdvanced(Progress),
    /// The last step was completed; the tracker is now inactive.
    Arrived,
    /// The fix is too far from the route.  Carries the point a new route
    /// should start from.
    RerouteNeeded(GeoPoint),
}

/// Everything the tracker derived from one fix.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackUpdate {
    /// The fix as received.
    pub fix: GeoPoint,
    /// Where to draw the traveller: the snapped point or the raw fix.
    pub display_point: GeoPoint,
    /// Distance from the fix to the route polyline, metres (`+∞` with no
    /// segments).
    pub distance_to_route_m: f64,
    /// `true` if `display_point` is the projection onto the route.
    pub snapped: bool,
    /// Distance along the polyline to the projection, when one exists.
    pub along_track_m: Option<f64>,
    /// At most one `StepAdvanced`/`Arrived`, then at most one
    /// `RerouteNeeded`, in that order.  Empty means no change.
    pub events: Vec<NavEvent>,
}

impl TrackUpdate {
    /// The result for a fix received while no route is loaded.
    pub fn without_route(fix: GeoPoint) -> Self {
        Self {
            fix,
            display_point:       fix,
            distance_to_route_m: f64::INFINITY,
            snapped:             false,
            along_track_m:       None,
            events:              Vec::new(),
        }
    }

    /// `true` if the fix produced no event.
    #[inline]
    pub fn is_no_change(&self) -> bool {
        self.events.is_empty()
    }

    /// The reroute origin, if this fix asked for one.
    pub fn reroute_origin(&self) -> Option<GeoPoint> {
        self.events.iter().find_map(|e| match e {
            NavEvent::RerouteNeeded(p) => Some(*p),
            _ => None,
        })
    }
}
