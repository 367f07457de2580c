//! `RouteTracker`: the current route plus progress, one fix at a time.

use tracing::{debug, info, warn};

use nav_core::{GeoPoint, NavConfig, project_onto_polyline};
use nav_route::{Route, Step};

use crate::{NavEvent, Progress, TrackUpdate, TrackerState};

/// Owns the active [`Route`] and its [`TrackerState`].
///
/// Calls take `&mut self`, so one tracker can only ever evaluate one fix at
/// a time.  Route and state are replaced together by [`install`][Self::install],
/// so a fix always sees a consistent pair.
#[derive(Debug, Clone)]
pub struct RouteTracker {
    config: NavConfig,
    route:  Option<Route>,
    state:  TrackerState,
}

impl RouteTracker {
    /// Create a tracker with no route loaded.
    pub fn new(config: NavConfig) -> Self {
        Self {
            config,
            route: None,
            state: TrackerState::idle(),
        }
    }

    #[inline]
    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    #[inline]
    pub fn route(&self) -> Option<&Route> {
        self.route.as_ref()
    }

    #[inline]
    pub fn state(&self) -> TrackerState {
        self.state
    }

    /// The step currently being followed, if any.
    pub fn current_step(&self) -> Option<&Step> {
        self.route.as_ref()?.step(self.state.step_index)
    }

    /// Replace the route and reset progress to step 0.
    ///
    /// The tracker becomes active only if the route has steps.  Returns the
    /// new `active` flag.
    pub fn install(&mut self, route: Route) -> bool {
        if let Err(err) = route.check_geometry() {
            warn!(%err, "installed route cannot be projected onto; every fix will read as off-route");
        }
        self.state = TrackerState::start(route.has_steps());
        info!(
            points = route.polyline().len(),
            steps  = route.steps().len(),
            active = self.state.active,
            "route installed"
        );
        self.route = Some(route);
        self.state.active
    }

    /// Drop the route and go idle.
    pub fn clear(&mut self) {
        self.route = None;
        self.state = TrackerState::idle();
    }

    /// Move past the current step.
    ///
    /// This is the only place the step index changes after install; both
    /// fix-driven and manual advances go through it.
    ///
    /// - Another step remains → index + 1, [`NavEvent::StepAdvanced`] with the
    ///   planned totals from the new index to the end.
    /// - Current step is the last → tracker goes inactive,
    ///   [`NavEvent::Arrived`].
    /// - Inactive or no route → `None`.
    pub fn advance(&mut self) -> Option<NavEvent> {
        let route = self.route.as_ref()?;
        if !self.state.active {
            return None;
        }

        if self.state.step_index + 1 < route.steps().len() {
            self.state.step_index += 1;
            let (remaining_distance_m, remaining_duration_s) =
                route.remaining_from(self.state.step_index);
            info!(step = self.state.step_index, remaining_distance_m, "advanced to next step");
            Some(NavEvent::StepAdvanced(Progress {
                step_index: self.state.step_index,
                remaining_distance_m,
                remaining_duration_s,
            }))
        } else {
            self.state.active = false;
            info!("final step completed");
            Some(NavEvent::Arrived)
        }
    }

    /// Evaluate one position fix against the current route.
    pub fn update(&mut self, fix: GeoPoint) -> TrackUpdate {
        let Some(route) = self.route.as_ref() else {
            return TrackUpdate::without_route(fix);
        };

        let proj    = project_onto_polyline(fix, route.polyline());
        let snapped = proj.distance_m < self.config.snap_threshold_m;
        let display_point = if snapped { proj.point } else { fix };
        let along_track_m = route.along_track_m(&proj);
        let has_points    = !route.polyline().is_empty();

        let step_complete = self.state.active
            && route
                .step(self.state.step_index)
                .is_some_and(|step| display_point.distance_m(step.end) < self.config.step_complete_threshold_m);

        debug!(
            %fix,
            %display_point,
            distance_to_route_m = proj.distance_m,
            step = self.state.step_index,
            step_complete,
            "fix evaluated"
        );

        let mut events = Vec::with_capacity(2);

        // Step logic first: arrival deactivates the tracker, which also
        // suppresses the reroute check below.
        if step_complete {
            events.extend(self.advance());
        }

        if self.state.active && has_points && proj.distance_m > self.config.reroute_threshold_m {
            debug!(distance_to_route_m = proj.distance_m, "off route");
            events.push(NavEvent::RerouteNeeded(display_point));
        }

        TrackUpdate {
            fix,
            display_point,
            distance_to_route_m: proj.distance_m,
            snapped,
            along_track_m,
            events,
        }
    }
}
