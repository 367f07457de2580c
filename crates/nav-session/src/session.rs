//! The `NavigationSession` state machine.

use tracing::{debug, info, warn};

use nav_core::{GeoPoint, NavConfig, NavError};
use nav_route::{Route, RoutingError, RoutingProfile};
use nav_tracker::{NavEvent, RouteTracker, TrackerState};

use crate::{SpeechSink, UiSink};

// ── Status text ───────────────────────────────────────────────────────────────

pub const STATUS_ARRIVED: &str = "Arrived";
pub const STATUS_NO_STEPS: &str = "No steps";
pub const STATUS_ROUTING_FAILED: &str = "Routing failed";

/// Utterance id used for the arrival phrase.
pub const UTTERANCE_ARRIVED: &str = "arrived";

/// `"ETA ~ 12 min  •  Total 3.4 km"`.
pub fn format_summary(distance_m: f64, duration_s: f64) -> String {
    let minutes = (duration_s / 60.0).round() as i64;
    let km = distance_m / 1000.0;
    format!("ETA ~ {minutes} min  •  Total {km:.1} km")
}

// ── Phase, request, snapshot ──────────────────────────────────────────────────

/// Where the session is in its lifecycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum SessionPhase {
    /// No usable route (none yet, or the last one had no steps).
    #[default]
    Idle,
    /// A route with steps is loaded and being followed.
    Navigating,
    /// The last step was completed.  Only a new route leaves this phase.
    Arrived,
}

/// A route computation the caller should run off the fix path.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RerouteRequest {
    pub origin:      GeoPoint,
    pub destination: GeoPoint,
    pub profile:     RoutingProfile,
}

/// Read-only view of a session, cheap to send across tasks.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionSnapshot {
    pub phase:               SessionPhase,
    pub state:               TrackerState,
    pub reroute_pending:     bool,
    pub destination:         Option<GeoPoint>,
    pub current_instruction: Option<String>,
}

// ── NavigationSession ─────────────────────────────────────────────────────────

/// Glues fix ingestion to tracker output and surfaces the result to the UI
/// and speech collaborators.
///
/// ```text
///            install_route (steps)          advance past last step
///   Idle ───────────────────────────▶ Navigating ───────────────────▶ Arrived
///    ▲  ◀─── install_route (no steps) ──┘  ▲  │                          │
///    │                                     └──┘ install_route (reroute)  │
///    └──────────────────────── install_route (no steps) ◀────────────────┘
/// ```
///
/// The session never performs I/O.  A fix that needs a reroute yields a
/// [`RerouteRequest`]; the caller runs it and reports back through
/// [`install_route`][Self::install_route] or
/// [`route_failed`][Self::route_failed].  While a request is outstanding,
/// further off-route fixes are ignored.
///
/// Create via [`SessionBuilder`][crate::SessionBuilder].
pub struct NavigationSession<U: UiSink, S: SpeechSink> {
    pub(crate) tracker:         RouteTracker,
    pub(crate) phase:           SessionPhase,
    pub(crate) destination:     Option<GeoPoint>,
    pub(crate) profile:         RoutingProfile,
    pub(crate) reroute_pending: bool,
    pub(crate) ui:              U,
    pub(crate) speech:          S,
}

impl<U: UiSink, S: SpeechSink> NavigationSession<U, S> {
    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[inline]
    pub fn config(&self) -> &NavConfig {
        self.tracker.config()
    }

    #[inline]
    pub fn tracker(&self) -> &RouteTracker {
        &self.tracker
    }

    #[inline]
    pub fn route(&self) -> Option<&Route> {
        self.tracker.route()
    }

    #[inline]
    pub fn destination(&self) -> Option<GeoPoint> {
        self.destination
    }

    /// `true` while a route computation is outstanding.
    #[inline]
    pub fn reroute_pending(&self) -> bool {
        self.reroute_pending
    }

    #[inline]
    pub fn ui(&self) -> &U {
        &self.ui
    }

    #[inline]
    pub fn speech(&self) -> &S {
        &self.speech
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase:               self.phase,
            state:               self.tracker.state(),
            reroute_pending:     self.reroute_pending,
            destination:         self.destination,
            current_instruction: self.tracker.current_step().map(|s| s.instruction.clone()),
        }
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// Replace the route and its progress in one step.
    ///
    /// From any phase: a route with steps → `Navigating` at step 0, announced
    /// on the status line and spoken; a route without steps → `Idle` with a
    /// "No steps" notice.  Clears any pending reroute.
    pub fn install_route(&mut self, route: Route) -> SessionPhase {
        self.reroute_pending = false;
        if self.destination.is_none() {
            self.destination = Some(route.destination());
        }

        let (total_m, total_s) = (route.total_distance_m(), route.total_duration_s());
        let active = self.tracker.install(route);
        if let Some(route) = self.tracker.route() {
            self.ui.route_changed(route);
        }

        if active {
            self.phase = SessionPhase::Navigating;
            self.show_current_step(total_m, total_s);
        } else {
            warn!(err = %NavError::InvalidRoute, "route not navigable");
            self.phase = SessionPhase::Idle;
            self.ui.show_status(STATUS_NO_STEPS, "");
        }
        self.phase
    }

    /// Move to the next step, or arrive if the current step is the last.
    ///
    /// Fix-driven completions and the user's "next step" button go through
    /// the same tracker logic, so remaining totals never diverge.  Does
    /// nothing unless `Navigating`.
    pub fn advance_step(&mut self, manual: bool) -> Option<NavEvent> {
        if self.phase != SessionPhase::Navigating {
            debug!(manual, phase = ?self.phase, "advance ignored");
            return None;
        }
        let event = self.tracker.advance()?;
        debug!(manual, ?event, "step advance");
        self.apply(event);
        Some(event)
    }

    /// Feed one position fix.
    ///
    /// Returns a [`RerouteRequest`] when the fix is off-route and no route
    /// computation is already outstanding.
    pub fn on_fix(&mut self, fix: GeoPoint) -> Option<RerouteRequest> {
        let update = self.tracker.update(fix);
        self.ui.position_changed(update.display_point, update.snapped);

        let mut request = None;
        for event in update.events {
            match event {
                NavEvent::RerouteNeeded(origin) => request = self.request_reroute(origin),
                other => self.apply(other),
            }
        }
        request
    }

    /// Start a fresh route computation to `destination`, replacing any
    /// outstanding one.  Used for the initial route.
    pub fn request_route(&mut self, origin: GeoPoint, destination: GeoPoint) -> RerouteRequest {
        self.destination = Some(destination);
        self.reroute_pending = true;
        info!(%origin, %destination, "route requested");
        RerouteRequest { origin, destination, profile: self.profile }
    }

    /// A route computation failed.  Route, progress, and phase are kept;
    /// only the status line reports the error.
    pub fn route_failed(&mut self, err: RoutingError) {
        self.reroute_pending = false;
        let err = NavError::from(err);
        warn!(%err, phase = ?self.phase, "routing failed; keeping current route");
        self.ui.show_status(STATUS_ROUTING_FAILED, &err.to_string());
    }

    /// Forget an outstanding route computation (it was cancelled).
    pub fn cancel_pending(&mut self) {
        if self.reroute_pending {
            debug!("pending route computation cancelled");
        }
        self.reroute_pending = false;
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn request_reroute(&mut self, origin: GeoPoint) -> Option<RerouteRequest> {
        if self.reroute_pending {
            debug!(%origin, "reroute already in flight; ignoring");
            return None;
        }
        let destination = self.destination.or_else(|| self.tracker.route().map(Route::destination))?;
        self.reroute_pending = true;
        info!(%origin, %destination, "off route; rerouting");
        Some(RerouteRequest { origin, destination, profile: self.profile })
    }

    fn apply(&mut self, event: NavEvent) {
        match event {
            NavEvent::StepAdvanced(progress) => {
                self.show_current_step(progress.remaining_distance_m, progress.remaining_duration_s);
            }
            NavEvent::Arrived => {
                self.phase = SessionPhase::Arrived;
                info!("arrived");
                self.ui.show_status(STATUS_ARRIVED, "");
                let phrase = self.tracker.config().arrival_phrase.clone();
                self.speech.speak(&phrase, UTTERANCE_ARRIVED);
            }
            NavEvent::RerouteNeeded(_) => {}
        }
    }

    fn show_current_step(&mut self, distance_m: f64, duration_s: f64) {
        let index = self.tracker.state().step_index;
        match self.tracker.current_step() {
            Some(step) => {
                self.ui.show_status(&step.instruction, &format_summary(distance_m, duration_s));
                self.speech.speak(&step.instruction, &format!("instr_{index}"));
            }
            None => self.ui.show_status(STATUS_NO_STEPS, ""),
        }
    }
}
