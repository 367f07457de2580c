//! Fluent builder for constructing a [`NavigationSession`].

use nav_core::{GeoPoint, NavConfig};
use nav_route::{Route, RoutingProfile};
use nav_tracker::RouteTracker;

use crate::{NavigationSession, SessionPhase, SessionResult, SpeechSink, UiSink};

/// Fluent builder for [`NavigationSession<U, S>`].
///
/// # Required inputs
///
/// - `U: UiSink` for the status line and map refresh
/// - `S: SpeechSink` for spoken instructions
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                   |
/// |---------------------|---------------------------|
/// | `.config(c)`        | `NavConfig::default()`    |
/// | `.destination(p)`   | taken from the first route |
/// | `.profile(p)`       | `RoutingProfile::Car`     |
/// | `.route(r)`         | none; session starts Idle |
///
/// # Example
///
/// ```rust,ignore
/// let mut session = SessionBuilder::new(NoopSink, NoopSink)
///     .config(config)
///     .route(route)
///     .build()?;
/// session.on_fix(GeoPoint::new(37.97, 23.73));
/// ```
pub struct SessionBuilder<U: UiSink, S: SpeechSink> {
    config:      NavConfig,
    destination: Option<GeoPoint>,
    profile:     RoutingProfile,
    route:       Option<Route>,
    ui:          U,
    speech:      S,
}

impl<U: UiSink, S: SpeechSink> SessionBuilder<U, S> {
    pub fn new(ui: U, speech: S) -> Self {
        Self {
            config:      NavConfig::default(),
            destination: None,
            profile:     RoutingProfile::default(),
            route:       None,
            ui,
            speech,
        }
    }

    pub fn config(mut self, config: NavConfig) -> Self {
        self.config = config;
        self
    }

    /// Where reroutes should lead.  Without it, the destination of the first
    /// installed route is used.
    pub fn destination(mut self, destination: GeoPoint) -> Self {
        self.destination = Some(destination);
        self
    }

    pub fn profile(mut self, profile: RoutingProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Install `route` as soon as the session is built.
    pub fn route(mut self, route: Route) -> Self {
        self.route = Some(route);
        self
    }

    /// Validate the configuration and return a session, already navigating
    /// if a route was supplied.
    pub fn build(self) -> SessionResult<NavigationSession<U, S>> {
        self.config.validate()?;

        let mut session = NavigationSession {
            tracker:         RouteTracker::new(self.config),
            phase:           SessionPhase::Idle,
            destination:     self.destination,
            profile:         self.profile,
            reroute_pending: false,
            ui:              self.ui,
            speech:          self.speech,
        };
        if let Some(route) = self.route {
            session.install_route(route);
        }
        Ok(session)
    }
}
