//! Routing trait and a fixed-answer implementation.
//!
//! # Pluggability
//!
//! The navigation session calls routing via the [`Router`] trait, so
//! applications can plug in an HTTP client for any routing service (or an
//! offline engine) without touching the tracker.  The wire protocol belongs
//! to the implementation, not to this crate.

use async_trait::async_trait;
use tracing::debug;

use nav_core::GeoPoint;

use crate::{Route, RoutingError, RoutingProfile, RoutingResult};

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable routing service.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync + 'static`: requests run on a spawned
/// task so they never block fix processing.
#[async_trait]
pub trait Router: Send + Sync + 'static {
    /// Compute a route from `origin` to `destination`.
    ///
    /// Fails with [`RoutingError`] on network failure, an empty result, or a
    /// response that cannot be decoded.
    async fn route(
        &self,
        origin:      GeoPoint,
        destination: GeoPoint,
        profile:     RoutingProfile,
    ) -> RoutingResult<Route>;
}

// ── StaticRouter ──────────────────────────────────────────────────────────────

/// A [`Router`] that answers every request with the same outcome.
///
/// Useful for replaying a recorded route, and in tests.
#[derive(Debug, Clone)]
pub struct StaticRouter {
    outcome: RoutingResult<Route>,
}

impl StaticRouter {
    /// Always return `route`.
    pub fn new(route: Route) -> Self {
        Self { outcome: Ok(route) }
    }

    /// Always fail with `err`.
    pub fn failing(err: RoutingError) -> Self {
        Self { outcome: Err(err) }
    }
}

#[async_trait]
impl Router for StaticRouter {
    async fn route(
        &self,
        origin:      GeoPoint,
        destination: GeoPoint,
        profile:     RoutingProfile,
    ) -> RoutingResult<Route> {
        debug!(%origin, %destination, %profile, "static route requested");
        self.outcome.clone()
    }
}
