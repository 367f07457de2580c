//! Async driver: feeds fixes into a [`NavigationSession`] and runs route
//! computations off the fix path.
//!
//! # Event loop
//!
//! ```text
//! loop (biased select):
//!   ① Routing   — the in-flight computation finished: install the route, or
//!                 report the failure and keep the old one.
//!   ② Fixes     — one fix at a time through NavigationSession::on_fix; an
//!                 off-route fix may start a computation.
//!   ③ Commands  — navigate / next step / snapshot / shutdown.
//! ```
//!
//! Exactly one routing task exists at a time.  The session refuses to emit a
//! second reroute request while one is pending, and an explicit `navigate`
//! aborts the in-flight task before starting its own.  On shutdown the
//! in-flight task is aborted and its result is never applied.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, info, warn};

use nav_core::GeoPoint;
use nav_route::{Route, Router, RoutingError, RoutingResult};

use crate::{
    NavigationSession, RerouteRequest, SessionError, SessionResult, SessionSnapshot, SpeechSink,
    UiSink,
};

const COMMAND_CAPACITY: usize = 16;

enum Command {
    Navigate { origin: GeoPoint, destination: GeoPoint },
    NextStep,
    Snapshot(oneshot::Sender<SessionSnapshot>),
    Shutdown,
}

// ── Navigator ─────────────────────────────────────────────────────────────────

/// Spawns the event loop for a session.
pub struct Navigator;

impl Navigator {
    /// Move `session` onto a tokio task that consumes `fixes` and calls
    /// `router` when a route is needed.
    ///
    /// Must be called from within a tokio runtime.  The loop keeps serving
    /// commands after `fixes` closes; it ends on
    /// [`NavigatorHandle::shutdown`] or when every handle is dropped.
    pub fn spawn<U, S, R>(
        session: NavigationSession<U, S>,
        router:  Arc<R>,
        fixes:   mpsc::Receiver<GeoPoint>,
    ) -> NavigatorHandle<U, S>
    where
        U: UiSink,
        S: SpeechSink,
        R: Router,
    {
        let (commands, rx) = mpsc::channel(COMMAND_CAPACITY);
        let task = tokio::spawn(run(session, router, fixes, rx));
        NavigatorHandle { commands, task }
    }
}

/// Control handle for a running [`Navigator`].
pub struct NavigatorHandle<U: UiSink, S: SpeechSink> {
    commands: mpsc::Sender<Command>,
    task:     JoinHandle<NavigationSession<U, S>>,
}

impl<U: UiSink, S: SpeechSink> NavigatorHandle<U, S> {
    /// Compute a fresh route from `origin` to `destination`, replacing any
    /// computation already in flight.
    pub async fn navigate(&self, origin: GeoPoint, destination: GeoPoint) -> SessionResult<()> {
        self.send(Command::Navigate { origin, destination }).await
    }

    /// The user's "next step" action.
    pub async fn next_step(&self) -> SessionResult<()> {
        self.send(Command::NextStep).await
    }

    /// Current phase and progress.  Queued fixes are processed first.
    pub async fn snapshot(&self) -> SessionResult<SessionSnapshot> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::Snapshot(tx)).await?;
        rx.await.map_err(|_| SessionError::Closed)
    }

    /// Stop the loop, cancel any in-flight computation, and hand the session
    /// back.
    pub async fn shutdown(self) -> SessionResult<NavigationSession<U, S>> {
        // The loop may already have exited; joining still returns the session.
        let _ = self.commands.send(Command::Shutdown).await;
        self.task.await.map_err(|e| SessionError::Task(e.to_string()))
    }

    async fn send(&self, command: Command) -> SessionResult<()> {
        self.commands.send(command).await.map_err(|_| SessionError::Closed)
    }
}

// ── Event loop ────────────────────────────────────────────────────────────────

async fn run<U, S, R>(
    mut session:  NavigationSession<U, S>,
    router:       Arc<R>,
    mut fixes:    mpsc::Receiver<GeoPoint>,
    mut commands: mpsc::Receiver<Command>,
) -> NavigationSession<U, S>
where
    U: UiSink,
    S: SpeechSink,
    R: Router,
{
    let timeout = session.config().routing_timeout();
    let mut inflight: Option<JoinHandle<RoutingResult<Route>>> = None;
    let mut fixes_open = true;

    info!("navigator started");

    loop {
        tokio::select! {
            biased;

            joined = join_inflight(&mut inflight) => {
                inflight = None;
                match joined {
                    Ok(Ok(route)) => {
                        session.install_route(route);
                    }
                    Ok(Err(err)) => session.route_failed(err),
                    Err(err) if err.is_cancelled() => session.cancel_pending(),
                    Err(err) => {
                        warn!(%err, "routing task panicked");
                        session.route_failed(RoutingError::Service(err.to_string()));
                    }
                }
            }

            fix = fixes.recv(), if fixes_open => match fix {
                Some(fix) => {
                    if let Some(request) = session.on_fix(fix) {
                        inflight = Some(spawn_routing(&router, request, timeout));
                    }
                }
                None => {
                    debug!("fix source closed");
                    fixes_open = false;
                }
            },

            command = commands.recv() => match command {
                Some(Command::Navigate { origin, destination }) => {
                    if let Some(handle) = inflight.take() {
                        handle.abort();
                    }
                    let request = session.request_route(origin, destination);
                    inflight = Some(spawn_routing(&router, request, timeout));
                }
                Some(Command::NextStep) => {
                    session.advance_step(true);
                }
                Some(Command::Snapshot(reply)) => {
                    // The caller may have given up waiting.
                    let _ = reply.send(session.snapshot());
                }
                Some(Command::Shutdown) | None => break,
            },
        }
    }

    if let Some(handle) = inflight.take() {
        handle.abort();
    }
    session.cancel_pending();
    info!(phase = ?session.phase(), "navigator stopped");
    session
}

/// Resolves when the in-flight task finishes; never resolves without one.
async fn join_inflight<T>(inflight: &mut Option<JoinHandle<T>>) -> Result<T, JoinError> {
    match inflight {
        Some(handle) => handle.await,
        None => std::future::pending().await,
    }
}

fn spawn_routing<R: Router>(
    router:  &Arc<R>,
    request: RerouteRequest,
    timeout: Duration,
) -> JoinHandle<RoutingResult<Route>> {
    let router = Arc::clone(router);
    tokio::spawn(async move {
        let RerouteRequest { origin, destination, profile } = request;
        match tokio::time::timeout(timeout, router.route(origin, destination, profile)).await {
            Ok(result) => result,
            Err(_) => Err(RoutingError::Timeout { secs: timeout.as_secs() }),
        }
    })
}
