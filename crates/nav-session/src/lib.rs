//! `nav-session` — the navigation session and its async driver.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`session`] | `NavigationSession` state machine (Idle / Navigating / Arrived) |
//! | [`builder`] | `SessionBuilder`                                                |
//! | [`sink`]    | `UiSink`, `SpeechSink`, `NoopSink`                              |
//! | [`runtime`] | `Navigator` — tokio loop over fixes, commands, and routing      |
//! | [`replay`]  | `load_fixes_csv` — recorded fixes for offline replay            |
//! | [`error`]   | `SessionError`, `SessionResult<T>`                              |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use nav_route::StaticRouter;
//! use nav_session::{Navigator, NoopSink, SessionBuilder};
//!
//! let session = SessionBuilder::new(NoopSink, NoopSink).build()?;
//! let (fix_tx, fix_rx) = tokio::sync::mpsc::channel(64);
//! let handle = Navigator::spawn(session, Arc::new(StaticRouter::new(route)), fix_rx);
//!
//! handle.navigate(origin, destination).await?;
//! fix_tx.send(origin).await?;
//! let session = handle.shutdown().await?;
//! ```

pub mod builder;
pub mod error;
pub mod replay;
pub mod runtime;
pub mod session;
pub mod sink;


pub use builder::SessionBuilder;
pub use error::{SessionError, SessionResult};
pub use replay::{load_fixes_csv, load_fixes_reader};
pub use runtime::{Navigator, NavigatorHandle};
pub use session::{
    NavigationSession, RerouteRequest, SessionPhase, SessionSnapshot, format_summary,
    STATUS_ARRIVED, STATUS_NO_STEPS, STATUS_ROUTING_FAILED, UTTERANCE_ARRIVED,
};
pub use sink::{NoopSink, SpeechSink, UiSink};
