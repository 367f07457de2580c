//! `nav-tracker` — route projection and per-fix navigation events.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`state`]   | `TrackerState` — current step index + active flag               |
//! | [`event`]   | `NavEvent`, `Progress`, `TrackUpdate`                           |
//! | [`tracker`] | `RouteTracker` — owns the route, consumes one fix at a time     |
//!
//! # Per-fix pipeline
//!
//! 1. Project the fix onto the route polyline.
//! 2. Display the projection if it is within the snap threshold, else the
//!    raw fix.
//! 3. If the display point is within the step-complete threshold of the
//!    current step's end point, advance (`StepAdvanced` or `Arrived`).
//! 4. If the fix is beyond the reroute threshold, emit `RerouteNeeded`.
//!
//! Step logic always runs before the reroute check, and both only run while
//! the tracker is active.  The tracker never calls the routing service: the
//! caller reacts to `RerouteNeeded` and installs the new route.

pub mod event;
pub mod state;
pub mod tracker;


pub use event::{NavEvent, Progress, TrackUpdate};
pub use state::TrackerState;
pub use tracker::RouteTracker;
