//! `nav-core` — foundational types for the turn-by-turn navigation tracker.
//!
//! This crate is a dependency of every other `nav-*` crate.  It has no
//! `nav-*` dependencies and minimal external ones (only `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`geo`]       | `GeoPoint`, haversine distance                             |
//! | [`geodesy`]   | Segment / polyline projection, `Projection`                |
//! | [`config`]    | `NavConfig` — snap, step-complete, and reroute thresholds  |
//! | [`error`]     | `NavError`, `NavResult`                                    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod geodesy;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::NavConfig;
pub use error::{NavError, NavResult};
pub use geo::{EARTH_RADIUS_M, GeoPoint, distance};
pub use geodesy::{
    Projection, nearest_point_on_polyline, nearest_point_on_segment, project_onto_polyline,
};
