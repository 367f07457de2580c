//! `nav-route` — the route model and the routing-service seam.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`route`]       | `Step`, `Route` (polyline + steps + cumulative distances)  |
//! | [`profile`]     | `RoutingProfile` (car / bike / foot)                       |
//! | [`router`]      | async `Router` trait, `StaticRouter`                       |
//! | [`graphhopper`] | `parse_response` (feature = `"graphhopper"` only)          |
//! | [`error`]       | `RoutingError`, `RoutingResult<T>`                         |
//!
//! Route computation itself is an external service; this crate only models
//! its result and decodes one well-known response format.
//!
//! # Feature flags
//!
//! | Flag          | Effect                                                   |
//! |---------------|----------------------------------------------------------|
//! | `graphhopper` | Enables GraphHopper JSON decoding via `serde_json`.      |
//! | `serde`       | Derives `Serialize`/`Deserialize` on public types.       |

pub mod error;
pub mod profile;
pub mod route;
pub mod router;

#[cfg(feature = "graphhopper")]
pub mod graphhopper;

#[cfg(test)]
mod tests;

pub use error::{RoutingError, RoutingResult};
pub use profile::RoutingProfile;
pub use route::{Route, Step};
pub use router::{Router, StaticRouter};
