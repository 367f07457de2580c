//! GraphHopper `/route` response decoding.
//!
//! Only the subset of the response needed for navigation is read, for a
//! request made with `points_encoded=false&instructions=true`:
//!
//! ```json
//! { "paths": [ {
//!     "distance": 1234.5,            // metres
//!     "time": 98000,                 // milliseconds
//!     "points": { "coordinates": [[lon, lat], …] },
//!     "instructions": [
//!       { "text": "Turn left", "distance": 120.0, "time": 15000, "interval": [0, 3] }
//!     ]
//! } ] }
//! ```
//!
//! A step ends at `coordinates[interval[1]]`, clamped to the last point.
//! Missing `distance`/`time` fields default to 0.  An error response
//! (`{"message": "…"}`) maps to [`RoutingError::Service`].

use serde::Deserialize;
use tracing::debug;

use nav_core::GeoPoint;

use crate::{Route, RoutingError, RoutingResult, Step};

// ── Response shape ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct Response {
    #[serde(default)]
    paths:   Vec<Path>,
    message: Option<String>,
}

#[derive(Deserialize)]
struct Path {
    #[serde(default)]
    distance:     f64,
    #[serde(default)]
    time:         f64,
    points:       Points,
    instructions: Vec<Instruction>,
}

#[derive(Deserialize)]
struct Points {
    coordinates: Vec<Vec<f64>>,
}

#[derive(Deserialize)]
struct Instruction {
    text:     String,
    #[serde(default)]
    distance: f64,
    #[serde(default)]
    time:     f64,
    interval: (usize, usize),
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Decode a GraphHopper response body into a [`Route`] ending at
/// `destination`.
pub fn parse_response(body: &str, destination: GeoPoint) -> RoutingResult<Route> {
    let response: Response =
        serde_json::from_str(body).map_err(|e| RoutingError::Malformed(e.to_string()))?;

    let Some(path) = response.paths.into_iter().next() else {
        return Err(match response.message {
            Some(msg) => RoutingError::Service(msg),
            None      => RoutingError::NoPath,
        });
    };

    let polyline = path
        .points
        .coordinates
        .iter()
        .map(|c| match c.as_slice() {
            [lon, lat, ..] => Ok(GeoPoint::new(*lat, *lon)),
            _ => Err(RoutingError::Malformed(format!(
                "coordinate needs [lon, lat], got {} value(s)",
                c.len()
            ))),
        })
        .collect::<RoutingResult<Vec<_>>>()?;

    let Some(last_index) = polyline.len().checked_sub(1) else {
        return Err(RoutingError::Malformed("path has no coordinates".to_string()));
    };

    let steps: Vec<Step> = path
        .instructions
        .into_iter()
        .map(|ins| {
            let end = polyline[ins.interval.1.min(last_index)];
            Step::new(ins.text, ins.distance, ins.time / 1000.0, end)
        })
        .collect();

    debug!(points = polyline.len(), steps = steps.len(), "decoded GraphHopper path");

    Ok(Route::new(polyline, steps, destination, path.distance, path.time / 1000.0))
}
