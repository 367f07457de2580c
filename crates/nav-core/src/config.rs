//! Navigation policy configuration.
//!
//! The three distance thresholds decide every per-fix outcome:
//!
//! | Field                        | Default | Effect                                   |
//! |------------------------------|---------|------------------------------------------|
//! | `snap_threshold_m`           | 20 m    | Closer fixes are snapped onto the route  |
//! | `step_complete_threshold_m`  | 25 m    | Closer to a step's end point → advance   |
//! | `reroute_threshold_m`        | 40 m    | Farther from the route → request reroute |
//!
//! All comparisons are strict (`<` for snap and step-complete, `>` for
//! reroute), so a fix exactly on a threshold does not trigger.

use crate::{NavError, NavResult};

/// Top-level navigation configuration.
///
/// Typically loaded from a JSON file by the application crate and passed to
/// the session builder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavConfig {
    /// Fixes nearer than this to the route are displayed at their projection.
    pub snap_threshold_m: f64,

    /// A step completes when the display point is nearer than this to the
    /// step's end point.
    pub step_complete_threshold_m: f64,

    /// A reroute is requested when the fix is farther than this from every
    /// route segment.
    pub reroute_threshold_m: f64,

    /// Upper bound on a single routing request, seconds.
    pub routing_timeout_secs: u64,

    /// Phrase spoken on arrival.
    pub arrival_phrase: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            snap_threshold_m:          20.0,
            step_complete_threshold_m: 25.0,
            reroute_threshold_m:       40.0,
            routing_timeout_secs:      30,
            arrival_phrase:            "You have arrived".to_string(),
        }
    }
}

impl NavConfig {
    /// Reject thresholds that are negative or not finite, and a zero timeout.
    pub fn validate(&self) -> NavResult<()> {
        let thresholds = [
            ("snap_threshold_m", self.snap_threshold_m),
            ("step_complete_threshold_m", self.step_complete_threshold_m),
            ("reroute_threshold_m", self.reroute_threshold_m),
        ];
        for (name, value) in thresholds {
            if !value.is_finite() || value < 0.0 {
                return Err(NavError::Config(format!(
                    "{name} must be a finite, non-negative distance (got {value})"
                )));
            }
        }
        if self.routing_timeout_secs == 0 {
            return Err(NavError::Config("routing_timeout_secs must be > 0".to_string()));
        }
        Ok(())
    }

    /// Routing timeout as a `Duration`.
    #[inline]
    pub fn routing_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.routing_timeout_secs)
    }
}
