//! Tracker progress state.

/// Where the traveller is along the step list.
///
/// The tracker is either **inactive** (no route, a route without steps, or
/// after arrival) or **active** (advancing and off-route detection enabled).
/// Installing a route resets the state; nothing else writes it except fixes
/// and explicit advance requests.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackerState {
    /// 0-based index of the current step; always `< steps.len()` when the
    /// route has steps.
    pub step_index: usize,

    /// `true` while step completion and reroute checks are evaluated.
    pub active: bool,
}

impl TrackerState {
    /// State for a freshly installed route.
    #[inline]
    pub fn start(has_steps: bool) -> Self {
        Self { step_index: 0, active: has_steps }
    }

    /// State with no route loaded.
    #[inline]
    pub fn idle() -> Self {
        Self::default()
    }
}
