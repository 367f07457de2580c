//! Collaborator traits for the user-facing side effects of a session.

use nav_core::GeoPoint;
use nav_route::Route;

/// Receives status-line updates and map-refresh notifications.
///
/// All methods except [`show_status`][Self::show_status] have default no-op
/// implementations so implementors only need to override what they render.
///
/// # Example: terminal status line
///
/// ```rust,ignore
/// struct Terminal;
///
/// impl UiSink for Terminal {
///     fn show_status(&mut self, primary: &str, secondary: &str) {
///         println!("{primary} | {secondary}");
///     }
/// }
/// ```
pub trait UiSink: Send + 'static {
    /// `primary` is the current instruction or a status word ("Arrived",
    /// "Routing failed", "No steps"); `secondary` is the ETA summary or an
    /// error detail, possibly empty.
    fn show_status(&mut self, primary: &str, secondary: &str);

    /// A new route was installed; redraw its geometry.
    fn route_changed(&mut self, _route: &Route) {}

    /// Where to draw the traveller after a fix.
    fn position_changed(&mut self, _display_point: GeoPoint, _snapped: bool) {}
}

/// Vocalizes instructions.
///
/// A new utterance is expected to interrupt any utterance still playing.
pub trait SpeechSink: Send + 'static {
    fn speak(&mut self, text: &str, utterance_id: &str);
}

/// A [`UiSink`] and [`SpeechSink`] that does nothing.  Use when a session
/// runs headless.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl UiSink for NoopSink {
    fn show_status(&mut self, _primary: &str, _secondary: &str) {}
}

impl SpeechSink for NoopSink {
    fn speak(&mut self, _text: &str, _utterance_id: &str) {}
}
