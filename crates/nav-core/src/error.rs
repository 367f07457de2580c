//! Navigation error type.
//!
//! Sub-crates define their own error enums and convert them into `NavError`
//! via `From` impls where a failure has to reach the user as status text.
//! Nothing in this type is fatal: every variant leaves the navigator in its
//! last-known-good state.

use thiserror::Error;

/// The top-level error type for `nav-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum NavError {
    /// Network, parse, or empty-result failure from the routing collaborator.
    #[error("{0}")]
    RoutingFailed(String),

    /// The routing collaborator returned a route without steps.
    #[error("route has no steps")]
    InvalidRoute,

    /// A polyline with fewer than two points has no segments to project on.
    #[error("route polyline has {points} point(s); at least 2 are needed for projection")]
    DegenerateGeometry { points: usize },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `nav-*` crates.
pub type NavResult<T> = Result<T, NavError>;
