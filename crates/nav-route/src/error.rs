//! Routing error type.

use thiserror::Error;

use nav_core::NavError;

/// Errors produced by a [`Router`][crate::Router] or while decoding its
/// response.
///
/// All variants are recoverable: the session keeps its previous route and
/// only the status line changes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoutingError {
    #[error("network error: {0}")]
    Network(String),

    #[error("no route found")]
    NoPath,

    #[error("routing service error: {0}")]
    Service(String),

    #[error("malformed routing response: {0}")]
    Malformed(String),

    #[error("routing timed out after {secs} s")]
    Timeout { secs: u64 },

    #[error("routing request cancelled")]
    Cancelled,
}

impl From<RoutingError> for NavError {
    fn from(err: RoutingError) -> Self {
        NavError::RoutingFailed(err.to_string())
    }
}

pub type RoutingResult<T> = Result<T, RoutingError>;
