use nav_core::NavError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Nav(#[from] NavError),

    #[error("fix CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("navigator task is no longer running")]
    Closed,

    #[error("navigator task failed: {0}")]
    Task(String),
}

pub type SessionResult<T> = Result<T, SessionError>;
