//! Route export error type.  Generation itself has no error path.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type RouteResult<T> = Result<T, RouteError>;
