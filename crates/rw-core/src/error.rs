//! Workspace error type.
//!
//! The route pipeline itself never fails; these errors only come out of the
//! parsing and I/O edges.  Sub-crates define their own enums and wrap
//! `RwError` as one variant where they need it.

use thiserror::Error;

/// The top-level error type for `rw-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum RwError {
    #[error("unknown shape {0:?}")]
    UnknownShape(String),

    #[error("coordinate ({lat}, {lon}) is out of range")]
    InvalidCoordinate { lat: f64, lon: f64 },

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for all `rw-*` crates.
pub type RwResult<T> = Result<T, RwError>;
