//! `rw-core` — foundational value types for the `run_wild` route workspace.
//!
//! This crate is a dependency of every other `rw-*` crate.  It has no `rw-*`
//! dependencies and minimal external ones (only `thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`geo`]     | `GeoCoordinate`, haversine distance                   |
//! | [`goal`]    | `DistanceGoal` with default substitution              |
//! | [`shape`]   | `ShapeId` enum of built-in silhouettes                |
//! | [`time`]    | `Timestamp` (Unix milliseconds)                       |
//! | [`error`]   | `RwError`, `RwResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod goal;
pub mod shape;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{RwError, RwResult};
pub use geo::GeoCoordinate;
pub use goal::DistanceGoal;
pub use shape::ShapeId;
pub use time::Timestamp;
