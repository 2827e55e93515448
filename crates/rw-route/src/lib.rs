//! `rw-route` — turns a shape template into a walkable route.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`generator`] | `RouteGenerator`, `LongitudeScaling`, `generate`, `BASE_UNIT` |
//! | [`route`]     | `Route`, `GeoBounds`                                       |
//! | [`viewport`]  | `Viewport` — center + span for the map renderer            |
//! | [`export`]    | `write_route_csv`, `route_geojson`                         |
//! | [`error`]     | `RouteError`, `RouteResult<T>`                             |
//!
//! # Transform
//!
//! ```text
//! s         = base_unit * goal
//! coord[i]  = (anchor.lat + dx[i] * s, anchor.lon + dy[i] * s)
//! ```
//!
//! Template order is walking order and is preserved exactly; nothing is
//! deduplicated, simplified or closed.  Generation is a pure function and
//! never fails: invalid goals become 1.0 and unknown shapes become the anchor
//! alone.

pub mod error;
pub mod export;
pub mod generator;
pub mod route;
pub mod viewport;

#[cfg(test)]
mod tests;

pub use error::{RouteError, RouteResult};
pub use export::{route_geojson, write_route_csv, write_route_geojson};
pub use generator::{BASE_UNIT, LongitudeScaling, RouteGenerator, generate};
pub use route::{GeoBounds, Route};
pub use viewport::Viewport;
