//! `rw-shapes` — the shape template library.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`template`] | `NormalizedOffset`, `ShapeTemplate`, `OffsetBounds`        |
//! | [`builtin`]  | Offset tables for the four silhouettes, `lookup`, `lookup_name` |
//! | [`library`]  | `ShapeLibrary` — name → template registry                  |
//! | [`loader`]   | `load_templates_csv`, `load_templates_reader`              |
//! | [`error`]    | `ShapeError`, `ShapeResult<T>`                             |
//!
//! # Offsets
//!
//! A template is an ordered list of unitless `(dx, dy)` offsets from the
//! shape's local origin.  `dx` is the northward component (added to latitude)
//! and `dy` the eastward one (added to longitude).  Vertex order is walking
//! order.  Templates are never mutated once built.
//!
//! Lookups are total: a name nobody registered resolves to the single-point
//! template `[(0, 0)]`, which generates a route that is just the anchor.

pub mod builtin;
pub mod error;
pub mod library;
pub mod loader;
pub mod template;

#[cfg(test)]
mod tests;

pub use builtin::{lookup, lookup_name};
pub use error::{ShapeError, ShapeResult};
pub use library::ShapeLibrary;
pub use loader::{load_templates_csv, load_templates_reader};
pub use template::{NormalizedOffset, OffsetBounds, ShapeTemplate};
