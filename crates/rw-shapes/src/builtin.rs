//! Offset tables for the built-in silhouettes.
//!
//! Each table is pure data: adding a silhouette means adding a table and a
//! `ShapeId` arm, never touching the route transform.  All four start at the
//! origin and return to it, so a generated route begins and ends at the
//! anchor.
//!
//! Offsets are `(north, east)`.  At the default scale one unit is 0.001°,
//! roughly 111 m of latitude.

use rw_core::ShapeId;

use crate::template::{NormalizedOffset, ShapeTemplate};

const fn o(dx: f64, dy: f64) -> NormalizedOffset {
    NormalizedOffset::new(dx, dy)
}

/// Bird with spread wings, beak pointing east.  Starts at the tail base.
pub static BIRD: [NormalizedOffset; 19] = [
    o(0.0, 0.0),
    // left body and wing
    o(4.0, -1.0),
    o(5.0, -8.0),
    o(11.0, -16.0),
    o(10.0, -18.0),
    o(8.0, -17.0),
    o(8.0, -7.0),
    // head
    o(11.0, -1.5),
    o(12.0, 0.0),
    o(11.0, 1.5),
    // beak
    o(11.5, 3.0),
    o(10.5, 1.5),
    // right wing and body
    o(8.0, 7.0),
    o(8.0, 17.0),
    o(10.0, 18.0),
    o(11.0, 16.0),
    o(5.0, 8.0),
    o(4.0, 1.0),
    o(0.0, 0.0),
];

/// Bunny head with two ears.  Starts at the chin and traces the nose first.
pub static BUNNY: [NormalizedOffset; 21] = [
    o(0.0, 0.0),
    // nose
    o(1.0, 0.0),
    o(1.5, -0.5),
    o(1.0, 0.0),
    o(1.5, 0.5),
    o(1.0, 0.0),
    o(0.0, 0.0),
    // left cheek and ear
    o(1.0, -2.0),
    o(3.0, -4.0),
    o(7.0, -3.0),
    o(10.0, -3.5),
    o(12.0, -2.0),
    o(9.0, -1.0),
    o(8.0, 0.0),
    // right ear and cheek
    o(9.0, 1.0),
    o(12.0, 2.0),
    o(10.0, 3.5),
    o(7.0, 3.0),
    o(3.0, 4.0),
    o(1.0, 2.0),
    o(0.0, 0.0),
];

/// Butterfly with antennae and four wings, each wing returning to the body.
pub static BUTTERFLY: [NormalizedOffset; 37] = [
    o(0.0, 0.0),
    o(0.8, 0.0),
    // antennae
    o(0.9, 0.1),
    o(1.0, 0.15),
    o(0.8, 0.0),
    o(0.9, -0.1),
    o(1.0, -0.15),
    o(0.8, 0.0),
    // upper east wing
    o(0.7, 0.3),
    o(0.5, 0.6),
    o(0.2, 0.8),
    o(0.05, 0.7),
    o(0.1, 0.5),
    o(0.3, 0.4),
    o(0.4, 0.2),
    o(0.8, 0.0),
    // upper west wing
    o(0.7, -0.3),
    o(0.5, -0.6),
    o(0.2, -0.8),
    o(0.05, -0.7),
    o(0.1, -0.5),
    o(0.3, -0.4),
    o(0.4, -0.2),
    o(0.8, 0.0),
    // lower east wing
    o(0.6, 0.2),
    o(0.4, 0.4),
    o(0.2, 0.5),
    o(0.1, 0.3),
    o(0.3, 0.15),
    o(0.8, 0.0),
    // lower west wing
    o(0.6, -0.2),
    o(0.4, -0.4),
    o(0.2, -0.5),
    o(0.1, -0.3),
    o(0.3, -0.15),
    o(0.8, 0.0),
    o(0.0, 0.0),
];

/// Shrimp seen from above: tail fan, segmented body, head and antennae.
pub static SHRIMP: [NormalizedOffset; 25] = [
    // tail fan
    o(0.0, 0.0),
    o(0.1, 0.2),
    o(0.05, 0.3),
    o(0.05, -0.3),
    o(0.1, -0.2),
    o(0.0, 0.0),
    // body, east side
    o(0.2, 0.15),
    o(0.4, 0.2),
    o(0.6, 0.25),
    o(0.8, 0.2),
    o(1.0, 0.15),
    // head and antennae
    o(1.2, 0.1),
    o(1.3, 0.0),
    o(1.4, 0.1),
    o(1.5, 0.15),
    o(1.4, -0.1),
    o(1.5, -0.15),
    o(1.3, 0.0),
    o(1.2, -0.1),
    // body, west side
    o(1.0, -0.15),
    o(0.8, -0.2),
    o(0.6, -0.25),
    o(0.4, -0.2),
    o(0.2, -0.15),
    o(0.0, 0.0),
];

/// The offset table for a built-in shape.
pub fn vertices(id: ShapeId) -> &'static [NormalizedOffset] {
    match id {
        ShapeId::Bird      => &BIRD[..],
        ShapeId::Bunny     => &BUNNY[..],
        ShapeId::Butterfly => &BUTTERFLY[..],
        ShapeId::Shrimp    => &SHRIMP[..],
    }
}

/// Template for a built-in shape.  Total over [`ShapeId`].
pub fn lookup(id: ShapeId) -> ShapeTemplate {
    ShapeTemplate::from_static(id.as_str(), vertices(id))
}

/// Template for a shape name.  Built-in names match case-insensitively;
/// anything else resolves to the single-point template.
pub fn lookup_name(name: &str) -> ShapeTemplate {
    match name.parse::<ShapeId>() {
        Ok(id) => lookup(id),
        Err(_) => {
            log::debug!("no built-in shape named {name:?}; using single-point template");
            ShapeTemplate::origin_only(name)
        }
    }
}
