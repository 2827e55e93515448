//! Identifiers for the built-in silhouettes.
//!
//! The picker in front of the route pipeline only ever offers these four, so
//! the enum is closed.  Free-text names (CLI flags, config files, custom
//! template libraries) go through `FromStr`, and `rw-shapes` maps names it
//! does not know to a degenerate single-point template.

use std::str::FromStr;

use crate::RwError;

/// A built-in silhouette.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShapeId {
    #[default]
    Bird,
    Bunny,
    Butterfly,
    Shrimp,
}

impl ShapeId {
    /// All built-in shapes in picker order.
    pub const ALL: [ShapeId; 4] = [
        ShapeId::Bird,
        ShapeId::Bunny,
        ShapeId::Butterfly,
        ShapeId::Shrimp,
    ];

    /// Display name, also the lookup key in shape libraries.
    pub fn as_str(self) -> &'static str {
        match self {
            ShapeId::Bird      => "Bird",
            ShapeId::Bunny     => "Bunny",
            ShapeId::Butterfly => "Butterfly",
            ShapeId::Shrimp    => "Shrimp",
        }
    }
}

impl FromStr for ShapeId {
    type Err = RwError;

    /// Case-insensitive match against the built-in names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ShapeId::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| RwError::UnknownShape(s.to_owned()))
    }
}

impl std::fmt::Display for ShapeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
