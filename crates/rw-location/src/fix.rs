//! A single observed position sample.

use rw_core::{GeoCoordinate, Timestamp};

/// One `(coordinate, timestamp)` sample from the positioning subsystem.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationFix {
    pub coordinate: GeoCoordinate,
    /// When the subsystem observed the position.
    pub timestamp: Timestamp,
}

impl LocationFix {
    #[inline]
    pub fn new(coordinate: GeoCoordinate, timestamp: Timestamp) -> Self {
        Self { coordinate, timestamp }
    }

    /// A fix stamped with the current system time.
    pub fn now(coordinate: GeoCoordinate) -> Self {
        Self::new(coordinate, Timestamp::now())
    }
}

impl std::fmt::Display for LocationFix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} @ {}", self.coordinate, self.timestamp)
    }
}
