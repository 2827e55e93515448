//! The user-requested distance goal.
//!
//! The goal is the only user-typed number that reaches the route pipeline, so
//! it is sanitised at construction: anything that is not a positive finite
//! number becomes [`DistanceGoal::DEFAULT`].  There is no error path.

use std::fmt;

/// A positive, finite distance goal in caller-chosen units.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "f64", into = "f64"))]
pub struct DistanceGoal(f64);

impl DistanceGoal {
    /// Substituted for every invalid input.
    pub const DEFAULT: DistanceGoal = DistanceGoal(1.0);

    /// Wrap `value`, substituting [`DEFAULT`](Self::DEFAULT) if it is
    /// non-positive, NaN or infinite.
    #[inline]
    pub fn new(value: f64) -> Self {
        if value.is_finite() && value > 0.0 {
            DistanceGoal(value)
        } else {
            Self::DEFAULT
        }
    }

    /// Parse free text from the distance field.  Empty or malformed input
    /// yields the default goal.
    pub fn parse(text: &str) -> Self {
        text.trim()
            .parse::<f64>()
            .map(Self::new)
            .unwrap_or(Self::DEFAULT)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for DistanceGoal {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<f64> for DistanceGoal {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<DistanceGoal> for f64 {
    fn from(goal: DistanceGoal) -> f64 {
        goal.0
    }
}

impl fmt::Display for DistanceGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
