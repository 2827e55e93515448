//! Wall-clock timestamps for location fixes.
//!
//! Fixes carry the time the positioning subsystem observed them, not the time
//! they were handled.  Nothing in the workspace tracks staleness; callers that
//! care compare a fix timestamp against [`Timestamp::now`] themselves.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Milliseconds since the Unix epoch.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub const EPOCH: Timestamp = Timestamp(0);

    /// Current system time.  Clocks set before 1970 read as the epoch.
    pub fn now() -> Self {
        let ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0);
        Timestamp(ms)
    }

    #[inline]
    pub fn from_secs(secs: i64) -> Self {
        Timestamp(secs.saturating_mul(1_000))
    }

    /// Milliseconds elapsed from `self` to `now`; zero if `now` is earlier.
    #[inline]
    pub fn age_ms(self, now: Timestamp) -> i64 {
        now.0.saturating_sub(self.0).max(0)
    }
}

impl std::ops::Add<i64> for Timestamp {
    type Output = Timestamp;
    #[inline]
    fn add(self, rhs: i64) -> Timestamp {
        Timestamp(self.0.saturating_add(rhs))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}
