//! Authorization states and the tracker state machine.

use std::fmt;

/// Permission state reported by the positioning subsystem.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AuthorizationStatus {
    /// The user has not answered the permission prompt yet.
    #[default]
    NotDetermined,
    Denied,
    /// Blocked by policy; treated exactly like `Denied`.
    Restricted,
    AuthorizedWhenInUse,
    AuthorizedAlways,
}

impl AuthorizationStatus {
    /// `true` if fixes may be delivered.
    #[inline]
    pub fn is_authorized(self) -> bool {
        matches!(
            self,
            AuthorizationStatus::AuthorizedWhenInUse | AuthorizationStatus::AuthorizedAlways
        )
    }
}

/// Lifecycle of a [`LocationTracker`][crate::LocationTracker].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrackerState {
    /// `start` has not been called.
    #[default]
    Uninitialized,
    /// Waiting for the user (or the subsystem) to grant permission.
    AwaitingPermission,
    /// Permission refused.  Stays here until the subsystem reports a change.
    Denied,
    /// Fixes are being accepted.
    Active,
}

impl TrackerState {
    /// State after the subsystem reports `status`.
    ///
    /// `Uninitialized` ignores authorization reports; only `start` leaves it.
    pub fn on_authorization(self, status: AuthorizationStatus) -> TrackerState {
        if self == TrackerState::Uninitialized {
            return self;
        }
        match status {
            s if s.is_authorized()             => TrackerState::Active,
            AuthorizationStatus::NotDetermined => TrackerState::AwaitingPermission,
            _                                  => TrackerState::Denied,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TrackerState::Uninitialized      => "uninitialized",
            TrackerState::AwaitingPermission => "awaiting-permission",
            TrackerState::Denied             => "denied",
            TrackerState::Active             => "active",
        }
    }
}

impl fmt::Display for TrackerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
