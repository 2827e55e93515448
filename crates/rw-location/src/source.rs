//! The seam to the device positioning subsystem.

use crate::fix::LocationFix;
use crate::state::AuthorizationStatus;
use crate::tracker::LocationTracker;

/// Something the positioning subsystem reports.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PositioningEvent {
    Authorization(AuthorizationStatus),
    Fix(LocationFix),
}

/// Permission, start and stop primitives of a positioning subsystem.
///
/// Implementations deliver events by calling
/// [`LocationTracker::handle`] on the tracker handle they are given, from any
/// thread.  The tracker never polls.
pub trait PositioningSource {
    /// Ask for permission.  The answer arrives later (or immediately) as a
    /// [`PositioningEvent::Authorization`].
    fn request_authorization(&mut self, tracker: &LocationTracker);

    /// Begin delivering fixes to `tracker`.
    fn start_updates(&mut self, tracker: LocationTracker);

    /// Stop delivering fixes.  Must be safe to call more than once.
    fn stop_updates(&mut self);
}
