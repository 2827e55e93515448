//! Subscriber trait for tracker notifications.

use crate::fix::LocationFix;
use crate::state::TrackerState;

/// Callbacks invoked by [`LocationTracker`][crate::LocationTracker] on the
/// thread that delivered the event.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// Callbacks run while the tracker's subscriber list is locked: an observer
/// must not call back into the tracker (subscribe, unsubscribe or read the
/// current fix) from inside a callback.  The fix it is handed is already
/// the current one.
///
/// # Example — camera follower
///
/// ```rust,ignore
/// struct Follow(Arc<Mutex<Viewport>>);
///
/// impl FixObserver for Follow {
///     fn on_fix(&mut self, fix: &LocationFix) {
///         let mut v = self.0.lock().unwrap();
///         *v = v.recentered(fix.coordinate);
///     }
/// }
/// ```
pub trait FixObserver: Send {
    /// Called once for every fix accepted by the tracker, in delivery order.
    fn on_fix(&mut self, _fix: &LocationFix) {}

    /// Called whenever the tracker changes state.
    fn on_state_changed(&mut self, _from: TrackerState, _to: TrackerState) {}
}

/// A [`FixObserver`] that does nothing.
pub struct NoopObserver;

impl FixObserver for NoopObserver {}

/// Adapts a closure into a [`FixObserver`] that only cares about fixes.
pub struct FnObserver<F>(pub F);

impl<F> FixObserver for FnObserver<F>
where
    F: FnMut(&LocationFix) + Send,
{
    fn on_fix(&mut self, fix: &LocationFix) {
        (self.0)(fix)
    }
}
