//! The latest-fix slot and its subscribers.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::fix::LocationFix;
use crate::observer::FixObserver;
use crate::source::{PositioningEvent, PositioningSource};
use crate::state::{AuthorizationStatus, TrackerState};

/// Handle returned by [`LocationTracker::subscribe`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct SubscriptionId(pub u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SubscriptionId({})", self.0)
    }
}

/// State and latest fix change together under one lock, so a denial can
/// never interleave with an in-flight fix.
struct Slot {
    state:  TrackerState,
    latest: Option<LocationFix>,
}

struct Inner {
    slot:        Mutex<Slot>,
    subscribers: Mutex<Vec<(SubscriptionId, Box<dyn FixObserver>)>>,
    next_id:     AtomicU64,
}

/// Tracks the device position as reported by a [`PositioningSource`].
///
/// `LocationTracker` is a cheap, cloneable handle: every clone refers to the
/// same slot and subscriber set.  The positioning subsystem is the only
/// writer (through [`handle`](Self::handle)); anyone may read
/// [`current_fix`](Self::current_fix).
///
/// Nothing here is an error.  A denied permission just means `current_fix`
/// stays `None`; a silent subsystem means the last fix stays current for as
/// long as it takes.  Staleness is the caller's business: compare
/// `fix.timestamp` against the clock.
#[derive(Clone)]
pub struct LocationTracker {
    inner: Arc<Inner>,
}

impl Default for LocationTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LocationTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocationTracker")
            .field("state", &self.state())
            .field("current_fix", &self.current_fix())
            .finish()
    }
}

impl LocationTracker {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                slot:        Mutex::new(Slot { state: TrackerState::Uninitialized, latest: None }),
                subscribers: Mutex::new(Vec::new()),
                next_id:     AtomicU64::new(0),
            }),
        }
    }

    // ── Reads ─────────────────────────────────────────────────────────────

    pub fn state(&self) -> TrackerState {
        self.slot().state
    }

    /// The most recent fix, or `None` before the first one arrives and while
    /// permission is denied.
    pub fn current_fix(&self) -> Option<LocationFix> {
        let slot = self.slot();
        match slot.state {
            TrackerState::Denied => None,
            _ => slot.latest,
        }
    }

    // ── Subscriptions ─────────────────────────────────────────────────────

    /// Register `observer` for every subsequent fix and state change.
    pub fn subscribe<O: FixObserver + 'static>(&self, observer: O) -> SubscriptionId {
        let id = SubscriptionId(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        self.subscribers().push((id, Box::new(observer)));
        log::debug!("location subscriber {id} added");
        id
    }

    /// Remove a subscriber.  Returns `false` if `id` was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subs = self.subscribers();
        let before = subs.len();
        subs.retain(|(sid, _)| *sid != id);
        before != subs.len()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers().len()
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Leave `Uninitialized`, ask `source` for permission and start updates.
    ///
    /// Calling `start` again restarts the source without changing state.
    pub fn start<S: PositioningSource + ?Sized>(&self, source: &mut S) {
        {
            let slot = self.slot();
            if slot.state == TrackerState::Uninitialized {
                self.transition(slot, TrackerState::AwaitingPermission);
            }
        }
        source.request_authorization(self);
        source.start_updates(self.clone());
    }

    /// Stop the source.  There is no in-flight work to cancel; the last fix
    /// stays readable.
    pub fn stop<S: PositioningSource + ?Sized>(&self, source: &mut S) {
        source.stop_updates();
        log::info!("location updates stopped");
    }

    // ── Event intake ──────────────────────────────────────────────────────

    /// Feed one event from the positioning subsystem.
    pub fn handle(&self, event: PositioningEvent) {
        match event {
            PositioningEvent::Authorization(status) => self.on_authorization(status),
            PositioningEvent::Fix(fix)              => self.on_fix(fix),
        }
    }

    fn on_authorization(&self, status: AuthorizationStatus) {
        let mut slot = self.slot();
        let current = slot.state;
        if current == TrackerState::Uninitialized {
            log::debug!("authorization {status:?} reported before start; ignored");
            return;
        }
        let next = current.on_authorization(status);
        if next == TrackerState::Denied {
            slot.latest = None;
            if current != TrackerState::Denied {
                log::warn!("location permission {status:?}; no fixes will be available");
            }
        }
        if next != current {
            self.transition(slot, next);
        }
    }

    fn on_fix(&self, fix: LocationFix) {
        if !fix.coordinate.is_valid() {
            log::warn!("fix {fix} has an out-of-range coordinate; dropped");
            return;
        }

        let mut slot = self.slot();
        if slot.state != TrackerState::Active {
            log::debug!("fix {fix} dropped while {}", slot.state);
            return;
        }
        slot.latest = Some(fix);
        log::trace!("fix {fix}");

        // Take the subscriber lock before releasing the slot so observers
        // see fixes and transitions in the order the slot applied them.
        let mut subs = self.subscribers();
        drop(slot);
        for (_, obs) in subs.iter_mut() {
            obs.on_fix(&fix);
        }
    }

    fn transition(&self, mut slot: MutexGuard<'_, Slot>, to: TrackerState) {
        let from = std::mem::replace(&mut slot.state, to);
        let mut subs = self.subscribers();
        drop(slot);

        log::info!("location tracker {from} -> {to}");
        for (_, obs) in subs.iter_mut() {
            obs.on_state_changed(from, to);
        }
    }

    fn slot(&self) -> MutexGuard<'_, Slot> {
        self.inner.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn subscribers(&self) -> MutexGuard<'_, Vec<(SubscriptionId, Box<dyn FixObserver>)>> {
        self.inner.subscribers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
