//! `rw-location` — continuous position tracking.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                       |
//! |--------------|----------------------------------------------------------------|
//! | [`fix`]      | `LocationFix`                                                  |
//! | [`state`]    | `AuthorizationStatus`, `TrackerState`, transition table        |
//! | [`observer`] | `FixObserver` trait, `NoopObserver`, `FnObserver`              |
//! | [`tracker`]  | `LocationTracker` — latest-fix slot + subscriber set            |
//! | [`source`]   | `PositioningSource` trait, `PositioningEvent`                  |
//! | [`replay`]   | `ReplaySource`, `load_trace_csv`, `load_trace_reader`          |
//! | [`simulate`] | `simulate_walk`, `WalkParams`, `MAX_SAMPLES`                   |
//! | [`error`]    | `LocationError`, `LocationResult<T>`                           |
//!
//! # State machine
//!
//! ```text
//! Uninitialized ──start──▶ AwaitingPermission ──authorized──▶ Active
//!                                   │                           │
//!                                   └──denied/restricted──▶ Denied
//!                   Active ──downgrade──▶ AwaitingPermission | Denied
//! ```
//!
//! The positioning subsystem is external.  It pushes
//! [`PositioningEvent`]s into the tracker from whatever thread it owns; the
//! tracker keeps only the most recent fix and forwards every fix to its
//! subscribers unchanged.

pub mod error;
pub mod fix;
pub mod observer;
pub mod replay;
pub mod simulate;
pub mod source;
pub mod state;
pub mod tracker;


pub use error::{LocationError, LocationResult};
pub use fix::LocationFix;
pub use observer::{FixObserver, FnObserver, NoopObserver};
pub use replay::{ReplaySource, load_trace_csv, load_trace_reader};
pub use simulate::{MAX_SAMPLES, WalkParams, simulate_walk};
pub use source::{PositioningEvent, PositioningSource};
pub use state::{AuthorizationStatus, TrackerState};
pub use tracker::{LocationTracker, SubscriptionId};
