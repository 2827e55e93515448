//! `rw-app` — the state shared between the controls, the generator and the
//! map.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                    |
//! |------------|-------------------------------------------------------------|
//! | [`state`]  | `AppState`, `GenerateOutcome`                               |
//! | [`camera`] | `MapCamera`, `CameraFollower`                               |
//! | [`config`] | `AppConfig` (JSON)                                          |
//! | [`error`]  | `AppError`, `AppResult<T>`                                  |
//!
//! # Data flow
//!
//! ```text
//! LocationTracker ──fix──▶ CameraFollower ──▶ MapCamera
//!        │
//!        └── current_fix() ──▶ AppState::generate ──▶ Route ──▶ MapCamera::frame
//! ```
//!
//! `AppState` is passed by reference to whoever needs it; there is no global.
//! Each field has exactly one setter.

pub mod camera;
pub mod config;
pub mod error;
pub mod state;


pub use camera::{CameraFollower, MapCamera};
pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use state::{AppState, GenerateOutcome};
