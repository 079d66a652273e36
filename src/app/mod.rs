//! Application layer coordinating state, events and actions.
//!
//! Sits between the plugin shim (`main.rs`) and the pure domain layer:
//!
//! ```text
//! Host Input → Events → handle_event → State Mutations → Actions → Host Calls
//!                                            │
//!                                            └→ compute_viewmodel → ui::render
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Screen and input mode types
//! - [`splash`]: Splash timer, clocks and cancellation
//! - [`state`]: Application state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod splash;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{InputMode, Screen};
pub use splash::{CancellationToken, Clock, ManualClock, SplashState, SplashTimer, SystemClock};
pub use state::AppState;
