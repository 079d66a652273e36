//! Side effects requested by the event handler.
//!
//! The handler never talks to the host directly. It returns a `Vec<Action>`
//! that the plugin shim executes in order after each event.

use std::time::Duration;

/// Commands executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Asks the host to deliver a `Tick` after the given duration.
    ///
    /// Emitted when the splash timer starts and again if a tick arrives before
    /// the deadline.
    ScheduleTimer(Duration),
}
