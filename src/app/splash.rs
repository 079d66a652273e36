//! Splash screen timer with an injectable clock.
//!
//! The splash delay is modelled as an explicit timer rather than a sleep. The
//! host schedules a wake-up (Zellij `set_timeout`) and on each tick the shell
//! asks the timer whether the deadline has passed according to its [`Clock`].
//! Tests drive a [`ManualClock`] so no real time passes.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Default time the splash screen stays up.
pub const DEFAULT_SPLASH_DELAY: Duration = Duration::from_secs(2);

/// Monotonic time source.
pub trait Clock: std::fmt::Debug {
    /// Time elapsed since an arbitrary fixed origin.
    fn now(&self) -> Duration;
}

/// Wall-clock backed [`Clock`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// A clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Cloneable cancellation flag shared between a timer and its owner.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Where a [`SplashTimer`] stands at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashState {
    Pending { remaining: Duration },
    Elapsed,
    Cancelled,
}

/// One-shot deadline for leaving the splash screen.
#[derive(Debug, Clone)]
pub struct SplashTimer {
    started_at: Duration,
    delay: Duration,
    token: CancellationToken,
}

impl SplashTimer {
    /// Starts a timer at `now` that elapses after `delay`.
    #[must_use]
    pub fn start(now: Duration, delay: Duration) -> Self {
        tracing::debug!(delay = ?delay, "splash timer started");
        Self {
            started_at: now,
            delay,
            token: CancellationToken::new(),
        }
    }

    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Handle that can cancel this timer from elsewhere.
    #[must_use]
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    #[must_use]
    pub fn state(&self, now: Duration) -> SplashState {
        if self.token.is_cancelled() {
            return SplashState::Cancelled;
        }
        let deadline = self.started_at + self.delay;
        if now >= deadline {
            SplashState::Elapsed
        } else {
            SplashState::Pending {
                remaining: deadline - now,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_until_deadline() {
        let clock = ManualClock::new();
        let timer = SplashTimer::start(clock.now(), DEFAULT_SPLASH_DELAY);

        clock.advance(Duration::from_millis(1500));
        assert_eq!(
            timer.state(clock.now()),
            SplashState::Pending {
                remaining: Duration::from_millis(500)
            }
        );

        clock.advance(Duration::from_millis(500));
        assert_eq!(timer.state(clock.now()), SplashState::Elapsed);
    }

    #[test]
    fn test_cancel_through_token() {
        let clock = ManualClock::new();
        let timer = SplashTimer::start(clock.now(), Duration::from_secs(1));
        timer.token().cancel();

        clock.advance(Duration::from_secs(5));
        assert_eq!(timer.state(clock.now()), SplashState::Cancelled);
    }

    #[test]
    fn test_zero_delay_elapses_immediately() {
        let timer = SplashTimer::start(Duration::from_secs(3), Duration::ZERO);
        assert_eq!(timer.state(Duration::from_secs(3)), SplashState::Elapsed);
    }

    #[test]
    fn test_manual_clock_clones_share_time() {
        let clock = ManualClock::new();
        let other = clock.clone();
        clock.advance(Duration::from_secs(1));
        assert_eq!(other.now(), Duration::from_secs(1));
    }

    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
