//! Millisecond timestamp sources
//!
//! The animator never reads the system time directly; it is handed
//! timestamps from a [`Clock`] so tests and the CLI simulator can drive it
//! deterministically.

use std::cell::Cell;

/// A source of millisecond timestamps
pub trait Clock {
    /// Current time in milliseconds. Only differences between readings matter.
    fn now_ms(&self) -> f64;
}

/// Wall-clock time in milliseconds since the Unix epoch
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        chrono::Utc::now().timestamp_millis() as f64
    }
}

/// A clock that only moves when told to
///
/// # Example
///
/// ```
/// use vantui_core::clock::{Clock, ManualClock};
///
/// let clock = ManualClock::new(0.0);
/// clock.advance(16.0);
/// assert_eq!(clock.now_ms(), 16.0);
/// ```
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new(start_ms: f64) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    /// Move the clock forward by `delta_ms`
    pub fn advance(&self, delta_ms: f64) {
        self.now.set(self.now.get() + delta_ms);
    }

    /// Jump to an absolute timestamp
    pub fn set(&self, now_ms: f64) {
        self.now.set(now_ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> f64 {
        (**self).now_ms()
    }
}
