//! # Clock Seam
//!
//! The business day rolls over whenever the wall clock crosses midnight, and
//! every operation checks for that on entry. Reading the clock through a trait
//! keeps the rollover logic testable: production uses [`SystemClock`], tests
//! pin time with [`ManualClock`] and move it across midnight by hand.

use std::sync::{Arc, Mutex};

use chrono::{Duration, Local, NaiveDateTime};

/// Source of the current local wall-clock time.
pub trait Clock: Send + Sync {
    /// The current local time, second precision is all the domain needs.
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock. The only clock used outside of tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same instant, so a test can hand one handle to the
/// service and keep another to advance time later.
///
/// ## Example
/// ```ignore
/// let clock = ManualClock::starting_at(parse("2025-08-25 23:59:00"));
/// clock.advance(Duration::minutes(2)); // now past midnight
/// ```
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<NaiveDateTime>>,
}

impl ManualClock {
    /// Creates a clock pinned at `now`.
    pub fn starting_at(now: NaiveDateTime) -> Self {
        ManualClock {
            now: Arc::new(Mutex::new(now)),
        }
    }

    /// Jumps the clock to `now`.
    pub fn set(&self, now: NaiveDateTime) {
        *self.now.lock().expect("Clock mutex poisoned") = now;
    }

    /// Moves the clock forward by `delta`.
    pub fn advance(&self, delta: Duration) {
        let mut now = self.now.lock().expect("Clock mutex poisoned");
        *now += delta;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.lock().expect("Clock mutex poisoned")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
