//! Clock abstraction for time-dependent rules.
//!
//! Screening status and booking-slot validation compare against "now".
//! Production code injects [`SystemClock`]; tests inject [`FixedClock`].

use super::Timestamp;

/// Source of the current time.
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> Timestamp;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// Clock frozen at a given instant, for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    time: Timestamp,
}

impl FixedClock {
    pub fn new(time: Timestamp) -> Self {
        Self { time }
    }

    /// Returns a clock frozen `minutes` later.
    pub fn advanced_by_minutes(&self, minutes: i64) -> Self {
        Self::new(self.time.plus_minutes(minutes))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.time
    }
}
