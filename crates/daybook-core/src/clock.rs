//! Time source abstraction.
//!
//! "Today" is resolved against local wall-clock time at the moment of each
//! check. The `Clock` trait makes that instant injectable so day-boundary
//! behavior is deterministic under test.

use chrono::{DateTime, Local};

/// A source of the current local time.
pub trait Clock {
    /// The current instant in the local timezone.
    fn now(&self) -> DateTime<Local>;
}

/// Wall-clock time. The default clock outside of tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
