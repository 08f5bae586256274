//! Time sources for the scheduled side-effects.

use std::cell::Cell;
use std::time::{Duration, Instant};

use chrono::{Local, NaiveDateTime, NaiveTime};

/// Monotonic time for deadlines plus wall-clock time for the reminder check.
pub trait Clock {
    /// Monotonic instant used for timer deadlines.
    fn now(&self) -> Instant;

    /// Local wall-clock time of day.
    fn local_time(&self) -> NaiveTime;
}

/// The real clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn local_time(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// A clock that only moves when told to.
///
/// Monotonic and wall time advance together.
#[derive(Debug)]
pub struct ManualClock {
    origin: Instant,
    wall_origin: NaiveDateTime,
    elapsed: Cell<Duration>,
}

impl ManualClock {
    /// Start a clock whose wall time reads `wall_origin`.
    pub fn new(wall_origin: NaiveDateTime) -> Self {
        Self {
            origin: Instant::now(),
            wall_origin,
            elapsed: Cell::new(Duration::ZERO),
        }
    }

    /// Start a clock at `hour:minute:second` on an arbitrary day.
    pub fn at(hour: u32, minute: u32, second: u32) -> Self {
        let wall = NaiveTime::from_hms_opt(hour, minute, second).unwrap_or_default();
        Self::new(NaiveDateTime::new(chrono::NaiveDate::default(), wall))
    }

    /// Move time forward.
    pub fn advance(&self, by: Duration) {
        self.elapsed.set(self.elapsed.get() + by);
    }

    /// Time elapsed since creation.
    pub fn elapsed(&self) -> Duration {
        self.elapsed.get()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.elapsed.get()
    }

    fn local_time(&self) -> NaiveTime {
        let elapsed = chrono::Duration::from_std(self.elapsed.get())
            .unwrap_or_else(|_| chrono::Duration::zero());
        (self.wall_origin + elapsed).time()
    }
}
