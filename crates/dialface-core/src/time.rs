//! Sources for the current time of day.

use std::fmt;
use std::sync::Arc;

use chrono::{Local, NaiveTime};
use parking_lot::Mutex;

/// Port for reading the local time of day.
///
/// This abstraction allows driving the clock from a fixed or scripted time
/// in tests and tools.
pub trait TimeSource: Send + Sync + fmt::Debug {
    /// The current local time of day.
    fn time_of_day(&self) -> NaiveTime;
}

/// Reads the host's local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TimeSource for SystemClock {
    fn time_of_day(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// A time source that only changes when told to.
///
/// Clones share the same time, so one handle can stay with the caller while
/// another is handed to the engine.
#[derive(Debug, Clone)]
pub struct ManualClock {
    time: Arc<Mutex<NaiveTime>>,
}

impl ManualClock {
    pub fn new(time: NaiveTime) -> Self {
        Self {
            time: Arc::new(Mutex::new(time)),
        }
    }

    pub fn set(&self, time: NaiveTime) {
        *self.time.lock() = time;
    }

    /// Move the clock forward, wrapping past midnight.
    pub fn advance(&self, by: chrono::Duration) {
        let mut time = self.time.lock();
        *time = time.overflowing_add_signed(by).0;
    }
}

impl TimeSource for ManualClock {
    fn time_of_day(&self) -> NaiveTime {
        *self.time.lock()
    }
}

/// Parse `HH:MM:SS` with optional fractional seconds.
pub fn parse_time_of_day(text: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(text.trim(), "%H:%M:%S%.f").ok()
}
