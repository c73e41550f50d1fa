//! Clock capability
//!
//! The generator asks a `Clock` for the current wall time instead of reading
//! the system clock directly, so tests can pin the timestamp.

use chrono::{Local, NaiveDateTime};

/// Source of the current local date and time
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Host clock, local timezone, no conversion
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
