//! Holds the source of "now".
//!
//! Everything that needs the current date or time takes a [`Clock`] so a fixed instant can stand in
//! for the system clock (`--date` in the binary, tests everywhere).

use jiff::{Zoned, tz::TimeZone};

/// Provides the current instant in some time zone.
pub trait Clock {
    fn now(&self) -> Zoned;
}

/// The operating system clock seen from a time zone.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemClock {
    pub time_zone: TimeZone,
}

impl SystemClock {
    pub fn new(time_zone: TimeZone) -> Self {
        Self { time_zone }
    }

    /// The system clock in the system time zone (`TZ` is honored).
    pub fn local() -> Self {
        Self::new(TimeZone::system())
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::local()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Zoned {
        Zoned::now().with_time_zone(self.time_zone.clone())
    }
}

/// A fixed instant is a clock that never ticks.
impl Clock for Zoned {
    fn now(&self) -> Zoned {
        self.clone()
    }
}
