use super::clock::BusinessClock;
use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;

/// A timestamp that lies inside its own day's working window, tied to
/// the clock that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedTimestamp<'c> {
    value: NaiveDateTime,
    clock: &'c BusinessClock,
}

impl<'c> NormalizedTimestamp<'c> {
    pub(crate) fn new(value: NaiveDateTime, clock: &'c BusinessClock) -> Self {
        Self { value, clock }
    }

    pub fn value(&self) -> NaiveDateTime {
        self.value
    }

    pub fn date(&self) -> NaiveDate {
        self.value.date()
    }

    pub fn clock(&self) -> &'c BusinessClock {
        self.clock
    }
}

impl fmt::Display for NormalizedTimestamp<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value.format("%Y-%m-%d %H:%M:%S"))
    }
}
