//! A raw timestamp bound to a business clock, with its normalized
//! business datetime computed once at construction.

use crate::core::{duration, normalizer};
use crate::errors::{AppError, AppResult};
use crate::models::clock::BusinessClock;
use crate::models::duration::BusinessDuration;
use chrono::{NaiveDateTime, TimeDelta};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct BusinessDateTime {
    raw: NaiveDateTime,
    business: NaiveDateTime,
    clock: BusinessClock,
}

impl BusinessDateTime {
    pub fn new(raw: NaiveDateTime, clock: BusinessClock) -> AppResult<Self> {
        let business = normalizer::normalize(raw, &clock)?.value();
        Ok(Self {
            raw,
            business,
            clock,
        })
    }

    pub fn raw(&self) -> NaiveDateTime {
        self.raw
    }

    pub fn business_datetime(&self) -> NaiveDateTime {
        self.business
    }

    pub fn clock(&self) -> &BusinessClock {
        &self.clock
    }

    /// Shift the business datetime by `delta` and normalize the result
    /// again with the same clock.
    pub fn add_duration(&self, delta: TimeDelta) -> AppResult<Self> {
        let raw = self
            .business
            .checked_add_signed(delta)
            .ok_or_else(|| AppError::OutOfRange(format!("{} + {delta}", self.business)))?;
        Self::new(raw, self.clock.clone())
    }

    pub fn subtract_duration(&self, delta: TimeDelta) -> AppResult<Self> {
        let raw = self
            .business
            .checked_sub_signed(delta)
            .ok_or_else(|| AppError::OutOfRange(format!("{} - {delta}", self.business)))?;
        Self::new(raw, self.clock.clone())
    }

    /// Working time in `self - other`. Both sides must share a clock.
    pub fn difference_from(&self, other: &BusinessDateTime) -> AppResult<BusinessDuration> {
        if self.clock != other.clock {
            return Err(AppError::ClockMismatch {
                left: self.clock.to_string(),
                right: other.clock.to_string(),
            });
        }
        duration::difference(self.raw, other.raw, &self.clock)
    }
}

impl fmt::Display for BusinessDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.business.format("%Y-%m-%d %H:%M:%S"))
    }
}
