//! Signed amount of working time, kept in whole seconds.

use chrono::TimeDelta;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct BusinessDuration {
    seconds: i64,
}

impl BusinessDuration {
    pub const ZERO: BusinessDuration = BusinessDuration { seconds: 0 };

    pub fn from_seconds(seconds: i64) -> Self {
        Self { seconds }
    }

    /// Sub-second precision is truncated.
    pub fn from_time_delta(delta: TimeDelta) -> Self {
        Self::from_seconds(delta.num_seconds())
    }

    pub fn to_time_delta(self) -> TimeDelta {
        TimeDelta::seconds(self.seconds)
    }

    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    pub fn minutes(&self) -> i64 {
        self.seconds / 60
    }

    pub fn hours(&self) -> i64 {
        self.seconds / 3600
    }

    pub fn is_negative(&self) -> bool {
        self.seconds < 0
    }

    pub fn abs(self) -> Self {
        Self::from_seconds(self.seconds.abs())
    }
}

impl std::ops::Neg for BusinessDuration {
    type Output = BusinessDuration;

    fn neg(self) -> Self::Output {
        Self::from_seconds(-self.seconds)
    }
}

/// `+08h 30m 00s`, `-00h 30m 00s`, `00h 00m 00s`
impl fmt::Display for BusinessDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = match self.seconds.signum() {
            1 => "+",
            -1 => "-",
            _ => "",
        };
        let abs = self.seconds.unsigned_abs();
        write!(
            f,
            "{}{:02}h {:02}m {:02}s",
            sign,
            abs / 3600,
            (abs % 3600) / 60,
            abs % 60
        )
    }
}
