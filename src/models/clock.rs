//! Business clock: the daily working window plus the working weekdays
//! (and optional holidays) that define what a "business day" is.

use super::weekdays::WorkingWeekdays;
use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike, Weekday};
use std::collections::BTreeSet;
use std::fmt;

const MINUTES_PER_DAY: u32 = 24 * 60;

const DEFAULT_START: NaiveTime = match NaiveTime::from_hms_opt(8, 30, 0) {
    Some(t) => t,
    None => panic!("08:30 is a valid time"),
};
const DEFAULT_END: NaiveTime = match NaiveTime::from_hms_opt(17, 0, 0) {
    Some(t) => t,
    None => panic!("17:00 is a valid time"),
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessClock {
    start: NaiveTime,
    end: NaiveTime,
    weekdays: WorkingWeekdays,
    holidays: BTreeSet<NaiveDate>,
}

/// Convert an hours-as-decimal value (8.5 → 08:30) into a time of day.
fn time_from_fraction(label: &str, fraction: f64) -> AppResult<NaiveTime> {
    if !(0.0..24.0).contains(&fraction) {
        return Err(AppError::Config(format!(
            "{label} hour {fraction} must be within [0, 24)"
        )));
    }

    let minutes = (fraction * 60.0).round() as u32;
    if minutes >= MINUTES_PER_DAY {
        return Err(AppError::Config(format!(
            "{label} hour {fraction} rounds to midnight"
        )));
    }

    NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0)
        .ok_or_else(|| AppError::Config(format!("{label} hour {fraction} is not a valid time")))
}

impl BusinessClock {
    pub fn new(start_fraction: f64, end_fraction: f64, weekdays: WorkingWeekdays) -> AppResult<Self> {
        let start = time_from_fraction("start", start_fraction)?;
        let end = time_from_fraction("end", end_fraction)?;

        if start >= end {
            return Err(AppError::Config(format!(
                "start of business day ({}) must precede its end ({})",
                start.format("%H:%M"),
                end.format("%H:%M")
            )));
        }
        if weekdays.is_empty() {
            return Err(AppError::Config(
                "at least one working weekday is required".into(),
            ));
        }

        Ok(Self {
            start,
            end,
            weekdays,
            holidays: BTreeSet::new(),
        })
    }

    /// Same clock, with the given dates treated as non-business days.
    pub fn with_holidays<I: IntoIterator<Item = NaiveDate>>(mut self, holidays: I) -> Self {
        self.holidays.extend(holidays);
        self
    }

    pub fn start_hour(&self) -> u32 {
        self.start.hour()
    }

    pub fn start_minute(&self) -> u32 {
        self.start.minute()
    }

    pub fn end_hour(&self) -> u32 {
        self.end.hour()
    }

    pub fn end_minute(&self) -> u32 {
        self.end.minute()
    }

    pub fn weekdays(&self) -> WorkingWeekdays {
        self.weekdays
    }

    pub fn day_start(&self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(self.start)
    }

    pub fn day_end(&self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(self.end)
    }

    pub fn is_working_weekday(&self, weekday: Weekday) -> bool {
        self.weekdays.contains(weekday)
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(&date)
    }

    pub fn is_business_day(&self, date: NaiveDate) -> bool {
        self.is_working_weekday(date.weekday()) && !self.is_holiday(date)
    }

    /// Length of the working window; identical for every calendar day.
    pub fn workday(&self) -> TimeDelta {
        self.end - self.start
    }

    pub fn workday_seconds(&self) -> i64 {
        self.workday().num_seconds()
    }

    /// First business day strictly after `date`.
    pub fn next_business_day(&self, date: NaiveDate) -> AppResult<NaiveDate> {
        date.iter_days()
            .skip(1)
            .find(|d| self.is_business_day(*d))
            .ok_or_else(|| AppError::OutOfRange(format!("no business day after {date}")))
    }

    /// Last business day strictly before `date`.
    pub fn previous_business_day(&self, date: NaiveDate) -> AppResult<NaiveDate> {
        date.iter_days()
            .rev()
            .skip(1)
            .find(|d| self.is_business_day(*d))
            .ok_or_else(|| AppError::OutOfRange(format!("no business day before {date}")))
    }
}

impl Default for BusinessClock {
    /// 08:30-17:00, Monday to Friday.
    fn default() -> Self {
        Self {
            start: DEFAULT_START,
            end: DEFAULT_END,
            weekdays: WorkingWeekdays::MONDAY_TO_FRIDAY,
            holidays: BTreeSet::new(),
        }
    }
}

impl fmt::Display for BusinessClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{} {}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M"),
            self.weekdays
        )?;
        if !self.holidays.is_empty() {
            write!(f, " (+{} holidays)", self.holidays.len())?;
        }
        Ok(())
    }
}
