//! Maps an arbitrary timestamp onto business hours.
//!
//! A timestamp inside its day's window is kept as is. One past the end of
//! the window rolls forward: the overflow is re-applied from the start of
//! the next business day. One before the start rolls back: the underflow
//! is taken off the end of the previous business day. An offset longer
//! than a whole workday is carried across as many business days as it
//! needs, so the result always sits inside a working window.

use crate::errors::{AppError, AppResult};
use crate::models::clock::BusinessClock;
use crate::models::normalized::NormalizedTimestamp;
use chrono::NaiveDateTime;
use tracing::debug;

pub fn is_within_hours(dt: NaiveDateTime, clock: &BusinessClock) -> bool {
    let date = dt.date();
    clock.day_start(date) <= dt && dt <= clock.day_end(date)
}

pub fn normalize(dt: NaiveDateTime, clock: &BusinessClock) -> AppResult<NormalizedTimestamp<'_>> {
    let date = dt.date();

    let value = if dt > clock.day_end(date) {
        rollforward(dt, clock)?
    } else if dt < clock.day_start(date) {
        rollback(dt, clock)?
    } else {
        dt
    };

    Ok(NormalizedTimestamp::new(value, clock))
}

/// Move a timestamp past the end of its working window onto the next
/// business day(s), keeping the overflow as offset from the day start.
pub fn rollforward(dt: NaiveDateTime, clock: &BusinessClock) -> AppResult<NaiveDateTime> {
    let workday = clock.workday();
    let mut offset = dt - clock.day_end(dt.date());
    let mut day = clock.next_business_day(dt.date())?;

    while offset > workday {
        offset = offset - workday;
        day = clock.next_business_day(day)?;
    }

    let out = clock
        .day_start(day)
        .checked_add_signed(offset)
        .ok_or_else(|| AppError::OutOfRange(dt.to_string()))?;
    debug!(input = %dt, output = %out, "rolled forward");
    Ok(out)
}

/// Move a timestamp before the start of its working window onto the
/// previous business day(s), keeping the underflow as offset to the day end.
pub fn rollback(dt: NaiveDateTime, clock: &BusinessClock) -> AppResult<NaiveDateTime> {
    let workday = clock.workday();
    let mut offset = clock.day_start(dt.date()) - dt;
    let mut day = clock.previous_business_day(dt.date())?;

    while offset > workday {
        offset = offset - workday;
        day = clock.previous_business_day(day)?;
    }

    let out = clock
        .day_end(day)
        .checked_sub_signed(offset)
        .ok_or_else(|| AppError::OutOfRange(dt.to_string()))?;
    debug!(input = %dt, output = %out, "rolled back");
    Ok(out)
}
