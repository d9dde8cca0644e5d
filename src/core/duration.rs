//! Elapsed working time between two timestamps.

use crate::core::normalizer::normalize;
use crate::errors::AppResult;
use crate::models::clock::BusinessClock;
use crate::models::duration::BusinessDuration;
use chrono::{NaiveDateTime, TimeDelta};
use std::cmp::Ordering;
use tracing::debug;

/// Working time in `a - b`. Both ends are normalized first; the sign
/// follows the ordering of the normalized values, the magnitude only
/// depends on the pair.
pub fn difference(
    a: NaiveDateTime,
    b: NaiveDateTime,
    clock: &BusinessClock,
) -> AppResult<BusinessDuration> {
    let na = normalize(a, clock)?.value();
    let nb = normalize(b, clock)?.value();

    let (lesser, greater) = if na <= nb { (na, nb) } else { (nb, na) };
    let magnitude = working_seconds_between(lesser, greater, clock);

    let seconds = match na.cmp(&nb) {
        Ordering::Greater => magnitude,
        Ordering::Less => -magnitude,
        Ordering::Equal => 0,
    };
    debug!(%a, %b, seconds, "business difference");
    Ok(BusinessDuration::from_seconds(seconds))
}

/// Working seconds from `lesser` to `greater`, both already normalized
/// and `lesser <= greater`.
pub fn working_seconds_between(
    lesser: NaiveDateTime,
    greater: NaiveDateTime,
    clock: &BusinessClock,
) -> i64 {
    let (from, to) = (lesser.date(), greater.date());

    // same day: nothing to skip
    if from == to {
        return (greater - lesser).num_seconds();
    }

    let remaining = clock.day_end(from) - lesser;
    let passed = greater - clock.day_start(to);

    // days strictly between the two ends
    let mut day_difference = 0i64;
    let mut non_working_days = 0i64;
    for day in from.iter_days().skip(1) {
        day_difference += 1;
        if day >= to {
            break;
        }
        if !clock.is_business_day(day) {
            non_working_days += 1;
        }
    }

    let full_days_between = day_difference - 1 - non_working_days;
    let full = TimeDelta::seconds(full_days_between * clock.workday_seconds());

    // truncate once, after sub-second parts have been summed
    (remaining + passed + full).num_seconds()
}
