use crate::config::Config;
use crate::core::business_datetime::BusinessDateTime;
use crate::core::duration::difference;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{field, header};
use crate::utils::date::now;
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

fn at(y: i32, m: u32, d: u32, hh: u32, mm: u32, ss: u32) -> AppResult<NaiveDateTime> {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(hh, mm, ss))
        .ok_or_else(|| AppError::InvalidDateTime(format!("{y}-{m}-{d} {hh}:{mm}:{ss}")))
}

/// Handle the `demo` subcommand: a few worked examples with the
/// effective clock.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let clock = cfg.to_clock()?;

    header("Current time");
    let current = BusinessDateTime::new(now(), clock.clone())?;
    field("Now", current.raw().format("%Y-%m-%d %H:%M:%S"));
    field("Business", &current);

    header("Shift by 61 seconds");
    let early = BusinessDateTime::new(at(2016, 6, 6, 8, 29, 0)?, clock.clone())?;
    field("Input", early.raw().format("%Y-%m-%d %H:%M:%S"));
    field("Business", &early);
    field("+61s", early.add_duration(TimeDelta::seconds(61))?);

    header("Past closing time");
    let late = BusinessDateTime::new(at(2016, 6, 6, 17, 0, 30)?, clock.clone())?;
    field("Input", late.raw().format("%Y-%m-%d %H:%M:%S"));
    field("Business", &late);

    header("Working time across a weekend");
    let friday = at(2016, 6, 3, 16, 0, 0)?;
    let monday = at(2016, 6, 6, 10, 0, 0)?;
    field("From", friday.format("%Y-%m-%d %H:%M:%S"));
    field("To", monday.format("%Y-%m-%d %H:%M:%S"));
    field("Elapsed", difference(monday, friday, &clock)?);

    Ok(())
}
