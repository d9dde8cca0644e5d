use crate::errors::{AppError, AppResult};
use chrono::format::{Item, StrftimeItems};
use chrono::{NaiveDate, NaiveDateTime};
use std::fmt::Write;

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

pub fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

/// Accepts `YYYY-MM-DD HH:MM[:SS]` (space or `T`), a bare date
/// (midnight), or `now`.
pub fn parse_datetime(s: &str) -> AppResult<NaiveDateTime> {
    let s = s.trim();

    if s.eq_ignore_ascii_case("now") {
        return Ok(now());
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt);
        }
    }

    parse_date(s)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| AppError::InvalidDateTime(s.to_string()))
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Reject strftime patterns chrono cannot render.
pub fn validate_format(fmt: &str) -> AppResult<()> {
    if StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error)) {
        return Err(AppError::Config(format!("invalid datetime format '{fmt}'")));
    }
    Ok(())
}

pub fn format_datetime(dt: &NaiveDateTime, fmt: &str) -> AppResult<String> {
    validate_format(fmt)?;
    let mut out = String::new();
    write!(out, "{}", dt.format(fmt))
        .map_err(|_| AppError::Config(format!("cannot render datetime with format '{fmt}'")))?;
    Ok(out)
}
