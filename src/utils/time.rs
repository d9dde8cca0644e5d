//! Time utilities: parsing signed durations such as `1h30m`, `-45m`, `2d`.

use crate::errors::{AppError, AppResult};
use chrono::TimeDelta;
use regex::Regex;
use std::sync::LazyLock;

static DURATION_PART: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*([dhms])").expect("valid duration regex"));

static DURATION_FULL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(\s*\d+\s*[dhms])+\s*$").expect("valid duration regex")
});

/// Parse a signed duration. A bare number is taken as seconds.
pub fn parse_duration(input: &str) -> AppResult<TimeDelta> {
    let s = input.trim();

    if let Ok(secs) = s.parse::<i64>() {
        return TimeDelta::try_seconds(secs).ok_or_else(|| AppError::InvalidDuration(s.into()));
    }

    if !DURATION_FULL.is_match(s) {
        return Err(AppError::InvalidDuration(s.to_string()));
    }

    let negative = s.starts_with('-');
    let mut total: i64 = 0;

    for caps in DURATION_PART.captures_iter(s) {
        let amount: i64 = caps[1]
            .parse()
            .map_err(|_| AppError::InvalidDuration(s.to_string()))?;
        let unit = match &caps[2] {
            "d" => 86_400,
            "h" => 3_600,
            "m" => 60,
            _ => 1,
        };
        total = amount
            .checked_mul(unit)
            .and_then(|v| total.checked_add(v))
            .ok_or_else(|| AppError::InvalidDuration(s.to_string()))?;
    }

    let total = if negative { -total } else { total };
    TimeDelta::try_seconds(total).ok_or_else(|| AppError::InvalidDuration(s.to_string()))
}

/// Parse decimal hours (`8.5`) or clock time (`08:30`) into decimal hours.
pub fn parse_hour_fraction(input: &str) -> AppResult<f64> {
    let s = input.trim();

    if let Some((h, m)) = s.split_once(':') {
        let h: u32 = h.parse().map_err(|_| AppError::Config(format!("bad hour '{s}'")))?;
        let m: u32 = m.parse().map_err(|_| AppError::Config(format!("bad hour '{s}'")))?;
        if m >= 60 {
            return Err(AppError::Config(format!("bad minutes in '{s}'")));
        }
        return Ok(h as f64 + m as f64 / 60.0);
    }

    s.parse::<f64>()
        .map_err(|_| AppError::Config(format!("bad hour '{s}'")))
}
