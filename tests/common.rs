#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use bizhours::{BusinessClock, WorkingWeekdays};
use chrono::{NaiveDate, NaiveDateTime};
use std::path::PathBuf;
use tempfile::TempDir;

pub fn bzh() -> Command {
    cargo_bin_cmd!("bizhours")
}

/// Shorthand for a wall-clock timestamp.
pub fn dt(y: i32, m: u32, d: u32, hh: u32, mm: u32, ss: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(hh, mm, ss))
        .expect("valid test datetime")
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

/// Monday to Friday clock with the given decimal hours.
pub fn clock(start: f64, end: f64) -> BusinessClock {
    BusinessClock::new(start, end, WorkingWeekdays::MONDAY_TO_FRIDAY).expect("valid clock")
}

/// A config path inside a fresh temp dir; the file itself does not exist.
pub fn temp_config(dir: &TempDir) -> String {
    let path: PathBuf = dir.path().join("bizhours.conf");
    path.to_string_lossy().to_string()
}
