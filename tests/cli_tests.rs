mod common;
use common::{bzh, temp_config};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

#[test]
fn test_normalize_rolls_back_before_opening() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = temp_config(&dir);

    bzh()
        .args(["--config", &cfg, "--start", "9", "--end", "17"])
        .args(["normalize", "2016-06-06 08:30:00"])
        .assert()
        .success()
        .stdout(contains("2016-06-03 16:30:00"));
}

#[test]
fn test_normalize_with_default_clock_keeps_opening_time() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = temp_config(&dir);

    bzh()
        .args(["--config", &cfg, "normalize", "2016-06-06 08:30", "--json"])
        .assert()
        .success()
        .stdout(contains("\"business\": \"2016-06-06 08:30:00\""))
        .stdout(contains("\"within_hours\": true"));
}

#[test]
fn test_normalize_skips_holiday() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = temp_config(&dir);

    bzh()
        .args(["--config", &cfg, "--start", "09:00", "--end", "17:00"])
        .args(["--holiday", "2016-06-07"])
        .args(["normalize", "2016-06-06 17:30"])
        .assert()
        .success()
        .stdout(contains("2016-06-08 09:30:00"));
}

#[test]
fn test_diff_over_weekend_json() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = temp_config(&dir);

    bzh()
        .args(["--config", &cfg, "--start", "9", "--end", "17", "--json"])
        .args(["diff", "2016-06-06 10:00", "2016-06-03 16:00"])
        .assert()
        .success()
        .stdout(contains("\"seconds\": 7200"))
        .stdout(contains("+02h 00m 00s"));
}

#[test]
fn test_diff_negative_plain_output() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = temp_config(&dir);

    bzh()
        .args(["--config", &cfg, "--start", "9", "--end", "17"])
        .args(["diff", "2016-06-03 16:00", "2016-06-06 10:00"])
        .assert()
        .success()
        .stdout(contains("-02h 00m 00s").and(contains("-7200")));
}

#[test]
fn test_diff_with_custom_days() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = temp_config(&dir);

    // Saturday is a working day here
    bzh()
        .args(["--config", &cfg, "--start", "9", "--end", "17", "--days", "mon-sat"])
        .args(["diff", "2016-06-06 10:00", "2016-06-03 16:00", "--json"])
        .assert()
        .success()
        .stdout(contains("\"seconds\": 36000"));
}

#[test]
fn test_shift_forward_past_closing() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = temp_config(&dir);

    bzh()
        .args(["--config", &cfg, "--start", "9", "--end", "17"])
        .args(["shift", "2016-06-06 16:30", "1h"])
        .assert()
        .success()
        .stdout(contains("2016-06-07 09:30:00"));
}

#[test]
fn test_shift_backward() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = temp_config(&dir);

    bzh()
        .args(["--config", &cfg, "--start", "9", "--end", "17"])
        .args(["shift", "2016-06-07 09:30", "--", "-1h"])
        .assert()
        .success()
        .stdout(contains("2016-06-06 16:30:00"));
}

#[test]
fn test_invalid_window_fails() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = temp_config(&dir);

    bzh()
        .args(["--config", &cfg, "--start", "17", "--end", "9"])
        .args(["normalize", "2016-06-06 10:00"])
        .assert()
        .failure()
        .stderr(contains("Configuration error"));
}

#[test]
fn test_invalid_datetime_fails() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = temp_config(&dir);

    bzh()
        .args(["--config", &cfg, "normalize", "yesterday-ish"])
        .assert()
        .failure()
        .stderr(contains("Invalid datetime"));
}

#[test]
fn test_init_writes_config_and_config_reads_it() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = temp_config(&dir);

    bzh().args(["--config", &cfg, "init"]).assert().success();

    let content = fs::read_to_string(&cfg).expect("config written");
    assert!(content.contains("start_hour"));

    fs::write(&cfg, content.replace("start_hour: 8.5", "start_hour: 9.0")).unwrap();

    bzh()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("09:00").and(contains("start_hour: 9.0")));
}

#[test]
fn test_init_does_not_overwrite_without_force() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = temp_config(&dir);
    fs::write(&cfg, "start_hour: 7.0\n").unwrap();

    bzh()
        .args(["--config", &cfg, "init"])
        .assert()
        .success()
        .stderr(contains("already exists"));
    assert_eq!(fs::read_to_string(&cfg).unwrap(), "start_hour: 7.0\n");

    bzh().args(["--config", &cfg, "init", "--force"]).assert().success();
    assert!(fs::read_to_string(&cfg).unwrap().contains("start_hour: 8.5"));
}

#[test]
fn test_demo_runs() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = temp_config(&dir);

    bzh()
        .args(["--config", &cfg, "demo"])
        .assert()
        .success()
        .stdout(contains("Working time across a weekend"))
        .stdout(contains("2016-06-06 08:30:01"));
}

#[test]
fn test_bad_datetime_format_in_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = temp_config(&dir);
    fs::write(&cfg, "datetime_format: \"%Q\"\n").unwrap();

    bzh()
        .args(["--config", &cfg, "normalize", "2016-06-06 10:00"])
        .assert()
        .code(1)
        .stderr(contains("Configuration error").and(contains("panicked").not()));
}
