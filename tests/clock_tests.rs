mod common;
use bizhours::errors::AppError;
use bizhours::{BusinessClock, WorkingWeekdays};
use chrono::Weekday;
use common::{clock, date, dt};

#[test]
fn test_fractional_hours_become_hour_and_minute() {
    let c = clock(8.5, 17.0);
    assert_eq!((c.start_hour(), c.start_minute()), (8, 30));
    assert_eq!((c.end_hour(), c.end_minute()), (17, 0));

    let c = clock(8.25, 17.75);
    assert_eq!((c.start_hour(), c.start_minute()), (8, 15));
    assert_eq!((c.end_hour(), c.end_minute()), (17, 45));
}

#[test]
fn test_invalid_windows_are_rejected() {
    let days = WorkingWeekdays::MONDAY_TO_FRIDAY;
    for (start, end) in [(17.0, 9.0), (9.0, 9.0), (-1.0, 9.0), (9.0, 24.0), (f64::NAN, 17.0)] {
        let err = BusinessClock::new(start, end, days).unwrap_err();
        assert!(matches!(err, AppError::Config(_)), "{start}-{end}: {err}");
    }
}

#[test]
fn test_empty_weekdays_are_rejected() {
    let err = BusinessClock::new(9.0, 17.0, WorkingWeekdays::empty()).unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
}

#[test]
fn test_day_start_and_end() {
    let c = clock(8.5, 17.0);
    let d = date(2016, 6, 6);
    assert_eq!(c.day_start(d), dt(2016, 6, 6, 8, 30, 0));
    assert_eq!(c.day_end(d), dt(2016, 6, 6, 17, 0, 0));
}

#[test]
fn test_workday_seconds_is_constant() {
    let c = clock(8.5, 17.0);
    assert_eq!(c.workday_seconds(), 30_600);

    for d in date(2016, 1, 1).iter_days().take(800) {
        assert_eq!((c.day_end(d) - c.day_start(d)).num_seconds(), c.workday_seconds());
    }
}

#[test]
fn test_working_weekdays() {
    let c = clock(9.0, 17.0);
    assert!(c.is_working_weekday(Weekday::Mon));
    assert!(c.is_working_weekday(Weekday::Fri));
    assert!(!c.is_working_weekday(Weekday::Sat));
    assert!(!c.is_working_weekday(Weekday::Sun));
}

#[test]
fn test_next_and_previous_business_day_skip_weekend() {
    let c = clock(9.0, 17.0);
    // 2016-06-03 is a Friday
    assert_eq!(c.next_business_day(date(2016, 6, 3)).unwrap(), date(2016, 6, 6));
    assert_eq!(c.next_business_day(date(2016, 6, 4)).unwrap(), date(2016, 6, 6));
    assert_eq!(c.previous_business_day(date(2016, 6, 6)).unwrap(), date(2016, 6, 3));
    assert_eq!(c.previous_business_day(date(2016, 6, 5)).unwrap(), date(2016, 6, 3));
}

#[test]
fn test_holidays_are_not_business_days() {
    let c = clock(9.0, 17.0).with_holidays([date(2016, 6, 6), date(2016, 6, 3)]);
    assert!(c.is_holiday(date(2016, 6, 6)));
    assert!(!c.is_business_day(date(2016, 6, 6)));
    assert_eq!(c.next_business_day(date(2016, 6, 2)).unwrap(), date(2016, 6, 7));
    assert_eq!(c.previous_business_day(date(2016, 6, 7)).unwrap(), date(2016, 6, 2));
}

#[test]
fn test_clock_display() {
    assert_eq!(clock(8.5, 17.0).to_string(), "08:30-17:00 Mon,Tue,Wed,Thu,Fri");
}

#[test]
fn test_weekday_set_parsing() {
    let mf: WorkingWeekdays = "mon-fri".parse().unwrap();
    assert_eq!(mf, WorkingWeekdays::MONDAY_TO_FRIDAY);
    assert_eq!("0,1,2,3,4".parse::<WorkingWeekdays>().unwrap(), mf);
    assert_eq!("0-4".parse::<WorkingWeekdays>().unwrap(), mf);

    let weekend: WorkingWeekdays = "sat, Sunday".parse().unwrap();
    assert_eq!(weekend.len(), 2);
    assert!(weekend.contains(Weekday::Sat));
    assert!(weekend.contains(Weekday::Sun));
    assert_eq!(weekend.indices(), vec![5, 6]);

    assert!("7".parse::<WorkingWeekdays>().is_err());
    assert!("fri-mon".parse::<WorkingWeekdays>().is_err());
    assert!("someday".parse::<WorkingWeekdays>().is_err());
    assert!(WorkingWeekdays::from_indices(&[0, 9]).is_err());
}

#[test]
fn test_default_clock() {
    let c = BusinessClock::default();
    assert_eq!((c.start_hour(), c.start_minute()), (8, 30));
    assert_eq!((c.end_hour(), c.end_minute()), (17, 0));
    assert_eq!(c, clock(8.5, 17.0));
}
