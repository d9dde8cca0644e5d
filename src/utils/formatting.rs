//! Formatting utilities used for CLI outputs.

use crate::models::BusinessClock;

/// es: 08:30 → 17:00 (8h 30m) | Mon,Tue,Wed,Thu,Fri
pub fn describe_clock(clock: &BusinessClock) -> String {
    let mins = clock.workday_seconds() / 60;
    format!(
        "{:02}:{:02} → {:02}:{:02} ({}h {:02}m) | {}",
        clock.start_hour(),
        clock.start_minute(),
        clock.end_hour(),
        clock.end_minute(),
        mins / 60,
        mins % 60,
        clock.weekdays()
    )
}
