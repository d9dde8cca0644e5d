pub mod clock;
pub mod duration;
pub mod normalized;
pub mod weekdays;

pub use clock::BusinessClock;
pub use duration::BusinessDuration;
pub use normalized::NormalizedTimestamp;
pub use weekdays::WorkingWeekdays;
