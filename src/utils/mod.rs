pub mod colors;
pub mod date;
pub mod formatting;
pub mod logger;
pub mod path;
pub mod time;

pub use date::parse_datetime;
pub use time::parse_duration;
