pub mod business_datetime;
pub mod duration;
pub mod normalizer;
