pub mod config;
pub mod demo;
pub mod diff;
pub mod init;
pub mod normalize;
pub mod shift;
