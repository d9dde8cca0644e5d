//! Unified application error type.
//! Clock construction, normalization, config and CLI all return AppError
//! so callers deal with a single error surface.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid datetime: {0}")]
    InvalidDateTime(String),

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    #[error("Invalid weekday: {0}")]
    InvalidWeekday(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Cannot combine values built with different business clocks ({left} vs {right})")]
    ClockMismatch { left: String, right: String },

    #[error("Date out of supported range: {0}")]
    OutOfRange(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration from {0}")]
    ConfigLoad(String),

    #[error("Failed to save configuration to {0}")]
    ConfigSave(String),
}

pub type AppResult<T> = Result<T, AppError>;
