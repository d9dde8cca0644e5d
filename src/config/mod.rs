use crate::errors::{AppError, AppResult};
use crate::models::{BusinessClock, WorkingWeekdays};
use crate::utils::date::validate_format;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Start of the business day as decimal hours (8.5 = 08:30)
    pub start_hour: f64,
    /// End of the business day as decimal hours
    pub end_hour: f64,
    /// Working weekdays, 0 = Monday .. 6 = Sunday
    pub working_days: Vec<u8>,
    pub holidays: Vec<NaiveDate>,
    pub datetime_format: String,
}

fn default_datetime_format() -> String {
    "%Y-%m-%d %H:%M:%S".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_hour: 8.5,
            end_hour: 17.0,
            working_days: vec![0, 1, 2, 3, 4],
            holidays: Vec::new(),
            datetime_format: default_datetime_format(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("bizhours")
        } else {
            let home = dirs::home_dir()
                .or_else(|| env::var("HOME").ok().map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from("."));
            home.join(".bizhours")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("bizhours.conf")
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|_| AppError::ConfigLoad(path.display().to_string()))?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        validate_format(&cfg.datetime_format)?;
        info!(path = %path.display(), "configuration loaded");
        Ok(cfg)
    }

    /// Write this configuration as YAML, creating parent directories.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave(path.display().to_string()))?;
        Ok(())
    }

    pub fn weekdays(&self) -> AppResult<WorkingWeekdays> {
        WorkingWeekdays::from_indices(&self.working_days)
    }

    /// Build the validated business clock described by this configuration.
    pub fn to_clock(&self) -> AppResult<BusinessClock> {
        validate_format(&self.datetime_format)?;
        let clock = BusinessClock::new(self.start_hour, self.end_hour, self.weekdays()?)?
            .with_holidays(self.holidays.iter().copied());
        Ok(clock)
    }
}
