//! bizhours library root.
//! Business clock, normalization and working-duration arithmetic, plus the
//! CLI that drives them.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::{AppError, AppResult};
use std::path::PathBuf;
use utils::path::expand_tilde;

pub use crate::core::business_datetime::BusinessDateTime;
pub use crate::core::duration::difference;
pub use crate::core::normalizer::normalize;
pub use models::{BusinessClock, BusinessDuration, NormalizedTimestamp, WorkingWeekdays};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { force } => cli::commands::init::handle(&config_path(cli), *force),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, cli.json),
        Commands::Normalize { .. } => {
            cli::commands::normalize::handle(&cli.command, cfg, cli.json)
        }
        Commands::Diff { .. } => cli::commands::diff::handle(&cli.command, cfg, cli.json),
        Commands::Shift { .. } => cli::commands::shift::handle(&cli.command, cfg, cli.json),
        Commands::Demo => cli::commands::demo::handle(cfg),
    }
}

fn config_path(cli: &Cli) -> PathBuf {
    cli.config
        .as_deref()
        .map(expand_tilde)
        .unwrap_or_else(Config::config_file)
}

/// Load the configuration file and apply command-line overrides on top.
pub fn resolve_config(cli: &Cli) -> AppResult<Config> {
    let mut cfg = Config::load_from(&config_path(cli))?;

    if let Some(start) = &cli.start {
        cfg.start_hour = utils::time::parse_hour_fraction(start)?;
    }
    if let Some(end) = &cli.end {
        cfg.end_hour = utils::time::parse_hour_fraction(end)?;
    }
    if let Some(days) = &cli.days {
        cfg.working_days = days.parse::<WorkingWeekdays>()?.indices();
    }
    for h in &cli.holidays {
        let date = utils::date::parse_date(h).ok_or_else(|| AppError::InvalidDateTime(h.clone()))?;
        cfg.holidays.push(date);
    }

    Ok(cfg)
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    utils::logger::init_cli_logger(cli.verbose);

    let cfg = resolve_config(&cli)?;
    dispatch(&cli, &cfg)
}
