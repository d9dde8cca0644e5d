use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::field;
use crate::utils::formatting::describe_clock;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, json: bool) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd {
        if json {
            println!("{}", serde_json::to_string_pretty(cfg)?);
            return Ok(());
        }

        let clock = cfg.to_clock()?;
        field("Clock", describe_clock(&clock));
        field("Holidays", cfg.holidays.len());

        if *print_config {
            println!("\n{}", serde_yaml::to_string(cfg)?);
        }
    }
    Ok(())
}
