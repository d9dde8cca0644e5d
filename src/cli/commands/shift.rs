use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::business_datetime::BusinessDateTime;
use crate::errors::AppResult;
use crate::ui::messages::field;
use crate::utils::date::format_datetime;
use crate::utils::{parse_datetime, parse_duration};
use serde_json::json;

/// Handle the `shift` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, json: bool) -> AppResult<()> {
    if let Commands::Shift { datetime, duration } = cmd {
        let clock = cfg.to_clock()?;
        let start = BusinessDateTime::new(parse_datetime(datetime)?, clock)?;
        let delta = parse_duration(duration)?;
        let shifted = start.add_duration(delta)?;

        let from = format_datetime(&start.business_datetime(), &cfg.datetime_format)?;
        let to = format_datetime(&shifted.business_datetime(), &cfg.datetime_format)?;

        if json {
            let out = json!({
                "from": from,
                "seconds": delta.num_seconds(),
                "business": to,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        } else {
            field("From", from);
            field("Shift", duration);
            field("Business", to);
        }
    }
    Ok(())
}
