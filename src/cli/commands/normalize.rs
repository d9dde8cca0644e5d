use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::business_datetime::BusinessDateTime;
use crate::core::normalizer::is_within_hours;
use crate::errors::AppResult;
use crate::ui::messages::field;
use crate::utils::date::format_datetime;
use crate::utils::parse_datetime;
use serde_json::json;

/// Handle the `normalize` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, json: bool) -> AppResult<()> {
    if let Commands::Normalize { datetime } = cmd {
        let clock = cfg.to_clock()?;
        let raw = parse_datetime(datetime)?;
        let within = is_within_hours(raw, &clock);
        let bdt = BusinessDateTime::new(raw, clock)?;

        let input = format_datetime(&raw, &cfg.datetime_format)?;
        let business = format_datetime(&bdt.business_datetime(), &cfg.datetime_format)?;

        if json {
            let out = json!({
                "input": input,
                "business": business,
                "within_hours": within,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        } else {
            field("Input", input);
            field("Business", business);
        }
    }
    Ok(())
}
