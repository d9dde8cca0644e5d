use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::business_datetime::BusinessDateTime;
use crate::errors::AppResult;
use crate::ui::messages::field;
use crate::utils::colors::{color_for_seconds, colorize};
use crate::utils::date::format_datetime;
use crate::utils::parse_datetime;
use serde_json::json;

/// Handle the `diff` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, json: bool) -> AppResult<()> {
    if let Commands::Diff { a, b } = cmd {
        let clock = cfg.to_clock()?;
        let a = BusinessDateTime::new(parse_datetime(a)?, clock.clone())?;
        let b = BusinessDateTime::new(parse_datetime(b)?, clock)?;
        let elapsed = a.difference_from(&b)?;

        let fa = format_datetime(&a.business_datetime(), &cfg.datetime_format)?;
        let fb = format_datetime(&b.business_datetime(), &cfg.datetime_format)?;

        if json {
            let out = json!({
                "a": fa,
                "b": fb,
                "seconds": elapsed.seconds(),
                "duration": elapsed.to_string(),
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        } else {
            field("A", fa);
            field("B", fb);
            field(
                "Elapsed",
                colorize(&elapsed.to_string(), color_for_seconds(elapsed.seconds())),
            );
            field("Seconds", elapsed.seconds());
        }
    }
    Ok(())
}
