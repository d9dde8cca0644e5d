use clap::{Parser, Subcommand};

/// Command-line interface definition for bizhours
#[derive(Parser, Debug)]
#[command(
    name = "bizhours",
    version = env!("CARGO_PKG_VERSION"),
    about = "Working-hours aware datetime arithmetic: normalize timestamps into business hours and measure elapsed working time",
    long_about = None
)]
pub struct Cli {
    /// Use this configuration file instead of ~/.bizhours/bizhours.conf
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Start of the business day (decimal hours like 8.5, or HH:MM)
    #[arg(global = true, long = "start")]
    pub start: Option<String>,

    /// End of the business day (decimal hours like 17, or HH:MM)
    #[arg(global = true, long = "end")]
    pub end: Option<String>,

    /// Working weekdays, e.g. "0,1,2,3,4" or "mon-fri"
    #[arg(global = true, long = "days")]
    pub days: Option<String>,

    /// Holiday date (YYYY-MM-DD); repeat for several
    #[arg(global = true, long = "holiday")]
    pub holidays: Vec<String>,

    /// Print results as JSON
    #[arg(global = true, long = "json")]
    pub json: bool,

    /// Enable debug logging on stderr
    #[arg(global = true, short = 'v', long = "verbose")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long = "force")]
        force: bool,
    },

    /// Show the effective configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration as YAML")]
        print_config: bool,
    },

    /// Map a timestamp onto business hours
    Normalize {
        /// Timestamp (YYYY-MM-DD HH:MM[:SS], or "now")
        datetime: String,
    },

    /// Working time elapsed between two timestamps (a - b)
    Diff {
        /// Timestamp a
        a: String,
        /// Timestamp b
        b: String,
    },

    /// Shift a business datetime by a signed duration (e.g. 1h30m, -45m, 90s, 2d)
    Shift {
        /// Timestamp (YYYY-MM-DD HH:MM[:SS], or "now")
        datetime: String,
        /// Signed duration
        #[arg(allow_hyphen_values = true)]
        duration: String,
    },

    /// Run a few example computations
    Demo,
}
