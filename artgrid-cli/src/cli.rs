//! Command-line flags.

use std::path::PathBuf;

use artgrid_lib::DEFAULT_BASE_URL;
use clap::{Parser, ValueEnum};
use simplelog::LevelFilter;

#[derive(Debug, Parser)]
#[command(
    name = "artgrid",
    version,
    about = "Browse and select artworks from the Art Institute of Chicago API",
    long_about = "Browse the Art Institute of Chicago artworks listing page by page.\n\n\
                  Selections are kept across pages. Type `help` once running."
)]
pub struct Cli {
    /// Listing endpoint queried with `?page=<n>`.
    #[arg(long = "base-url", value_name = "URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Page shown at startup.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// Request timeout in seconds.
    #[arg(long, value_name = "SECS", default_value_t = 15)]
    pub timeout: u64,

    /// Minimum level written to the log file.
    #[arg(long = "log-level", value_enum, default_value = "info")]
    pub log_level: LogLevelArg,

    /// Log file (default: latest.log in the user cache directory).
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevelArg {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Off => LevelFilter::Off,
            LogLevelArg::Error => LevelFilter::Error,
            LogLevelArg::Warn => LevelFilter::Warn,
            LogLevelArg::Info => LevelFilter::Info,
            LogLevelArg::Debug => LevelFilter::Debug,
            LogLevelArg::Trace => LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["artgrid"]);

        assert_eq!(cli.base_url, DEFAULT_BASE_URL);
        assert_eq!(cli.page, 1);
        assert_eq!(cli.log_level, LogLevelArg::Info);
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn test_page_zero_is_rejected() {
        assert!(Cli::try_parse_from(["artgrid", "--page", "0"]).is_err());
    }

    #[test]
    fn test_log_level_maps_to_filter() {
        let cli = Cli::parse_from(["artgrid", "--log-level", "debug"]);
        assert_eq!(LevelFilter::from(cli.log_level), LevelFilter::Debug);
    }
}
