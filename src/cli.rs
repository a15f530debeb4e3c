use std::path::PathBuf;

use clap::Parser;

/// Command-line surface. Presentation knobs only: everything here shapes
/// what gets shown, not what gets fetched.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Weather dashboard in your terminal")]
pub struct Cli {
    /// Place to look up, e.g. "Chennai" or "Paris, Texas".
    /// Falls back to the configured default city.
    pub place: Option<String>,

    /// Forecast hours to display
    #[arg(long, value_parser = clap::value_parser!(u8).range(6..=48))]
    pub hours: Option<u8>,

    /// Show the detailed hourly table
    #[arg(long, overrides_with = "no_table")]
    pub table: bool,

    /// Hide the detailed hourly table
    #[arg(long = "no-table", overrides_with = "table")]
    pub no_table: bool,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Displayed window length; the flag beats the config value.
    pub fn effective_hours(&self, config_hours: u8) -> u8 {
        self.hours.unwrap_or(config_hours)
    }

    /// Table visibility; either flag beats the config value.
    pub fn effective_show_table(&self, config_show: bool) -> bool {
        if self.table {
            true
        } else if self.no_table {
            false
        } else {
            config_show
        }
    }
}
