//! Command-line arguments
//!
//! Flags override values from configuration files and `PASTURE_` variables.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

use crate::config::OutputFormat;

/// Classify monthly forage quality from weather history and derive breeding months
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "pasture-planner", version, about)]
pub struct Cli {
    /// Latitude of the property, decimal degrees
    #[arg(long, allow_negative_numbers = true)]
    pub latitude: Option<f64>,

    /// Longitude of the property, decimal degrees
    #[arg(long, allow_negative_numbers = true)]
    pub longitude: Option<f64>,

    /// IANA timezone used to cut days (e.g. America/Sao_Paulo)
    #[arg(long)]
    pub timezone: Option<String>,

    /// Label for the property, used in logs
    #[arg(long)]
    pub name: Option<String>,

    /// Trailing years of history to average over
    #[arg(long)]
    pub years: Option<u32>,

    /// Treat this date as today instead of the system clock
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub today: Option<NaiveDate>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write the plan to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Read a saved provider response instead of calling the weather API
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Save the raw provider response for later offline runs
    #[arg(long, value_name = "FILE", conflicts_with = "input")]
    pub save_response: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_negative_coordinates() {
        let cli = Cli::try_parse_from([
            "pasture-planner",
            "--latitude",
            "-15.7801",
            "--longitude",
            "-47.9292",
            "--today",
            "2026-10-19",
            "--format",
            "csv",
        ])
        .unwrap();

        assert_eq!(cli.latitude, Some(-15.7801));
        assert_eq!(cli.longitude, Some(-47.9292));
        assert_eq!(cli.today, Some("2026-10-19".parse().unwrap()));
        assert_eq!(cli.format, Some(OutputFormat::Csv));
    }

    #[test]
    fn test_input_conflicts_with_save_response() {
        let result = Cli::try_parse_from([
            "pasture-planner",
            "--input",
            "history.json",
            "--save-response",
            "copy.json",
        ]);
        assert!(result.is_err());
    }
}
