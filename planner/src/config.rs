//! Configuration management for the pasture planner
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides with PASTURE_ prefix
//! 4. Command-line flags

use std::path::PathBuf;

use config::{ConfigError, Environment, File};
use rust_decimal::Decimal;
use serde::Deserialize;
use shared::GpsCoordinates;
use validator::Validate;

use crate::cli::Cli;
use crate::error::{AppError, AppResult};
use crate::external::open_meteo::DEFAULT_ARCHIVE_URL;

/// Timezone used when none is configured
pub const DEFAULT_TIMEZONE: &str = "America/Sao_Paulo";

/// Trailing years of history averaged into climate normals
pub const DEFAULT_HISTORY_YEARS: u32 = 20;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Property location
    pub location: LocationConfig,

    /// Weather history provider
    pub weather: WeatherConfig,

    /// Where and how the plan is written
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct LocationConfig {
    /// Latitude, decimal degrees; required unless history is read from a file
    pub latitude: Option<f64>,

    /// Longitude, decimal degrees; required unless history is read from a file
    pub longitude: Option<f64>,

    /// IANA timezone passed to the provider
    #[validate(length(min = 1))]
    pub timezone: String,

    /// Optional property label
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct WeatherConfig {
    /// Historical weather API endpoint
    #[validate(url)]
    pub api_endpoint: String,

    /// Trailing years of daily history to request
    #[validate(range(min = 1, max = 80))]
    pub history_years: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    /// Output format
    pub format: OutputFormat,

    /// Output file; stdout when absent
    pub path: Option<PathBuf>,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }
}

impl Config {
    /// Load configuration from files, environment variables and CLI flags
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let environment =
            std::env::var("PASTURE_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("location.timezone", DEFAULT_TIMEZONE)?
            .set_default("weather.api_endpoint", DEFAULT_ARCHIVE_URL)?
            .set_default("weather.history_years", i64::from(DEFAULT_HISTORY_YEARS))?
            .set_default("output.format", OutputFormat::Json.as_str())?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (PASTURE_ prefix)
            .add_source(
                Environment::with_prefix("PASTURE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            // Command-line flags win over everything else
            .set_override_option("location.latitude", cli.latitude)?
            .set_override_option("location.longitude", cli.longitude)?
            .set_override_option("location.timezone", cli.timezone.clone())?
            .set_override_option("location.name", cli.name.clone())?
            .set_override_option("weather.history_years", cli.years.map(i64::from))?
            .set_override_option("output.format", cli.format.map(|f| f.as_str()))?
            .set_override_option(
                "output.path",
                cli.output.as_ref().map(|p| p.display().to_string()),
            )?
            .build()?;

        config.try_deserialize()
    }

    /// Check ranges and formats that deserialization alone cannot enforce
    pub fn validate(&self) -> AppResult<()> {
        self.location
            .validate()
            .map_err(|e| AppError::validation("location", e.to_string()))?;
        self.weather
            .validate()
            .map_err(|e| AppError::validation("weather", e.to_string()))?;

        if self.location.latitude.is_some() || self.location.longitude.is_some() {
            shared::validate_coordinates(&self.location.coordinates()?)
                .map_err(|msg| AppError::validation("location", msg))?;
        }
        shared::validate_timezone(&self.location.timezone)
            .map_err(|msg| AppError::validation("location.timezone", msg))?;
        shared::validate_history_years(self.weather.history_years)
            .map_err(|msg| AppError::validation("weather.history_years", msg))?;

        Ok(())
    }
}

impl LocationConfig {
    /// Coordinates as exact decimals for the provider query
    pub fn coordinates(&self) -> AppResult<GpsCoordinates> {
        let latitude = decimal_degrees("location.latitude", self.latitude)?;
        let longitude = decimal_degrees("location.longitude", self.longitude)?;
        Ok(GpsCoordinates::new(latitude, longitude))
    }

    /// Name used in log lines
    pub fn label(&self) -> String {
        match (&self.name, self.latitude, self.longitude) {
            (Some(name), _, _) => name.clone(),
            (None, Some(lat), Some(lon)) => format!("{}, {}", lat, lon),
            _ => "unnamed location".to_string(),
        }
    }
}

fn decimal_degrees(key: &str, value: Option<f64>) -> AppResult<Decimal> {
    let value = value.ok_or_else(|| AppError::Configuration(format!("{} is not set", key)))?;
    Decimal::try_from(value).map_err(|e| AppError::validation(key, e.to_string()))
}
