//! Error handling for the pasture planner
//!
//! Every failure is reported once at the top level; nothing is retried.

use shared::SeriesError;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Configuration error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Validation error: {field}: {message}")]
    Validation { field: String, message: String },

    // External service errors
    #[error("Weather provider request failed: {0}")]
    WeatherRequest(#[from] reqwest::Error),

    #[error("Weather provider error: {0}")]
    WeatherProvider(String),

    // Input errors
    #[error("Invalid daily series: {0}")]
    InvalidSeries(#[from] SeriesError),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    // Output errors
    #[error("Output error: {0}")]
    Output(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        AppError::Validation {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// Stable machine-readable code, logged alongside the message
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Configuration(_) | AppError::ConfigLoad(_) => "CONFIGURATION_ERROR",
            AppError::Validation { .. } => "VALIDATION_ERROR",
            AppError::WeatherRequest(_) | AppError::WeatherProvider(_) => "WEATHER_PROVIDER_ERROR",
            AppError::InvalidSeries(_) => "INVALID_SERIES",
            AppError::Json(_) => "INVALID_JSON",
            AppError::Output(_) => "OUTPUT_ERROR",
            AppError::Io(_) => "IO_ERROR",
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;
