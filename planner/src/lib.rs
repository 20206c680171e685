//! Pasture planner
//!
//! Batch tool that turns twenty years of daily weather for a property into a
//! monthly forage-quality table and the breeding months that line up calving
//! with the best forage.

use std::path::PathBuf;

use chrono::NaiveDate;
use shared::PasturePlan;

pub mod cli;
pub mod config;
pub mod error;
pub mod external;
pub mod services;

pub use config::Config;
pub use error::{AppError, AppResult};

use crate::external::ArchiveClient;
use crate::services::{export, pasture_planning, Location, PasturePlanningService};

/// Per-invocation options that are not part of the layered configuration
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// End of the history window
    pub today: NaiveDate,
    /// Saved history to use instead of the provider
    pub input: Option<PathBuf>,
    /// Where to save the provider response
    pub save_response: Option<PathBuf>,
}

/// Produce the plan for the configured location
pub async fn run(config: &Config, options: &RunOptions) -> AppResult<PasturePlan> {
    if let Some(path) = &options.input {
        tracing::info!("Reading daily history from {}", path.display());
        let series = pasture_planning::load_history_file(path)?;
        return pasture_planning::plan_from_series(&series);
    }

    let location = Location {
        coordinates: config.location.coordinates()?,
        timezone: config.location.timezone.clone(),
    };
    tracing::info!("Planning pasture for {}", config.location.label());

    let client = ArchiveClient::with_base_url(config.weather.api_endpoint.clone());
    let service = PasturePlanningService::new(client, config.weather.history_years);

    let response = service.fetch_history(&location, options.today).await?;
    if let Some(path) = &options.save_response {
        pasture_planning::save_history_file(path, &response)?;
    }

    pasture_planning::plan_from_series(&response.daily)
}

/// Write the rendered plan to the configured file or stdout
pub fn write_output(config: &Config, plan: &PasturePlan) -> AppResult<()> {
    let rendered = export::render(plan, config.output.format)?;

    match &config.output.path {
        Some(path) => {
            std::fs::write(path, rendered)?;
            tracing::info!("Wrote plan to {}", path.display());
        }
        None => {
            use std::io::Write;
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
