//! Pasture planning service
//!
//! Thin I/O layer around the pure engine in `shared::planning`: resolves the
//! history window, obtains daily history (provider or saved file), and runs
//! the pipeline.

use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use shared::{DailySeries, GpsCoordinates, HistoryWindow, PasturePlan};

use crate::error::{AppError, AppResult};
use crate::external::open_meteo::{ArchiveClient, ArchiveResponse};

/// Where to plan for
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub coordinates: GpsCoordinates,
    pub timezone: String,
}

/// Saved history: either a full provider response or a bare daily series
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum HistoryFile {
    Archive(ArchiveResponse),
    Series(DailySeries),
}

/// Pasture planning service
#[derive(Clone)]
pub struct PasturePlanningService {
    client: ArchiveClient,
    history_years: u32,
}

impl PasturePlanningService {
    /// Create a new PasturePlanningService
    pub fn new(client: ArchiveClient, history_years: u32) -> Self {
        Self {
            client,
            history_years,
        }
    }

    /// History window ending on `today`
    pub fn history_window(&self, today: NaiveDate) -> HistoryWindow {
        HistoryWindow::trailing_years(today, self.history_years)
    }

    /// Fetch the provider response covering the trailing window
    pub async fn fetch_history(
        &self,
        location: &Location,
        today: NaiveDate,
    ) -> AppResult<ArchiveResponse> {
        shared::validate_coordinates(&location.coordinates)
            .map_err(|msg| AppError::validation("location", msg))?;

        let window = self.history_window(today);
        tracing::info!(
            "Fetching {} years of daily history ({} to {})",
            self.history_years,
            window.start,
            window.end
        );

        self.client
            .fetch_daily_history(&location.coordinates, &window, &location.timezone)
            .await
    }
}

/// Run the engine over a daily series, dropping incomplete days
pub fn plan_from_series(series: &DailySeries) -> AppResult<PasturePlan> {
    let set = series.observations()?;

    if set.incomplete_days > 0 {
        tracing::warn!(
            "Skipping {} of {} days with missing values",
            set.incomplete_days,
            series.len()
        );
    }
    if set.observations.is_empty() {
        tracing::warn!("No complete daily observations; plan will be empty");
    }

    let plan = shared::compute_pasture_plan(&set.observations);

    tracing::info!(
        "Classified {} months; breeding months: [{}]",
        plan.monthly_results.len(),
        plan.breeding_months
            .iter()
            .map(|m| m.name())
            .collect::<Vec<_>>()
            .join(", ")
    );

    Ok(plan)
}

/// Load a daily series saved from an earlier run
pub fn load_history_file(path: &Path) -> AppResult<DailySeries> {
    let contents = std::fs::read_to_string(path)?;
    let file: HistoryFile = serde_json::from_str(&contents)?;

    Ok(match file {
        HistoryFile::Archive(response) => response.daily,
        HistoryFile::Series(series) => series,
    })
}

/// Save a provider response so later runs can skip the network
pub fn save_history_file(path: &Path, response: &ArchiveResponse) -> AppResult<()> {
    let json = serde_json::to_string(response)?;
    std::fs::write(path, json)?;
    tracing::info!("Saved provider response to {}", path.display());
    Ok(())
}
