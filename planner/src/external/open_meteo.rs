//! Open-Meteo historical weather client
//!
//! Fetches daily minimum/maximum temperature and precipitation sums from the
//! archive API for one coordinate and date window.

use std::collections::HashMap;

use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use shared::{DailySeries, GpsCoordinates, HistoryWindow};

use crate::error::{AppError, AppResult};

/// Public archive endpoint
pub const DEFAULT_ARCHIVE_URL: &str = "https://archive-api.open-meteo.com/v1/archive";

/// Daily variables requested from the archive
pub const DAILY_VARIABLES: &str = "temperature_2m_min,temperature_2m_max,precipitation_sum";

/// Archive API client
#[derive(Clone)]
pub struct ArchiveClient {
    client: Client,
    base_url: String,
}

/// Archive API response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveResponse {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub elevation: Option<f64>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub daily_units: HashMap<String, String>,
    pub daily: DailySeries,
}

/// Body returned with 4xx responses
#[derive(Debug, Deserialize)]
struct ArchiveErrorBody {
    reason: String,
}

impl ArchiveClient {
    /// Create a new ArchiveClient against the public endpoint
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_ARCHIVE_URL.to_string())
    }

    /// Create a new ArchiveClient with custom base URL (self-hosted or testing)
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the daily history request without sending it
    pub fn daily_history_request(
        &self,
        coordinates: &GpsCoordinates,
        window: &HistoryWindow,
        timezone: &str,
    ) -> RequestBuilder {
        self.client.get(&self.base_url).query(&[
            ("latitude", coordinates.latitude.to_string()),
            ("longitude", coordinates.longitude.to_string()),
            ("start_date", window.start_param()),
            ("end_date", window.end_param()),
            ("daily", DAILY_VARIABLES.to_string()),
            ("timezone", timezone.to_string()),
        ])
    }

    /// Fetch daily history for a coordinate over the given window
    pub async fn fetch_daily_history(
        &self,
        coordinates: &GpsCoordinates,
        window: &HistoryWindow,
        timezone: &str,
    ) -> AppResult<ArchiveResponse> {
        tracing::debug!(
            "Requesting daily history {}..{} for ({}, {})",
            window.start,
            window.end,
            coordinates.latitude,
            coordinates.longitude
        );

        let response = self
            .daily_history_request(coordinates, window, timezone)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::WeatherProvider(format!(
                "{} - {}",
                status,
                error_reason(&body)
            )));
        }

        let data: ArchiveResponse = response.json().await.map_err(|e| {
            AppError::WeatherProvider(format!("Failed to parse archive response: {}", e))
        })?;

        tracing::debug!("Received {} daily records", data.daily.len());
        Ok(data)
    }
}

impl Default for ArchiveClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the provider's `reason` from an error body, falling back to the raw text
fn error_reason(body: &str) -> String {
    serde_json::from_str::<ArchiveErrorBody>(body)
        .map(|e| e.reason)
        .unwrap_or_else(|_| body.to_string())
}
