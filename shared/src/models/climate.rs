//! Calendar-month climate normals

use chrono::Month;
use serde::{Deserialize, Serialize};

use crate::types::month_name;

/// Multi-year average conditions for one calendar month
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MonthlyClimateNormal {
    #[serde(with = "month_name")]
    pub month: Month,
    pub avg_min_temp: f64,
    pub avg_max_temp: f64,
    /// Average of the per-year monthly precipitation totals, mm
    pub avg_precipitation: f64,
}

impl MonthlyClimateNormal {
    /// Midpoint of the average minimum and maximum temperature
    pub fn avg_temp(&self) -> f64 {
        (self.avg_min_temp + self.avg_max_temp) / 2.0
    }
}
