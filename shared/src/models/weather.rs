//! Daily weather history models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One day of weather at a single coordinate
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DailyObservation {
    pub date: NaiveDate,
    /// Minimum 2 m air temperature, °C
    pub min_temp: f64,
    /// Maximum 2 m air temperature, °C
    pub max_temp: f64,
    /// Daily precipitation sum, mm
    pub precipitation: f64,
}

/// Daily history as parallel arrays, in the shape weather providers return it.
///
/// Dates are parsed from ISO `yyyy-mm-dd` strings on deserialization. Values
/// are optional because providers leave the most recent days unfilled.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DailySeries {
    pub time: Vec<NaiveDate>,
    pub temperature_2m_min: Vec<Option<f64>>,
    pub temperature_2m_max: Vec<Option<f64>>,
    pub precipitation_sum: Vec<Option<f64>>,
}

/// Errors raised while turning a [`DailySeries`] into observations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeriesError {
    #[error("daily series '{field}' has {actual} values but 'time' has {expected}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Complete observations extracted from a [`DailySeries`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObservationSet {
    pub observations: Vec<DailyObservation>,
    /// Days dropped because at least one value was missing
    pub incomplete_days: usize,
}

impl DailySeries {
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Zip the parallel arrays into observations, skipping incomplete days.
    pub fn observations(&self) -> Result<ObservationSet, SeriesError> {
        let expected = self.time.len();
        for (field, actual) in [
            ("temperature_2m_min", self.temperature_2m_min.len()),
            ("temperature_2m_max", self.temperature_2m_max.len()),
            ("precipitation_sum", self.precipitation_sum.len()),
        ] {
            if actual != expected {
                return Err(SeriesError::LengthMismatch {
                    field,
                    expected,
                    actual,
                });
            }
        }

        let mut set = ObservationSet::default();
        for (i, date) in self.time.iter().enumerate() {
            match (
                self.temperature_2m_min[i],
                self.temperature_2m_max[i],
                self.precipitation_sum[i],
            ) {
                (Some(min_temp), Some(max_temp), Some(precipitation)) => {
                    set.observations.push(DailyObservation {
                        date: *date,
                        min_temp,
                        max_temp,
                        precipitation,
                    })
                }
                _ => set.incomplete_days += 1,
            }
        }

        Ok(set)
    }
}

impl From<&[DailyObservation]> for DailySeries {
    fn from(observations: &[DailyObservation]) -> Self {
        Self {
            time: observations.iter().map(|o| o.date).collect(),
            temperature_2m_min: observations.iter().map(|o| Some(o.min_temp)).collect(),
            temperature_2m_max: observations.iter().map(|o| Some(o.max_temp)).collect(),
            precipitation_sum: observations.iter().map(|o| Some(o.precipitation)).collect(),
        }
    }
}
