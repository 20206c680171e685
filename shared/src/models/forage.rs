//! Forage quality and breeding season models

use chrono::Month;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{month_name, month_names};

/// Forage-growing quality of a month, ordered from worst to best
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ForageClassification {
    Poor,
    Medium,
    Good,
    Excellent,
}

impl std::fmt::Display for ForageClassification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ForageClassification::Poor => write!(f, "Poor"),
            ForageClassification::Medium => write!(f, "Medium"),
            ForageClassification::Good => write!(f, "Good"),
            ForageClassification::Excellent => write!(f, "Excellent"),
        }
    }
}

/// One row of the pasture planning table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyResult {
    #[serde(with = "month_name")]
    pub month: Month,
    /// Average minimum temperature, °C, 2 decimals
    #[serde(with = "rust_decimal::serde::float")]
    pub min: Decimal,
    /// Average maximum temperature, °C, 2 decimals
    #[serde(with = "rust_decimal::serde::float")]
    pub max: Decimal,
    /// Average monthly precipitation total, mm, 2 decimals
    #[serde(with = "rust_decimal::serde::float")]
    pub precipitation: Decimal,
    pub classification: ForageClassification,
}

/// Output of the planning pipeline.
///
/// Field names match the `pasturePlanning` / `breedingMonths` fields of the
/// dashboard's property records.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PasturePlan {
    #[serde(rename = "pasturePlanning")]
    pub monthly_results: Vec<MonthlyResult>,
    #[serde(with = "month_names")]
    pub breeding_months: Vec<Month>,
}
