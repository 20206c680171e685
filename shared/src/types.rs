//! Common types used across the planner

use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// GPS coordinates
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GpsCoordinates {
    pub latitude: Decimal,
    pub longitude: Decimal,
}

impl GpsCoordinates {
    pub fn new(latitude: Decimal, longitude: Decimal) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Inclusive date range of weather history used to build climate normals
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl HistoryWindow {
    /// Window ending on `end` and reaching back `years` calendar years.
    ///
    /// A Feb 29 end date maps to Feb 28 in a non-leap start year.
    pub fn trailing_years(end: NaiveDate, years: u32) -> Self {
        let start = end
            .checked_sub_months(Months::new(years.saturating_mul(12)))
            .unwrap_or(NaiveDate::MIN);
        Self { start, end }
    }

    /// Start date in `yyyy-mm-dd` form
    pub fn start_param(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }

    /// End date in `yyyy-mm-dd` form
    pub fn end_param(&self) -> String {
        self.end.format("%Y-%m-%d").to_string()
    }
}

/// Serialize a [`chrono::Month`] as its full English name ("January").
pub mod month_name {
    use chrono::Month;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(month: &Month, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(month.name())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Month, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse::<Month>()
            .map_err(|_| de::Error::custom(format!("unknown month name: {}", name)))
    }
}

/// Serialize a list of months as full English names.
pub mod month_names {
    use chrono::Month;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(months: &[Month], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(months.iter().map(|m| m.name()))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Month>, D::Error> {
        Vec::<String>::deserialize(deserializer)?
            .into_iter()
            .map(|name| {
                name.parse::<Month>()
                    .map_err(|_| de::Error::custom(format!("unknown month name: {}", name)))
            })
            .collect()
    }
}
