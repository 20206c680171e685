//! Forage classification and breeding season engine
//!
//! Pure pipeline: daily observations -> calendar-month climate normals ->
//! forage classification per month -> breeding months aligned so that births
//! land in the best forage months.

use std::collections::BTreeMap;

use chrono::{Datelike, Month};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{
    DailyObservation, ForageClassification, MonthlyClimateNormal, MonthlyResult, PasturePlan,
};

/// Cattle gestation length used to back-date conception from birth
pub const GESTATION_MONTHS: i32 = 9;

#[derive(Default)]
struct TemperatureTotals {
    min_sum: f64,
    max_sum: f64,
    days: u32,
}

/// Aggregate daily history into one normal per calendar month present.
///
/// Temperatures are averaged over every day of that calendar month across all
/// years. Precipitation is summed per year-month first and those totals are
/// then averaged, so a month's value is its typical monthly rainfall.
pub fn compute_climate_normals(observations: &[DailyObservation]) -> Vec<MonthlyClimateNormal> {
    let mut temperatures: BTreeMap<u32, TemperatureTotals> = BTreeMap::new();
    let mut year_month_totals: BTreeMap<(i32, u32), f64> = BTreeMap::new();

    for obs in observations {
        let month = obs.date.month();

        let totals = temperatures.entry(month).or_default();
        totals.min_sum += obs.min_temp;
        totals.max_sum += obs.max_temp;
        totals.days += 1;

        *year_month_totals
            .entry((obs.date.year(), month))
            .or_insert(0.0) += obs.precipitation;
    }

    let mut precipitation_by_month: BTreeMap<u32, Vec<f64>> = BTreeMap::new();
    for ((_, month), total) in year_month_totals {
        precipitation_by_month.entry(month).or_default().push(total);
    }

    temperatures
        .into_iter()
        .filter_map(|(number, totals)| {
            let month = u8::try_from(number)
                .ok()
                .and_then(|n| Month::try_from(n).ok())?;
            let days = f64::from(totals.days);
            let avg_precipitation = precipitation_by_month
                .get(&number)
                .map(|totals| mean(totals))
                .unwrap_or(0.0);

            Some(MonthlyClimateNormal {
                month,
                avg_min_temp: totals.min_sum / days,
                avg_max_temp: totals.max_sum / days,
                avg_precipitation,
            })
        })
        .collect()
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Classify forage-growing conditions from a month's average temperature (°C)
/// and average precipitation total (mm).
///
/// Rules are evaluated in order and the first match wins.
pub fn classify_forage(avg_temp: f64, avg_precipitation: f64) -> ForageClassification {
    let t = avg_temp;
    let p = avg_precipitation;

    let ideal_temp = (20.0..=30.0).contains(&t);
    let marginal_temp = (15.0..20.0).contains(&t) || (t > 30.0 && t <= 33.0);

    if t < 15.0 || t > 33.0 || p < 40.0 {
        return ForageClassification::Poor;
    }

    if t >= 22.0 && p >= 100.0 {
        return ForageClassification::Excellent;
    }

    if (ideal_temp && (80.0..=100.0).contains(&p)) || (marginal_temp && p >= 80.0) {
        return ForageClassification::Good;
    }

    if (marginal_temp && (40.0..=80.0).contains(&p)) || (ideal_temp && (40.0..80.0).contains(&p)) {
        return ForageClassification::Medium;
    }

    // Warm but below the Excellent temperature with abundant rain.
    if (20.0..22.0).contains(&t) && p >= 100.0 {
        return ForageClassification::Good;
    }

    ForageClassification::Medium
}

/// Conception month for a calf born in `birth`.
pub fn breeding_month_for(birth: Month) -> Month {
    let mut number = birth.number_from_month() as i32 - GESTATION_MONTHS;
    if number <= 0 {
        number += 12;
    }
    u8::try_from(number)
        .ok()
        .and_then(|n| Month::try_from(n).ok())
        .unwrap_or(birth)
}

/// Breeding months for every Excellent month, deduplicated in first-seen order.
pub fn derive_breeding_months(results: &[MonthlyResult]) -> Vec<Month> {
    let mut months = Vec::new();
    for result in results {
        if result.classification != ForageClassification::Excellent {
            continue;
        }
        let breeding = breeding_month_for(result.month);
        if !months.contains(&breeding) {
            months.push(breeding);
        }
    }
    months
}

/// Build the table row for one climate normal.
pub fn monthly_result(normal: &MonthlyClimateNormal) -> MonthlyResult {
    MonthlyResult {
        month: normal.month,
        min: round_2dp(normal.avg_min_temp),
        max: round_2dp(normal.avg_max_temp),
        precipitation: round_2dp(normal.avg_precipitation),
        classification: classify_forage(normal.avg_temp(), normal.avg_precipitation),
    }
}

/// Run the whole pipeline over in-memory daily history.
pub fn compute_pasture_plan(observations: &[DailyObservation]) -> PasturePlan {
    let monthly_results: Vec<MonthlyResult> = compute_climate_normals(observations)
        .iter()
        .map(monthly_result)
        .collect();
    let breeding_months = derive_breeding_months(&monthly_results);

    PasturePlan {
        monthly_results,
        breeding_months,
    }
}

/// Round half away from zero on the exact binary value, as `toFixed(2)` does.
fn round_2dp(value: f64) -> Decimal {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_round_2dp_uses_binary_value() {
        // 2.675 is stored as 2.67499999...
        assert_eq!(round_2dp(2.675), Decimal::from_str("2.67").unwrap());
        assert_eq!(round_2dp(1.005), Decimal::from_str("1.00").unwrap());
        assert_eq!(round_2dp(-3.125), Decimal::from_str("-3.13").unwrap());
    }

    #[test]
    fn test_round_2dp_non_finite_is_zero() {
        assert_eq!(round_2dp(f64::NAN), Decimal::ZERO);
        assert_eq!(round_2dp(f64::INFINITY), Decimal::ZERO);
    }

    #[test]
    fn test_mean_of_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_classify_nan_falls_through_to_medium() {
        assert_eq!(classify_forage(f64::NAN, f64::NAN), ForageClassification::Medium);
    }
}
