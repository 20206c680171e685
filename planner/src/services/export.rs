//! Plan export in JSON or CSV

use rust_decimal::Decimal;
use serde::Serialize;
use shared::{ForageClassification, PasturePlan};

use crate::config::OutputFormat;
use crate::error::{AppError, AppResult};

/// One CSV line of the monthly table
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    month: &'a str,
    #[serde(with = "rust_decimal::serde::float")]
    min: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    max: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    precipitation: Decimal,
    classification: ForageClassification,
    breeding_month: bool,
}

/// Render the plan in the requested format
pub fn render(plan: &PasturePlan, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Json => export_to_json(plan),
        OutputFormat::Csv => export_to_csv(plan),
    }
}

/// Pretty-printed JSON with `pasturePlanning` and `breedingMonths`
pub fn export_to_json(plan: &PasturePlan) -> AppResult<String> {
    let mut json = serde_json::to_string_pretty(plan)?;
    json.push('\n');
    Ok(json)
}

/// Monthly table as CSV; `breeding_month` marks months in the breeding season
pub fn export_to_csv(plan: &PasturePlan) -> AppResult<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    for result in &plan.monthly_results {
        let row = CsvRow {
            month: result.month.name(),
            min: result.min,
            max: result.max,
            precipitation: result.precipitation,
            classification: result.classification,
            breeding_month: plan.breeding_months.contains(&result.month),
        };
        wtr.serialize(row)
            .map_err(|e| AppError::Output(format!("CSV serialization error: {}", e)))?;
    }
    let csv_data = String::from_utf8(
        wtr.into_inner()
            .map_err(|e| AppError::Output(format!("CSV writer error: {}", e)))?,
    )
    .map_err(|e| AppError::Output(format!("UTF-8 conversion error: {}", e)))?;
    Ok(csv_data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Month;
    use shared::MonthlyResult;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn plan() -> PasturePlan {
        PasturePlan {
            monthly_results: vec![
                MonthlyResult {
                    month: Month::January,
                    min: dec("21.35"),
                    max: dec("31.2"),
                    precipitation: dec("215.47"),
                    classification: ForageClassification::Excellent,
                },
                MonthlyResult {
                    month: Month::April,
                    min: dec("18.9"),
                    max: dec("29.05"),
                    precipitation: dec("61"),
                    classification: ForageClassification::Medium,
                },
            ],
            breeding_months: vec![Month::April],
        }
    }

    #[test]
    fn test_export_to_json_shape() {
        let json = export_to_json(&plan()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["pasturePlanning"][0]["month"], "January");
        assert_eq!(value["pasturePlanning"][0]["min"], 21.35);
        assert_eq!(value["pasturePlanning"][0]["precipitation"], 215.47);
        assert_eq!(value["pasturePlanning"][0]["classification"], "Excellent");
        assert_eq!(value["breedingMonths"], serde_json::json!(["April"]));
    }

    #[test]
    fn test_export_to_csv() {
        let csv = export_to_csv(&plan()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(
            lines[0],
            "month,min,max,precipitation,classification,breeding_month"
        );
        assert_eq!(lines[1], "January,21.35,31.2,215.47,Excellent,false");
        assert_eq!(lines[2], "April,18.9,29.05,61.0,Medium,true");
    }

    #[test]
    fn test_render_dispatches_on_format() {
        let plan = plan();
        assert!(render(&plan, OutputFormat::Json).unwrap().starts_with('{'));
        assert!(render(&plan, OutputFormat::Csv).unwrap().starts_with("month,"));
    }
}
