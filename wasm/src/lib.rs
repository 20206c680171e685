//! WebAssembly module for the livestock dashboard
//!
//! Provides client-side pasture planning:
//! - Forage classification for a month's averages
//! - Full plan computation from daily weather history
//! - Breeding month lookup
//! - History window for the browser's current date

use chrono::{Month, NaiveDate};
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;

/// Compute the pasture plan from a daily series JSON
/// (`time`, `temperature_2m_min`, `temperature_2m_max`, `precipitation_sum`)
#[wasm_bindgen(js_name = computePasturePlan)]
pub fn compute_pasture_plan(daily_json: &str) -> Result<String, JsValue> {
    let (plan_json, incomplete_days) =
        plan_from_json(daily_json).map_err(|e| JsValue::from_str(&e))?;

    if incomplete_days > 0 {
        web_sys::console::warn_1(&JsValue::from_str(&format!(
            "Skipped {} days with missing values",
            incomplete_days
        )));
    }

    Ok(plan_json)
}

/// Classify forage quality from average temperature (°C) and precipitation (mm)
#[wasm_bindgen(js_name = classifyForage)]
pub fn classify_forage(avg_temp: f64, avg_precipitation: f64) -> String {
    shared::classify_forage(avg_temp, avg_precipitation).to_string()
}

/// Breeding month name for a birth month number (1-12)
#[wasm_bindgen(js_name = breedingMonthFor)]
pub fn breeding_month_for(birth_month: u8) -> Result<String, JsValue> {
    breeding_month_name(birth_month).map_err(|e| JsValue::from_str(&e))
}

/// `{"start": "yyyy-mm-dd", "end": "yyyy-mm-dd"}` ending at the browser's today
#[wasm_bindgen(js_name = historyWindow)]
pub fn history_window(years: u32) -> Result<String, JsValue> {
    let now = js_sys::Date::new_0();
    let today = NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .ok_or_else(|| JsValue::from_str("Invalid browser date"))?;

    window_json(today, years).map_err(|e| JsValue::from_str(&e))
}

fn plan_from_json(daily_json: &str) -> Result<(String, usize), String> {
    let series: DailySeries = serde_json::from_str(daily_json)
        .map_err(|e| format!("Invalid daily series JSON: {}", e))?;
    let set = series.observations().map_err(|e| e.to_string())?;

    let plan = shared::compute_pasture_plan(&set.observations);
    let json = serde_json::to_string(&plan).map_err(|e| e.to_string())?;
    Ok((json, set.incomplete_days))
}

fn breeding_month_name(birth_month: u8) -> Result<String, String> {
    let birth = Month::try_from(birth_month)
        .map_err(|_| format!("Month must be 1-12, got {}", birth_month))?;
    Ok(shared::breeding_month_for(birth).name().to_string())
}

fn window_json(today: NaiveDate, years: u32) -> Result<String, String> {
    shared::validate_history_years(years)?;
    let window = HistoryWindow::trailing_years(today, years);
    serde_json::to_string(&window).map_err(|e| e.to_string())
}
