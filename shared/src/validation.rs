//! Validation utilities for pasture planning inputs

use rust_decimal::Decimal;

use crate::types::GpsCoordinates;

/// Longest weather history the archive providers serve at daily resolution
pub const MAX_HISTORY_YEARS: u32 = 80;

/// Validate latitude is within [-90, 90] and longitude within [-180, 180]
pub fn validate_coordinates(coordinates: &GpsCoordinates) -> Result<(), &'static str> {
    if coordinates.latitude < Decimal::from(-90) || coordinates.latitude > Decimal::from(90) {
        return Err("Latitude must be between -90 and 90");
    }
    if coordinates.longitude < Decimal::from(-180) || coordinates.longitude > Decimal::from(180) {
        return Err("Longitude must be between -180 and 180");
    }
    Ok(())
}

/// Validate the number of trailing years used for climate normals
pub fn validate_history_years(years: u32) -> Result<(), &'static str> {
    if years == 0 {
        return Err("History window must cover at least one year");
    }
    if years > MAX_HISTORY_YEARS {
        return Err("History window cannot exceed 80 years");
    }
    Ok(())
}

/// Validate an IANA timezone name as accepted by weather providers ("auto" is allowed)
pub fn validate_timezone(timezone: &str) -> Result<(), &'static str> {
    if timezone.is_empty() {
        return Err("Timezone cannot be empty");
    }
    if timezone == "auto" || timezone == "GMT" || timezone == "UTC" {
        return Ok(());
    }
    if !timezone.contains('/') {
        return Err("Timezone must be an IANA name such as America/Sao_Paulo");
    }
    if !timezone
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | '_' | '-' | '+'))
    {
        return Err("Timezone contains invalid characters");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn coords(lat: &str, lon: &str) -> GpsCoordinates {
        GpsCoordinates::new(Decimal::from_str(lat).unwrap(), Decimal::from_str(lon).unwrap())
    }

    #[test]
    fn test_validate_coordinates_valid() {
        assert!(validate_coordinates(&coords("-15.7801", "-47.9292")).is_ok());
        assert!(validate_coordinates(&coords("90", "180")).is_ok());
        assert!(validate_coordinates(&coords("-90", "-180")).is_ok());
    }

    #[test]
    fn test_validate_coordinates_invalid() {
        assert!(validate_coordinates(&coords("90.01", "0")).is_err());
        assert!(validate_coordinates(&coords("0", "-180.5")).is_err());
    }

    #[test]
    fn test_validate_history_years() {
        assert!(validate_history_years(20).is_ok());
        assert!(validate_history_years(1).is_ok());
        assert!(validate_history_years(0).is_err());
        assert!(validate_history_years(81).is_err());
    }

    #[test]
    fn test_validate_timezone() {
        assert!(validate_timezone("America/Sao_Paulo").is_ok());
        assert!(validate_timezone("America/Argentina/Buenos_Aires").is_ok());
        assert!(validate_timezone("auto").is_ok());
        assert!(validate_timezone("UTC").is_ok());
        assert!(validate_timezone("").is_err());
        assert!(validate_timezone("Brasilia").is_err());
        assert!(validate_timezone("America/Sao Paulo").is_err());
    }
}
