//! Tests for the forage classifier
//! Verifies the rule table order and its inclusive/exclusive boundaries

use proptest::prelude::*;
use shared::{classify_forage, ForageClassification};

use shared::ForageClassification::{Excellent, Good, Medium, Poor};

// =============================================================================
// Reference cases
// =============================================================================

mod reference_cases {
    use super::*;

    #[test]
    fn warm_and_wet_is_excellent() {
        assert_eq!(classify_forage(25.0, 120.0), Excellent);
    }

    #[test]
    fn cold_is_poor_regardless_of_rain() {
        assert_eq!(classify_forage(10.0, 200.0), Poor);
    }

    #[test]
    fn dry_is_poor_regardless_of_temperature() {
        assert_eq!(classify_forage(25.0, 35.0), Poor);
    }

    #[test]
    fn ideal_temperature_with_moderate_rain_is_good() {
        assert_eq!(classify_forage(25.0, 90.0), Good);
    }

    #[test]
    fn cool_with_some_rain_is_medium() {
        assert_eq!(classify_forage(18.0, 60.0), Medium);
    }

    #[test]
    fn warm_below_excellent_threshold_with_heavy_rain_is_good() {
        assert_eq!(classify_forage(21.0, 150.0), Good);
    }
}

// =============================================================================
// Boundaries
// =============================================================================

mod boundaries {
    use super::*;

    #[test]
    fn poor_temperature_bounds() {
        assert_eq!(classify_forage(14.99, 120.0), Poor);
        assert_eq!(classify_forage(15.0, 120.0), Good);
        assert_eq!(classify_forage(33.0, 120.0), Excellent);
        assert_eq!(classify_forage(33.01, 120.0), Poor);
    }

    #[test]
    fn poor_precipitation_bound() {
        assert_eq!(classify_forage(25.0, 39.99), Poor);
        assert_eq!(classify_forage(25.0, 40.0), Medium);
    }

    #[test]
    fn excellent_needs_both_thresholds() {
        assert_eq!(classify_forage(22.0, 100.0), Excellent);
        assert_eq!(classify_forage(21.99, 100.0), Good);
        assert_eq!(classify_forage(22.0, 99.99), Good);
    }

    #[test]
    fn ideal_band_rain_edges() {
        assert_eq!(classify_forage(30.0, 80.0), Good);
        assert_eq!(classify_forage(30.0, 79.99), Medium);
        assert_eq!(classify_forage(20.0, 100.0), Good);
        assert_eq!(classify_forage(20.0, 100.01), Good);
    }

    #[test]
    fn marginal_band_exactly_80mm_is_good() {
        // 80mm satisfies both the Good (>= 80) and Medium (<= 80) marginal
        // rules; Good is checked first.
        assert_eq!(classify_forage(17.0, 80.0), Good);
        assert_eq!(classify_forage(31.0, 80.0), Good);
    }

    #[test]
    fn marginal_band_below_80mm_is_medium() {
        assert_eq!(classify_forage(17.0, 79.99), Medium);
        assert_eq!(classify_forage(30.5, 40.0), Medium);
    }

    #[test]
    fn hot_marginal_band_with_heavy_rain_is_excellent() {
        assert_eq!(classify_forage(31.5, 100.0), Excellent);
    }

    #[test]
    fn cool_marginal_band_never_excellent() {
        assert_eq!(classify_forage(19.99, 500.0), Good);
    }
}

// =============================================================================
// Properties
// =============================================================================

mod property_tests {
    use super::*;

    fn temperature_strategy() -> impl Strategy<Value = f64> {
        -10.0f64..45.0
    }

    fn precipitation_strategy() -> impl Strategy<Value = f64> {
        0.0f64..400.0
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        /// Poor exactly when temperature or rain is out of the growing range
        #[test]
        fn prop_poor_iff_outside_growing_range(
            t in temperature_strategy(),
            p in precipitation_strategy()
        ) {
            let outside = t < 15.0 || t > 33.0 || p < 40.0;
            prop_assert_eq!(classify_forage(t, p) == Poor, outside);
        }

        /// Excellent exactly when warm enough and wet enough inside the growing range
        #[test]
        fn prop_excellent_iff_warm_and_wet(
            t in temperature_strategy(),
            p in precipitation_strategy()
        ) {
            let excellent = t >= 22.0 && t <= 33.0 && p >= 100.0;
            prop_assert_eq!(classify_forage(t, p) == Excellent, excellent);
        }

        /// Within the growing temperature range more rain never lowers the tier
        #[test]
        fn prop_monotone_in_precipitation(
            t in 15.0f64..=33.0,
            p1 in precipitation_strategy(),
            p2 in precipitation_strategy()
        ) {
            let (low, high) = if p1 <= p2 { (p1, p2) } else { (p2, p1) };
            prop_assert!(classify_forage(t, low) <= classify_forage(t, high));
        }

        /// Same input, same answer
        #[test]
        fn prop_deterministic(
            t in temperature_strategy(),
            p in precipitation_strategy()
        ) {
            prop_assert_eq!(classify_forage(t, p), classify_forage(t, p));
        }
    }
}

#[test]
fn classifications_are_ordered() {
    assert!(Poor < Medium);
    assert!(Medium < Good);
    assert!(Good < Excellent);
}

#[test]
fn classification_display_is_title_case() {
    assert_eq!(Poor.to_string(), "Poor");
    assert_eq!(Medium.to_string(), "Medium");
    assert_eq!(Good.to_string(), "Good");
    assert_eq!(Excellent.to_string(), "Excellent");
}
