//! Property-based tests for the grid projection and value objects
//!
//! These tests use proptest to verify invariants across many random inputs.

use std::f64::consts::PI;

use domain::{
    DaySelection, GeoCoordinate, grid::normalize_longitude_delta, grid_to_latlon, latlon_to_grid,
};
use proptest::prelude::*;

// ============================================================================
// Grid projection Property Tests
// ============================================================================

mod grid_tests {
    use super::*;

    proptest! {
        #[test]
        fn round_trip_within_half_cell(
            lat in 32.0f64..=43.0f64,
            lon in 124.0f64..=132.0f64
        ) {
            let (nx, ny) = latlon_to_grid(lat, lon);
            let (lat2, lon2) = grid_to_latlon(nx, ny);
            prop_assert!((lat - lat2).abs() <= 0.05, "lat {} -> {}", lat, lat2);
            prop_assert!((lon - lon2).abs() <= 0.05, "lon {} -> {}", lon, lon2);
        }

        #[test]
        fn cell_centre_maps_back_to_cell(
            nx in 1i32..=149i32,
            ny in 1i32..=253i32
        ) {
            let (lat, lon) = grid_to_latlon(nx, ny);
            prop_assert_eq!(latlon_to_grid(lat, lon), (nx, ny));
        }

        #[test]
        fn forward_is_deterministic(
            lat in 32.0f64..=43.0f64,
            lon in 124.0f64..=132.0f64
        ) {
            prop_assert_eq!(latlon_to_grid(lat, lon), latlon_to_grid(lat, lon));
        }

        #[test]
        fn inverse_is_bit_identical(
            nx in -50i32..=300i32,
            ny in -50i32..=300i32
        ) {
            let (lat1, lon1) = grid_to_latlon(nx, ny);
            let (lat2, lon2) = grid_to_latlon(nx, ny);
            prop_assert_eq!(lat1.to_bits(), lat2.to_bits());
            prop_assert_eq!(lon1.to_bits(), lon2.to_bits());
        }

        #[test]
        fn nx_grows_eastward(
            lat in 33.0f64..=42.0f64,
            lon in 124.0f64..=131.0f64
        ) {
            let (west, _) = latlon_to_grid(lat, lon);
            let (east, _) = latlon_to_grid(lat, lon + 0.5);
            prop_assert!(east > west);
        }

        #[test]
        fn longitude_delta_stays_in_half_open_range(delta in -2.0 * PI..=2.0 * PI) {
            let wrapped = normalize_longitude_delta(delta);
            prop_assert!(wrapped > -PI && wrapped <= PI, "{} -> {}", delta, wrapped);
        }
    }
}

// ============================================================================
// GeoCoordinate Property Tests
// ============================================================================

mod geo_coordinate_tests {
    use super::*;

    proptest! {
        #[test]
        fn valid_coordinates_accepted(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            prop_assert!(GeoCoordinate::new(lat, lon).is_ok());
        }

        #[test]
        fn invalid_latitude_rejected(
            lat in prop_oneof![
                (-1000.0f64..-90.1f64),
                (90.1f64..1000.0f64)
            ],
            lon in -180.0f64..=180.0f64
        ) {
            prop_assert!(GeoCoordinate::new(lat, lon).is_err());
        }

        #[test]
        fn to_grid_matches_free_function(
            lat in 32.0f64..=43.0f64,
            lon in 124.0f64..=132.0f64
        ) {
            let cell = GeoCoordinate::new_unchecked(lat, lon).to_grid();
            prop_assert_eq!((cell.nx(), cell.ny()), latlon_to_grid(lat, lon));
        }
    }
}

// ============================================================================
// DaySelection Property Tests
// ============================================================================

mod day_selection_tests {
    use super::*;

    proptest! {
        #[test]
        fn positive_integers_parse(days in 1u32..=10_000u32) {
            prop_assert_eq!(days.to_string().parse::<DaySelection>(), Ok(DaySelection::Offset(days)));
        }

        #[test]
        fn arbitrary_words_rejected(word in "[a-z]{1,8}") {
            prop_assume!(word != "all");
            prop_assert!(word.parse::<DaySelection>().is_err());
        }
    }
}
