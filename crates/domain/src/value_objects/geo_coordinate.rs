//! Geographic coordinate value object

use serde::{Deserialize, Serialize};
use std::fmt;

use super::GridCoordinate;
use crate::{errors::DomainError, grid};

/// A geographic coordinate with latitude and longitude in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    /// Latitude in degrees (-90 to 90)
    latitude: f64,
    /// Longitude in degrees (-180 to 180)
    longitude: f64,
}

impl GeoCoordinate {
    /// Create a new coordinate with validation
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` if latitude is not in
    /// [-90, 90], longitude is not in [-180, 180], or either is NaN.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(DomainError::InvalidCoordinates {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Create a coordinate without validation (for trusted sources)
    #[must_use]
    pub const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Grid cell containing this coordinate
    #[must_use]
    pub fn to_grid(&self) -> GridCoordinate {
        let (nx, ny) = grid::latlon_to_grid(self.latitude, self.longitude);
        GridCoordinate::new(nx, ny)
    }
}

impl fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_coordinates() {
        let loc = GeoCoordinate::new(37.5665, 126.978).expect("valid coordinates");
        assert!((loc.latitude() - 37.5665).abs() < f64::EPSILON);
        assert!((loc.longitude() - 126.978).abs() < f64::EPSILON);
    }

    #[test]
    fn test_boundary_coordinates() {
        assert!(GeoCoordinate::new(90.0, 180.0).is_ok());
        assert!(GeoCoordinate::new(-90.0, -180.0).is_ok());
        assert!(GeoCoordinate::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn test_invalid_latitude() {
        assert!(GeoCoordinate::new(91.0, 0.0).is_err());
        assert!(GeoCoordinate::new(-91.0, 0.0).is_err());
    }

    #[test]
    fn test_invalid_longitude() {
        assert!(GeoCoordinate::new(0.0, 181.0).is_err());
        assert!(GeoCoordinate::new(0.0, -181.0).is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(GeoCoordinate::new(f64::NAN, 127.0).is_err());
        assert!(GeoCoordinate::new(37.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_to_grid() {
        let seoul_city_hall = GeoCoordinate::new(37.5665, 126.978).expect("valid");
        let cell = seoul_city_hall.to_grid();
        assert_eq!(cell, GridCoordinate::new(60, 127));
    }

    #[test]
    fn test_display() {
        let loc = GeoCoordinate::new(37.5665, 126.978).expect("valid");
        assert_eq!(loc.to_string(), "37.5665, 126.978");
    }

    #[test]
    fn test_serialization() {
        let loc = GeoCoordinate::new(35.1796, 129.0756).expect("valid");
        let json = serde_json::to_string(&loc).expect("serialize");
        assert!(json.contains("35.1796"));

        let deserialized: GeoCoordinate = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(loc, deserialized);
    }
}
