//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DomainError {
    /// Coordinates outside [-90, 90] × [-180, 180] or not finite
    #[error(
        "Invalid coordinates ({latitude}, {longitude}): latitude must be -90 to 90, longitude must be -180 to 180"
    )]
    InvalidCoordinates {
        /// Rejected latitude
        latitude: f64,
        /// Rejected longitude
        longitude: f64,
    },

    /// Day selection is neither `all` nor a positive integer
    #[error("--days must be 'all' or a positive integer")]
    InvalidDaySelection(String),

    /// Region name has no mid-term forecast station
    #[error("Unknown region: {0}")]
    UnknownRegion(String),
}
