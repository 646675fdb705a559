//! Grid cell value object

use serde::{Deserialize, Serialize};
use std::fmt;

use super::GeoCoordinate;
use crate::grid;

/// A cell on the KMA 5 km forecast grid
///
/// Indices are 1-based; the converter enforces no upper bound and cells
/// outside the published domain simply return no forecast data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCoordinate {
    nx: i32,
    ny: i32,
}

impl GridCoordinate {
    /// Create a grid coordinate
    #[must_use]
    pub const fn new(nx: i32, ny: i32) -> Self {
        Self { nx, ny }
    }

    /// X index (west to east)
    #[must_use]
    pub const fn nx(&self) -> i32 {
        self.nx
    }

    /// Y index (south to north)
    #[must_use]
    pub const fn ny(&self) -> i32 {
        self.ny
    }

    /// Geographic coordinate of the cell centre
    #[must_use]
    pub fn to_geo(&self) -> GeoCoordinate {
        let (lat, lon) = grid::grid_to_latlon(self.nx, self.ny);
        GeoCoordinate::new_unchecked(lat, lon)
    }
}

impl fmt::Display for GridCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.nx, self.ny)
    }
}
