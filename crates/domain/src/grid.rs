//! KMA forecast grid projection
//!
//! The KMA village forecast is published on a 5 km Lambert Conformal Conic
//! grid covering the Korean peninsula. Forecast endpoints are queried by
//! integer cell indices `(nx, ny)`, so every location lookup goes through
//! [`latlon_to_grid`] first.
//!
//! The arithmetic follows the operational KMA routine step by step (same
//! operation order, same degree/radian constant) so that results match the
//! official tables cell for cell.
//!
//! # Examples
//!
//! ```
//! use domain::grid::{grid_to_latlon, latlon_to_grid};
//!
//! // Seoul City Hall
//! assert_eq!(latlon_to_grid(37.5665, 126.9780), (60, 127));
//!
//! let (lat, lon) = grid_to_latlon(60, 127);
//! assert!((lat - 37.5665).abs() < 0.05);
//! assert!((lon - 126.9780).abs() < 0.05);
//! ```

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

const DEGREE_TO_RADIAN: f64 = PI / 180.0;

/// Fixed parameters of a Lambert Conformal Conic grid
///
/// Angles are in degrees, distances in kilometres, origin in grid units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionConstants {
    /// Radius of the reference sphere
    pub earth_radius_km: f64,
    /// Edge length of one grid cell
    pub grid_spacing_km: f64,
    /// First standard parallel
    pub standard_parallel_1: f64,
    /// Second standard parallel
    pub standard_parallel_2: f64,
    /// Reference (central) longitude
    pub reference_longitude: f64,
    /// Reference latitude
    pub reference_latitude: f64,
    /// Grid X index of the reference point
    pub origin_x: f64,
    /// Grid Y index of the reference point
    pub origin_y: f64,
}

impl ProjectionConstants {
    /// The operational KMA 5 km grid
    pub const KMA: Self = Self {
        earth_radius_km: 6371.008_77,
        grid_spacing_km: 5.0,
        standard_parallel_1: 30.0,
        standard_parallel_2: 60.0,
        reference_longitude: 126.0,
        reference_latitude: 38.0,
        origin_x: 43.0,
        origin_y: 136.0,
    };

    /// Derive the cone parameters for this grid
    #[must_use]
    pub fn parameters(&self) -> LccParameters {
        LccParameters::new(self)
    }

    /// Project a geographic coordinate onto the grid
    ///
    /// Indices are rounded half-up (`floor(x + 0.5)`). Input is not
    /// validated; non-finite input saturates to meaningless indices.
    #[must_use]
    #[allow(clippy::suboptimal_flops)]
    pub fn to_grid(&self, lat: f64, lon: f64) -> (i32, i32) {
        let params = self.parameters();

        let lat_rad = lat * DEGREE_TO_RADIAN;
        let lon_rad = lon * DEGREE_TO_RADIAN;
        let ref_lon_rad = self.reference_longitude * DEGREE_TO_RADIAN;

        let distance = params.radius_at(lat_rad);
        let theta = normalize_longitude_delta(lon_rad - ref_lon_rad) * params.sn;

        let nx = round_half_up(distance * theta.sin() + self.origin_x);
        let ny = round_half_up(params.ro - distance * theta.cos() + self.origin_y);

        (nx, ny)
    }

    /// Recover the geographic coordinate of a grid cell centre
    ///
    /// This is the algebraic inverse of [`Self::to_grid`] before rounding.
    /// At the apex of the cone (`distance == 0`) the latitude term divides
    /// by zero and the result is undefined; the apex lies at a fractional
    /// `ny`, so integer cells never reach it.
    #[must_use]
    #[allow(clippy::suboptimal_flops, clippy::imprecise_flops)]
    pub fn to_geo(&self, nx: i32, ny: i32) -> (f64, f64) {
        let params = self.parameters();
        let ref_lon_rad = self.reference_longitude * DEGREE_TO_RADIAN;

        let dx = f64::from(nx) - self.origin_x;
        let dy = params.ro - f64::from(ny) + self.origin_y;

        let mut distance = (dx * dx + dy * dy).sqrt();
        if params.sn < 0.0 {
            distance = -distance;
        }

        let lat_rad =
            2.0 * (params.grid_units * params.sf / distance).powf(1.0 / params.sn).atan() - FRAC_PI_2;

        let theta = if dx.abs() <= 0.0 {
            0.0
        } else if dy.abs() <= 0.0 {
            if dx >= 0.0 { FRAC_PI_2 } else { -FRAC_PI_2 }
        } else {
            dx.atan2(dy)
        };

        let lon_rad = theta / params.sn + ref_lon_rad;

        (lat_rad / DEGREE_TO_RADIAN, lon_rad / DEGREE_TO_RADIAN)
    }
}

impl Default for ProjectionConstants {
    fn default() -> Self {
        Self::KMA
    }
}

/// Cone parameters shared by the forward and inverse transforms
///
/// These depend only on [`ProjectionConstants`], never on the query point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LccParameters {
    /// Cone constant (projection exponent)
    pub sn: f64,
    /// Scale factor
    pub sf: f64,
    /// Conic radius at the reference latitude, in grid units
    pub ro: f64,
    /// Earth radius expressed in grid cells
    pub grid_units: f64,
}

impl LccParameters {
    /// Compute the cone parameters for the given grid
    #[must_use]
    pub fn new(constants: &ProjectionConstants) -> Self {
        let slat1 = constants.standard_parallel_1 * DEGREE_TO_RADIAN;
        let slat2 = constants.standard_parallel_2 * DEGREE_TO_RADIAN;
        let olat = constants.reference_latitude * DEGREE_TO_RADIAN;
        let grid_units = constants.earth_radius_km / constants.grid_spacing_km;

        let sn = (slat1.cos() / slat2.cos()).ln()
            / ((FRAC_PI_4 + slat2 * 0.5).tan() / (FRAC_PI_4 + slat1 * 0.5).tan()).ln();
        let sf = (FRAC_PI_4 + slat1 * 0.5).tan().powf(sn) * slat1.cos() / sn;
        let ro = grid_units * sf / (FRAC_PI_4 + olat * 0.5).tan().powf(sn);

        Self {
            sn,
            sf,
            ro,
            grid_units,
        }
    }

    /// Conic radius at a latitude given in radians
    fn radius_at(&self, lat_rad: f64) -> f64 {
        self.grid_units * self.sf / (FRAC_PI_4 + lat_rad * 0.5).tan().powf(self.sn)
    }
}

/// Wrap a longitude difference (radians) into `(-π, π]`
///
/// Inputs are bounded degree values, so a single wrap is enough.
#[must_use]
pub fn normalize_longitude_delta(delta: f64) -> f64 {
    if delta > PI {
        delta - 2.0 * PI
    } else if delta <= -PI {
        delta + 2.0 * PI
    } else {
        delta
    }
}

#[allow(clippy::cast_possible_truncation)]
fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// Convert latitude/longitude (degrees) to KMA grid indices `(nx, ny)`
#[must_use]
pub fn latlon_to_grid(lat: f64, lon: f64) -> (i32, i32) {
    ProjectionConstants::KMA.to_grid(lat, lon)
}

/// Convert KMA grid indices to latitude/longitude (degrees)
#[must_use]
pub fn grid_to_latlon(nx: i32, ny: i32) -> (f64, f64) {
    ProjectionConstants::KMA.to_geo(nx, ny)
}
