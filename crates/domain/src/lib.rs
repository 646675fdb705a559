//! Domain layer for kma-weather
//!
//! Contains the KMA grid projection, the forecast release schedule,
//! value objects and domain errors. This layer performs no I/O.

pub mod errors;
pub mod grid;
pub mod release;
pub mod value_objects;

pub use errors::DomainError;
pub use grid::{LccParameters, ProjectionConstants, grid_to_latlon, latlon_to_grid};
pub use release::{BaseTime, ForecastKind, format_tm_fc, kst_now, midterm_issue_time};
pub use value_objects::*;
