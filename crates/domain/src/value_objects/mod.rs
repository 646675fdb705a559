//! Value Objects - Immutable, identity-less domain primitives

mod day_selection;
mod geo_coordinate;
mod grid_coordinate;
mod midterm_station;

pub use day_selection::{DaySelection, day_label};
pub use geo_coordinate::GeoCoordinate;
pub use grid_coordinate::GridCoordinate;
pub use midterm_station::MidtermStation;
