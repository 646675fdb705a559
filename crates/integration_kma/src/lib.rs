//! KMA weather integration
//!
//! Client for the Korea Meteorological Administration services published on
//! data.go.kr (village forecast, mid-term forecast, weather warnings), plus
//! plain-text renderers for their responses. All calls need a service key.

pub mod client;
pub mod config;
pub mod error;
mod models;
pub mod render;

pub use client::{KmaApiClient, KmaClient};
pub use config::KmaConfig;
pub use error::KmaError;
pub use models::{
    ForecastRecord, ForecastSlot, KmaResponse, MidtermRecord, ObservationRecord,
    PrecipitationType, SkyCondition, WarningRecord, wind_direction,
};
