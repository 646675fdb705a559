//! Command implementations
//!
//! Each command returns the text to print so it can be tested without a
//! terminal or network.

use chrono::NaiveDateTime;
use clap::ValueEnum;
use domain::{
    DaySelection, ForecastKind, MidtermStation, format_tm_fc, grid_to_latlon, latlon_to_grid,
    midterm_issue_time,
};
use integration_kma::{KmaClient, render};
use serde_json::Value;
use tracing::info;

/// Forecast products selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ForecastType {
    /// Current observations (초단기실황)
    Current,
    /// Six-hour forecast (초단기예보)
    Ultrashort,
    /// Three-day forecast (단기예보)
    Shortterm,
    /// Current observations and the six-hour forecast
    Brief,
    /// All three products
    All,
}

impl ForecastType {
    /// Products fetched, in output order
    #[must_use]
    pub const fn kinds(self) -> &'static [ForecastKind] {
        match self {
            Self::Current => &[ForecastKind::Current],
            Self::Ultrashort => &[ForecastKind::UltraShort],
            Self::Shortterm => &[ForecastKind::ShortTerm],
            Self::Brief => &[ForecastKind::Current, ForecastKind::UltraShort],
            Self::All => &[
                ForecastKind::Current,
                ForecastKind::UltraShort,
                ForecastKind::ShortTerm,
            ],
        }
    }
}

/// Parameters of the `forecast` command
#[derive(Debug, Clone, Copy)]
pub struct ForecastRequest {
    pub forecast_type: ForecastType,
    pub latitude: f64,
    pub longitude: f64,
    pub days: DaySelection,
    pub json: bool,
}

/// Fetch and render one or more village forecast products
///
/// Products are requested one after another. With `--json` a single
/// product prints its raw response; several print an object keyed by
/// product name.
pub async fn forecast(
    client: &dyn KmaClient,
    request: ForecastRequest,
    now: NaiveDateTime,
) -> anyhow::Result<String> {
    let ForecastRequest {
        forecast_type,
        latitude,
        longitude,
        days,
        json,
    } = request;

    let mut sections = Vec::new();
    let mut raw = serde_json::Map::new();

    for &kind in forecast_type.kinds() {
        let base = kind.base_time_at(now);
        info!(kind = %kind, base = %base, "Fetching forecast");

        let (text, document) = match kind {
            ForecastKind::Current => {
                let response = client.fetch_observation(latitude, longitude, base).await?;
                (render::render_current(&response.items), response.raw)
            },
            ForecastKind::UltraShort => {
                let response = client
                    .fetch_ultra_short_forecast(latitude, longitude, base)
                    .await?;
                (render::render_ultra_short(&response.items), response.raw)
            },
            ForecastKind::ShortTerm => {
                let response = client
                    .fetch_short_term_forecast(latitude, longitude, base)
                    .await?;
                (
                    render::render_short_term(&response.items, days, now.date()),
                    response.raw,
                )
            },
        };

        sections.push(text);
        raw.insert(kind.name().to_string(), document);
    }

    if !json {
        return Ok(sections.join("\n\n"));
    }

    let document = if raw.len() == 1 {
        raw.into_iter()
            .next()
            .map_or(Value::Null, |(_, document)| document)
    } else {
        Value::Object(raw)
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

/// Fetch and render a mid-term forecast
///
/// Without `tm_fc` the most recent issue time is used.
pub async fn midterm(
    client: &dyn KmaClient,
    station_id: &str,
    tm_fc: Option<&str>,
    json: bool,
    now: NaiveDateTime,
) -> anyhow::Result<String> {
    let tm_fc = tm_fc.map_or_else(|| format_tm_fc(midterm_issue_time(now)), str::to_string);
    info!(station = station_id, tm_fc = %tm_fc, "Fetching mid-term forecast");

    let response = client.fetch_midterm(station_id, &tm_fc).await?;
    if json {
        Ok(serde_json::to_string_pretty(&response.raw)?)
    } else {
        Ok(render::render_midterm(&response.items))
    }
}

/// Fetch and render the nationwide warning status
pub async fn warnings(client: &dyn KmaClient, json: bool) -> anyhow::Result<String> {
    let response = client.fetch_warning_status().await?;
    if json {
        Ok(serde_json::to_string_pretty(&response.raw)?)
    } else {
        Ok(render::render_warnings(&response.items))
    }
}

/// Table of mid-term regions and station ids
#[must_use]
pub fn list_regions() -> String {
    let mut out = String::from("Available Regions:\n");
    out.push_str(&"=".repeat(50));
    for station in MidtermStation::all() {
        out.push_str(&format!(
            "\n  {:10} → {}",
            station.region(),
            station.station_id()
        ));
    }
    out
}

/// Forward conversion and the cell centre it maps back to
#[must_use]
pub fn grid(latitude: f64, longitude: f64) -> String {
    let (nx, ny) = latlon_to_grid(latitude, longitude);
    let (lat_back, lon_back) = grid_to_latlon(nx, ny);
    format!(
        "Lat/Lon ({latitude:?}, {longitude:?}) -> Grid: ({nx}, {ny})\n\
         Grid ({nx}, {ny}) -> Lat/Lon: ({lat_back:.4}, {lon_back:.4})"
    )
}
