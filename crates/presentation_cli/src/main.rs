//! kma-weather CLI
//!
//! Weather forecasts, mid-term outlooks and warnings from the Korea
//! Meteorological Administration, plus offline grid conversion.

#![allow(clippy::print_stdout, clippy::print_stderr)]

mod commands;
mod config;

use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{ArgGroup, Parser, Subcommand};
use commands::{ForecastRequest, ForecastType};
use domain::{DaySelection, MidtermStation, kst_now};
use integration_kma::KmaApiClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// kma-weather CLI
#[derive(Parser)]
#[command(name = "kma-weather")]
#[command(author, version, about = "Korea Meteorological Administration weather CLI", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (default: ./kma-weather.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Village forecast for a location
    ///
    /// Example: kma-weather forecast brief --lat 37.5665 --lon 126.9780
    Forecast {
        /// Forecast product
        #[arg(value_enum)]
        forecast_type: ForecastType,

        /// Latitude in decimal degrees (e.g. 37.5665)
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        /// Longitude in decimal degrees (e.g. 126.9780)
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,

        /// Print the raw JSON response
        #[arg(long)]
        json: bool,

        /// Rows per API page (default: 300, paginates automatically)
        #[arg(long)]
        rows: Option<u32>,

        /// Days from today for shortterm ('all' or 1 = tomorrow, 2, 3, ...)
        #[arg(long, default_value = "1", allow_negative_numbers = true)]
        days: String,
    },

    /// Mid-term forecast (3-10 days) for a region
    ///
    /// Example: kma-weather midterm --region 서울
    #[command(group(ArgGroup::new("station").args(["region", "stn_id"])))]
    Midterm {
        /// Region name (see --list-regions)
        #[arg(
            long,
            value_parser = MidtermStation::find,
            required_unless_present_any = ["stn_id", "list_regions"]
        )]
        region: Option<MidtermStation>,

        /// Station ID (e.g. 109 for 서울, 경기, 인천)
        #[arg(long)]
        stn_id: Option<String>,

        /// Release time as YYYYMMDDHHMM (default: latest release)
        #[arg(long)]
        tm_fc: Option<String>,

        /// Print the raw JSON response
        #[arg(long)]
        json: bool,

        /// List available regions and exit
        #[arg(long)]
        list_regions: bool,
    },

    /// Weather warnings currently in effect
    Warnings {
        /// Print the raw JSON response
        #[arg(long)]
        json: bool,
    },

    /// Convert latitude/longitude to KMA grid coordinates
    ///
    /// Example: kma-weather grid 37.5665 126.9780
    Grid {
        /// Latitude in decimal degrees
        #[arg(allow_negative_numbers = true)]
        lat: f64,

        /// Longitude in decimal degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Create an API client, applying a page size override
fn build_client(config_file: Option<&Path>, rows: Option<u32>) -> anyhow::Result<KmaApiClient> {
    let mut config = config::load(config_file)?;
    if let Some(rows) = rows {
        config.page_size = rows;
    }
    Ok(KmaApiClient::new(config)?)
}

async fn run(cli: Cli) -> anyhow::Result<String> {
    let config_file = cli.config.as_deref();

    match cli.command {
        Commands::Grid { lat, lon } => Ok(commands::grid(lat, lon)),

        Commands::Forecast {
            forecast_type,
            lat,
            lon,
            json,
            rows,
            days,
        } => {
            // Rejected before the config is read or any request is sent
            let days: DaySelection = days.parse()?;
            let client = build_client(config_file, rows)?;
            let request = ForecastRequest {
                forecast_type,
                latitude: lat,
                longitude: lon,
                days,
                json,
            };
            commands::forecast(&client, request, kst_now()).await
        },

        Commands::Midterm {
            list_regions: true,
            ..
        } => Ok(commands::list_regions()),

        Commands::Midterm {
            region,
            stn_id,
            tm_fc,
            json,
            ..
        } => {
            let station_id = match (region, stn_id) {
                (Some(station), _) => station.station_id().to_string(),
                (None, Some(id)) => id,
                (None, None) => anyhow::bail!("one of --region or --stn-id is required"),
            };
            let client = build_client(config_file, None)?;
            commands::midterm(&client, &station_id, tm_fc.as_deref(), json, kst_now()).await
        },

        Commands::Warnings { json } => {
            let client = build_client(config_file, None)?;
            commands::warnings(&client, json).await
        },
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for --json
    let filter = log_filter_from_verbosity(cli.verbose);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(cli).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}
