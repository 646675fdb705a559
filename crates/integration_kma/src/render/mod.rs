//! Plain-text rendering of KMA responses
//!
//! Every renderer returns lines joined by `\n` without a trailing newline.

mod current;
mod forecast;
mod midterm;
mod warning;

pub use current::render_current;
pub use forecast::{render_short_term, render_ultra_short};
pub use midterm::render_midterm;
pub use warning::render_warnings;

/// Output for an empty item list
pub const NO_DATA: &str = "No data available";

/// Values the service uses for "no precipitation"
const NO_PRECIPITATION: [&str; 2] = ["0", "강수없음"];

fn is_no_precipitation(value: &str) -> bool {
    NO_PRECIPITATION.contains(&value)
}

/// Append `mm` unless the value already carries a unit
fn millimetres(value: &str) -> String {
    if value.trim().parse::<f64>().is_ok() {
        format!("{value}mm")
    } else {
        value.to_string()
    }
}

/// `HHMM` as `HH:MM`
fn hhmm(time: &str) -> String {
    format!(
        "{}:{}",
        time.get(..2).unwrap_or(time),
        time.get(2..).unwrap_or_default()
    )
}

/// `YYYYMMDD` as `YYYY-MM-DD`
fn ymd(date: &str) -> String {
    match (date.get(..4), date.get(4..6), date.get(6..8)) {
        (Some(y), Some(m), Some(d)) => format!("{y}-{m}-{d}"),
        _ => date.to_string(),
    }
}

/// `YYYYMMDDHHMM` as `YYYY-MM-DD HH:MM`
fn ymd_hm(stamp: &str) -> String {
    match (stamp.get(..8), stamp.get(8..12)) {
        (Some(date), Some(time)) => format!("{} {}", ymd(date), hhmm(time)),
        _ => stamp.to_string(),
    }
}
