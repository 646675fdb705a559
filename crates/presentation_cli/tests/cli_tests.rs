//! Integration tests for the kma-weather binary
//!
//! Only offline paths are exercised: grid conversion, region listing and
//! the errors raised before any request is sent.

use std::process::{Command, Output};

fn kma_weather(args: &[&str]) -> Output {
    // Run in an empty directory so no kma-weather.toml is picked up
    let dir = tempfile::tempdir().expect("create temp dir");
    Command::new(env!("CARGO_BIN_EXE_kma-weather"))
        .args(args)
        .current_dir(dir.path())
        .env_remove("KMA_SERVICE_KEY")
        .output()
        .expect("run kma-weather")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn grid_converts_seoul() {
    let output = kma_weather(&["grid", "37.5665", "126.978"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "Lat/Lon (37.5665, 126.978) -> Grid: (60, 127)\n\
         Grid (60, 127) -> Lat/Lon: (37.5799, 126.9894)\n"
    );
}

#[test]
fn grid_converts_busan_and_jeju() {
    let busan = stdout(&kma_weather(&["grid", "35.1796", "129.0756"]));
    assert!(busan.contains("-> Grid: (98, 76)"), "{busan}");

    let jeju = stdout(&kma_weather(&["grid", "33.4996", "126.5312"]));
    assert!(jeju.contains("-> Grid: (53, 38)"), "{jeju}");
}

#[test]
fn list_regions_needs_no_key() {
    let output = kma_weather(&["midterm", "--list-regions"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    assert!(text.starts_with("Available Regions:\n"));
    assert!(text.contains("제주"));
    assert!(text.contains("→ 184"));
}

#[test]
fn list_regions_wins_over_region() {
    let output = kma_weather(&["midterm", "--region", "서울", "--list-regions"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).starts_with("Available Regions:\n"));
}

#[test]
fn invalid_days_are_reported() {
    for days in ["0", "-2", "tomorrow"] {
        let output = kma_weather(&[
            "forecast",
            "shortterm",
            "--lat",
            "37.5",
            "--lon",
            "127",
            "--days",
            days,
        ]);
        assert_eq!(output.status.code(), Some(1), "--days {days}");
        assert!(stdout(&output).is_empty());
        assert_eq!(
            stderr(&output),
            "Error: --days must be 'all' or a positive integer\n"
        );
    }
}

#[test]
fn missing_service_key_is_reported() {
    let output = kma_weather(&["warnings"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(
        stderr(&output).starts_with("Error: KMA API service key not found."),
        "stderr: {}",
        stderr(&output)
    );
}

#[test]
fn missing_config_file_is_an_error() {
    let output = kma_weather(&["--config", "does-not-exist.toml", "warnings"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("Error: "));
}

#[test]
fn invalid_coordinates_fail_before_request() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let output = Command::new(env!("CARGO_BIN_EXE_kma-weather"))
        .args(["forecast", "current", "--lat", "95", "--lon", "126.978"])
        .current_dir(dir.path())
        .env("KMA_SERVICE_KEY", "test-key")
        .env("KMA_FORECAST_BASE_URL", "http://127.0.0.1:9")
        .output()
        .expect("run kma-weather");

    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr(&output).contains("Invalid coordinates"),
        "stderr: {}",
        stderr(&output)
    );
}
