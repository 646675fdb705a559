//! Configuration loading
//!
//! Layers, lowest precedence first: built-in defaults, the TOML file,
//! then `KMA_*` environment variables.

use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use integration_kma::KmaConfig;

/// Config file looked up in the working directory when `--config` is absent
const DEFAULT_CONFIG_FILE: &str = "kma-weather";

/// Environment variable prefix (e.g. `KMA_SERVICE_KEY`, `KMA_TIMEOUT_SECS`)
const ENV_PREFIX: &str = "KMA";

/// Load configuration from an optional file and the environment
///
/// An explicit `file` must exist; the default `kma-weather.toml` is
/// optional.
pub fn load(file: Option<&Path>) -> Result<KmaConfig, ConfigError> {
    load_with_env(file, Environment::with_prefix(ENV_PREFIX))
}

fn load_with_env(file: Option<&Path>, env: Environment) -> Result<KmaConfig, ConfigError> {
    let file_source = match file {
        Some(path) => File::from(path).required(true),
        None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };

    Config::builder()
        .add_source(file_source)
        .add_source(env)
        .build()?
        .try_deserialize()
}
