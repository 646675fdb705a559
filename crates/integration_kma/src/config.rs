//! KMA client configuration

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Configuration for the KMA services on data.go.kr
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KmaConfig {
    /// data.go.kr service key (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub service_key: Option<SecretString>,

    /// Village forecast service base URL
    #[serde(default = "default_forecast_base_url")]
    pub forecast_base_url: String,

    /// Mid-term forecast service base URL
    #[serde(default = "default_midterm_base_url")]
    pub midterm_base_url: String,

    /// Weather warning service base URL
    #[serde(default = "default_warning_base_url")]
    pub warning_base_url: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Rows requested per page for village forecasts (default: 300)
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_forecast_base_url() -> String {
    "https://apis.data.go.kr/1360000/VilageFcstInfoService_2.0".to_string()
}

fn default_midterm_base_url() -> String {
    "https://apis.data.go.kr/1360000/MidFcstInfoService".to_string()
}

fn default_warning_base_url() -> String {
    "https://apis.data.go.kr/1360000/WthrWrnInfoService".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

const fn default_page_size() -> u32 {
    300
}

impl Default for KmaConfig {
    fn default() -> Self {
        Self {
            service_key: None,
            forecast_base_url: default_forecast_base_url(),
            midterm_base_url: default_midterm_base_url(),
            warning_base_url: default_warning_base_url(),
            timeout_secs: default_timeout_secs(),
            page_size: default_page_size(),
        }
    }
}

impl KmaConfig {
    /// Set the service key
    #[must_use]
    pub fn with_service_key(mut self, key: impl Into<String>) -> Self {
        self.service_key = Some(SecretString::from(key.into()));
        self
    }

    /// Service key, if one is configured and non-blank
    #[must_use]
    pub fn service_key(&self) -> Option<&str> {
        self.service_key
            .as_ref()
            .map(ExposeSecret::expose_secret)
            .filter(|key| !key.trim().is_empty())
    }
}
