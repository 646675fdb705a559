//! KMA API client
//!
//! HTTP client for the data.go.kr village forecast, mid-term forecast and
//! weather warning services.

use async_trait::async_trait;
use domain::{BaseTime, ForecastKind, GeoCoordinate};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::{
    config::KmaConfig,
    error::KmaError,
    models::{
        ApiEnvelope, ForecastRecord, KmaResponse, MidtermRecord, ObservationRecord, RESULT_NO_DATA,
        RESULT_OK, WarningRecord,
    },
};

/// Mid-term forecast operation
const MIDTERM_OPERATION: &str = "getMidFcst";
/// Nationwide warning status operation
const WARNING_STATUS_OPERATION: &str = "getPwnStatus";
/// Rows requested from the single-page services
const SINGLE_PAGE_ROWS: u32 = 10;
/// Maximum characters of an error body echoed back to the user
const ERROR_BODY_PREVIEW: usize = 200;

/// Client trait for the KMA weather services
#[async_trait]
pub trait KmaClient: Send + Sync {
    /// Current observations (초단기실황) for a location
    async fn fetch_observation(
        &self,
        latitude: f64,
        longitude: f64,
        base: BaseTime,
    ) -> Result<KmaResponse<ObservationRecord>, KmaError>;

    /// Six-hour forecast (초단기예보) for a location
    async fn fetch_ultra_short_forecast(
        &self,
        latitude: f64,
        longitude: f64,
        base: BaseTime,
    ) -> Result<KmaResponse<ForecastRecord>, KmaError>;

    /// Three-day forecast (단기예보) for a location
    async fn fetch_short_term_forecast(
        &self,
        latitude: f64,
        longitude: f64,
        base: BaseTime,
    ) -> Result<KmaResponse<ForecastRecord>, KmaError>;

    /// Mid-term text forecast for a station
    async fn fetch_midterm(
        &self,
        station_id: &str,
        tm_fc: &str,
    ) -> Result<KmaResponse<MidtermRecord>, KmaError>;

    /// Nationwide warning status
    async fn fetch_warning_status(&self) -> Result<KmaResponse<WarningRecord>, KmaError>;
}

/// One page of a response before the records are typed
struct Page {
    raw: Value,
    total_count: u32,
    items: Vec<Value>,
}

/// data.go.kr HTTP client implementation
#[derive(Debug)]
pub struct KmaApiClient {
    client: Client,
    config: KmaConfig,
    service_key: SecretString,
}

impl KmaApiClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns `MissingServiceKey` if no service key is configured, or an
    /// error if the HTTP client cannot be initialized.
    pub fn new(config: KmaConfig) -> Result<Self, KmaError> {
        let service_key = config
            .service_key()
            .map(|key| SecretString::from(key.to_string()))
            .ok_or(KmaError::MissingServiceKey)?;

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| KmaError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config,
            service_key,
        })
    }

    /// Join a service base URL and an operation name
    fn endpoint(base_url: &str, operation: &str) -> String {
        format!("{}/{operation}", base_url.trim_end_matches('/'))
    }

    /// Query parameters identifying a forecast run and grid cell
    fn grid_params(
        latitude: f64,
        longitude: f64,
        base: BaseTime,
    ) -> Result<Vec<(&'static str, String)>, KmaError> {
        let cell = GeoCoordinate::new(latitude, longitude)?.to_grid();
        debug!(nx = cell.nx(), ny = cell.ny(), "Resolved grid cell");

        Ok(vec![
            ("base_date", base.base_date()),
            ("base_time", base.base_time()),
            ("nx", cell.nx().to_string()),
            ("ny", cell.ny().to_string()),
        ])
    }

    /// Request a single page and validate the response header
    async fn request_page(
        &self,
        url: &str,
        params: &[(&'static str, String)],
        rows: u32,
        page_no: u32,
    ) -> Result<Page, KmaError> {
        debug!(url = %url, page = page_no, rows = rows, "Requesting KMA endpoint");

        let response = self
            .client
            .get(url)
            .query(&[("serviceKey", self.service_key.expose_secret())])
            .query(&[
                ("numOfRows", rows.to_string()),
                ("pageNo", page_no.to_string()),
                ("dataType", "JSON".to_string()),
            ])
            .query(params)
            .send()
            .await
            .map_err(|e| KmaError::from_reqwest(e, self.config.timeout_secs))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(KmaError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(KmaError::ServiceUnavailable(format!("HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| KmaError::from_reqwest(e, self.config.timeout_secs))?;

        if !status.is_success() {
            return Err(KmaError::RequestFailed(format!(
                "HTTP {status}: {}",
                preview(&body)
            )));
        }

        let raw: Value = serde_json::from_str(&body).map_err(|e| {
            KmaError::ParseError(format!("{e} (response: {})", preview(&body)))
        })?;

        Self::validate(raw)
    }

    /// Check the result code and pull out the item list
    fn validate(raw: Value) -> Result<Page, KmaError> {
        let envelope =
            ApiEnvelope::deserialize(&raw).map_err(|e| KmaError::ParseError(e.to_string()))?;
        let header = &envelope.response.header;

        match header.result_code.as_str() {
            RESULT_OK => {},
            RESULT_NO_DATA => {
                warn!(message = %header.result_msg, "KMA returned no data");
                return Ok(Page {
                    raw,
                    total_count: 0,
                    items: Vec::new(),
                });
            },
            code => {
                return Err(KmaError::Api {
                    code: code.to_string(),
                    message: if header.result_msg.is_empty() {
                        "Unknown error".to_string()
                    } else {
                        header.result_msg.clone()
                    },
                });
            },
        }

        let (total_count, items) = envelope
            .response
            .body
            .as_ref()
            .map_or((0, Vec::new()), |body| (body.total_count, body.item_values()));

        Ok(Page {
            raw,
            total_count,
            items,
        })
    }

    /// Fetch every page of a village forecast product
    ///
    /// Pages after the first are requested in order; their items are
    /// appended to the first page, in the raw document as well.
    async fn fetch_all_pages<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&'static str, String)],
    ) -> Result<KmaResponse<T>, KmaError> {
        let rows = self.config.page_size.max(1);
        let mut first = self.request_page(url, params, rows, 1).await?;

        if first.total_count > rows {
            let total_pages = first.total_count.div_ceil(rows);
            debug!(total = first.total_count, pages = total_pages, "Paginating");

            for page_no in 2..=total_pages {
                let page = self.request_page(url, params, rows, page_no).await?;
                first.items.extend(page.items);
            }

            if let Some(slot) = first.raw.pointer_mut("/response/body/items") {
                *slot = serde_json::json!({ "item": first.items });
            }
        }

        Self::into_response(first)
    }

    fn into_response<T: DeserializeOwned>(page: Page) -> Result<KmaResponse<T>, KmaError> {
        let items = page
            .items
            .iter()
            .map(T::deserialize)
            .collect::<Result<Vec<T>, _>>()
            .map_err(|e| KmaError::ParseError(format!("Unexpected record: {e}")))?;

        Ok(KmaResponse {
            raw: page.raw,
            total_count: page.total_count,
            items,
        })
    }

    async fn fetch_grid_product<T: DeserializeOwned>(
        &self,
        kind: ForecastKind,
        latitude: f64,
        longitude: f64,
        base: BaseTime,
    ) -> Result<KmaResponse<T>, KmaError> {
        let params = Self::grid_params(latitude, longitude, base)?;
        let url = Self::endpoint(&self.config.forecast_base_url, kind.operation());
        self.fetch_all_pages(&url, &params).await
    }
}

/// First characters of a response body, for error messages
fn preview(body: &str) -> String {
    body.chars().take(ERROR_BODY_PREVIEW).collect()
}

#[async_trait]
impl KmaClient for KmaApiClient {
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude, base = %base))]
    async fn fetch_observation(
        &self,
        latitude: f64,
        longitude: f64,
        base: BaseTime,
    ) -> Result<KmaResponse<ObservationRecord>, KmaError> {
        self.fetch_grid_product(ForecastKind::Current, latitude, longitude, base)
            .await
    }

    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude, base = %base))]
    async fn fetch_ultra_short_forecast(
        &self,
        latitude: f64,
        longitude: f64,
        base: BaseTime,
    ) -> Result<KmaResponse<ForecastRecord>, KmaError> {
        self.fetch_grid_product(ForecastKind::UltraShort, latitude, longitude, base)
            .await
    }

    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude, base = %base))]
    async fn fetch_short_term_forecast(
        &self,
        latitude: f64,
        longitude: f64,
        base: BaseTime,
    ) -> Result<KmaResponse<ForecastRecord>, KmaError> {
        self.fetch_grid_product(ForecastKind::ShortTerm, latitude, longitude, base)
            .await
    }

    #[instrument(skip(self))]
    async fn fetch_midterm(
        &self,
        station_id: &str,
        tm_fc: &str,
    ) -> Result<KmaResponse<MidtermRecord>, KmaError> {
        let url = Self::endpoint(&self.config.midterm_base_url, MIDTERM_OPERATION);
        let params = [
            ("stnId", station_id.to_string()),
            ("tmFc", tm_fc.to_string()),
        ];
        let page = self.request_page(&url, &params, SINGLE_PAGE_ROWS, 1).await?;
        Self::into_response(page)
    }

    #[instrument(skip(self))]
    async fn fetch_warning_status(&self) -> Result<KmaResponse<WarningRecord>, KmaError> {
        let url = Self::endpoint(&self.config.warning_base_url, WARNING_STATUS_OPERATION);
        let page = self.request_page(&url, &[], SINGLE_PAGE_ROWS, 1).await?;
        Self::into_response(page)
    }
}
