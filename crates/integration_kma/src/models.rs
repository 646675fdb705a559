//! KMA data models
//!
//! Typed records for each data.go.kr product plus the response envelope
//! shared by all of them:
//!
//! ```json
//! {"response": {"header": {"resultCode": "00", "resultMsg": "NORMAL_SERVICE"},
//!               "body": {"dataType": "JSON", "items": {"item": [...]},
//!                        "pageNo": 1, "numOfRows": 300, "totalCount": 812}}}
//! ```

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result code for a successful call
pub(crate) const RESULT_OK: &str = "00";
/// Result code returned when the query matched no data
pub(crate) const RESULT_NO_DATA: &str = "03";

/// A validated KMA response
///
/// `raw` keeps the JSON exactly as received (with the items of every page
/// merged into page one) for `--json` output; `items` holds the typed
/// records.
#[derive(Debug, Clone)]
pub struct KmaResponse<T> {
    /// Raw response document
    pub raw: Value,
    /// `totalCount` reported by the service
    pub total_count: u32,
    /// Parsed records from all pages
    pub items: Vec<T>,
}

/// Ultra-short-term observation record (`getUltraSrtNcst`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservationRecord {
    /// Issue date (`YYYYMMDD`)
    #[serde(deserialize_with = "lenient::string")]
    pub base_date: String,
    /// Issue time (`HHMM`)
    #[serde(deserialize_with = "lenient::string")]
    pub base_time: String,
    /// Category code (T1H, REH, RN1, ...)
    pub category: String,
    /// Grid X
    #[serde(deserialize_with = "lenient::i32")]
    pub nx: i32,
    /// Grid Y
    #[serde(deserialize_with = "lenient::i32")]
    pub ny: i32,
    /// Observed value
    #[serde(deserialize_with = "lenient::string")]
    pub obsr_value: String,
}

/// Forecast slot record (`getUltraSrtFcst`, `getVilageFcst`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastRecord {
    /// Issue date (`YYYYMMDD`)
    #[serde(deserialize_with = "lenient::string")]
    pub base_date: String,
    /// Issue time (`HHMM`)
    #[serde(deserialize_with = "lenient::string")]
    pub base_time: String,
    /// Category code (TMP, SKY, PTY, POP, ...)
    pub category: String,
    /// Forecast date (`YYYYMMDD`)
    #[serde(deserialize_with = "lenient::string")]
    pub fcst_date: String,
    /// Forecast time (`HHMM`)
    #[serde(deserialize_with = "lenient::string")]
    pub fcst_time: String,
    /// Forecast value
    #[serde(deserialize_with = "lenient::string")]
    pub fcst_value: String,
    /// Grid X
    #[serde(deserialize_with = "lenient::i32")]
    pub nx: i32,
    /// Grid Y
    #[serde(deserialize_with = "lenient::i32")]
    pub ny: i32,
}

/// Mid-term text forecast record (`getMidFcst`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MidtermRecord {
    /// Issue time (`YYYYMMDDHHMM`)
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub tm_fc: Option<String>,
    /// Forecast narrative
    #[serde(default)]
    pub wf_sv: Option<String>,
}

/// Nationwide warning status record (`getPwnStatus`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarningRecord {
    /// Announcement time (`YYYYMMDDHHMM`, sent as a number)
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub tm_fc: Option<String>,
    /// Effective time (`YYYYMMDDHHMM`, sent as a number)
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub tm_ef: Option<String>,
    /// Warnings currently in effect
    #[serde(default)]
    pub t6: Option<String>,
    /// Preliminary warnings
    #[serde(default)]
    pub t7: Option<String>,
    /// Other notices
    #[serde(default)]
    pub other: Option<String>,
}

/// All categories forecast for one date and time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastSlot {
    /// Forecast date (`YYYYMMDD`)
    pub date: String,
    /// Forecast time (`HHMM`)
    pub time: String,
    values: HashMap<String, String>,
}

impl ForecastSlot {
    /// Value of a category in this slot
    #[must_use]
    pub fn get(&self, category: &str) -> Option<&str> {
        self.values.get(category).map(String::as_str)
    }

    /// Group forecast records into slots ordered by date and time
    #[must_use]
    pub fn group(records: &[ForecastRecord]) -> Vec<Self> {
        let mut slots: BTreeMap<(&str, &str), HashMap<String, String>> = BTreeMap::new();
        for record in records {
            slots
                .entry((record.fcst_date.as_str(), record.fcst_time.as_str()))
                .or_default()
                .insert(record.category.clone(), record.fcst_value.clone());
        }
        slots
            .into_iter()
            .map(|((date, time), values)| Self {
                date: date.to_string(),
                time: time.to_string(),
                values,
            })
            .collect()
    }
}

/// Precipitation type (PTY)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrecipitationType {
    /// 0
    None,
    /// 1
    Rain,
    /// 2
    RainAndSnow,
    /// 3
    Snow,
    /// 4 (short-term only)
    Shower,
    /// 5 (ultra-short only)
    Raindrops,
    /// 6 (ultra-short only)
    RaindropsAndSnowflurries,
    /// 7 (ultra-short only)
    Snowflurries,
    /// Unknown code
    Unknown,
}

impl PrecipitationType {
    /// Parse a PTY code
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "0" => Self::None,
            "1" => Self::Rain,
            "2" => Self::RainAndSnow,
            "3" => Self::Snow,
            "4" => Self::Shower,
            "5" => Self::Raindrops,
            "6" => Self::RaindropsAndSnowflurries,
            "7" => Self::Snowflurries,
            _ => Self::Unknown,
        }
    }

    /// Korean description
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::None => "없음",
            Self::Rain => "비",
            Self::RainAndSnow => "비/눈",
            Self::Snow => "눈",
            Self::Shower => "소나기",
            Self::Raindrops => "빗방울",
            Self::RaindropsAndSnowflurries => "빗방울눈날림",
            Self::Snowflurries => "눈날림",
            Self::Unknown => "알 수 없음",
        }
    }
}

impl std::fmt::Display for PrecipitationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

/// Sky condition (SKY)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkyCondition {
    /// 1
    Clear,
    /// 3
    MostlyCloudy,
    /// 4
    Overcast,
    /// Unknown code
    Unknown,
}

impl SkyCondition {
    /// Parse a SKY code
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "1" => Self::Clear,
            "3" => Self::MostlyCloudy,
            "4" => Self::Overcast,
            _ => Self::Unknown,
        }
    }

    /// Korean description
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Clear => "맑음",
            Self::MostlyCloudy => "구름많음",
            Self::Overcast => "흐림",
            Self::Unknown => "알 수 없음",
        }
    }
}

impl std::fmt::Display for SkyCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

/// Eight-point compass direction for a wind bearing in degrees
///
/// Returns `N/A` when the value is not a finite number.
#[must_use]
pub fn wind_direction(degrees: &str) -> &'static str {
    const DIRECTIONS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

    match degrees.trim().parse::<f64>() {
        Ok(deg) if deg.is_finite() => {
            #[allow(clippy::cast_possible_truncation)]
            let sector = ((deg + 22.5) / 45.0).floor() as i64;
            #[allow(clippy::cast_sign_loss)]
            let index = sector.rem_euclid(8) as usize;
            DIRECTIONS[index]
        },
        _ => "N/A",
    }
}

/// Response envelope common to every data.go.kr endpoint
#[derive(Debug, Deserialize)]
pub(crate) struct ApiEnvelope {
    pub response: ApiResponse,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse {
    pub header: ResponseHeader,
    #[serde(default)]
    pub body: Option<ResponseBody>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResponseHeader {
    #[serde(rename = "resultCode", deserialize_with = "lenient::string")]
    pub result_code: String,
    #[serde(rename = "resultMsg", default)]
    pub result_msg: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResponseBody {
    #[serde(default)]
    pub items: Value,
    #[serde(rename = "totalCount", default, deserialize_with = "lenient::u32")]
    pub total_count: u32,
}

impl ResponseBody {
    /// Records as a list; `item` may be an array, a single object, or absent
    pub fn item_values(&self) -> Vec<Value> {
        match self.items.get("item") {
            Some(Value::Array(list)) => list.clone(),
            Some(item @ Value::Object(_)) => vec![item.clone()],
            _ => Vec::new(),
        }
    }
}

/// Deserializers for fields the service sends as either strings or numbers
pub(crate) mod lenient {
    use serde::{Deserialize, Deserializer, de::Error};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(serde_json::Number),
    }

    impl StringOrNumber {
        fn into_string(self) -> String {
            match self {
                Self::String(s) => s,
                Self::Number(n) => n.to_string(),
            }
        }
    }

    pub fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        StringOrNumber::deserialize(deserializer).map(StringOrNumber::into_string)
    }

    pub fn opt_string<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        Option::<StringOrNumber>::deserialize(deserializer)
            .map(|value| value.map(StringOrNumber::into_string))
    }

    pub fn u32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
        let raw = StringOrNumber::deserialize(deserializer)?.into_string();
        raw.trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("invalid count: {raw}")))
    }

    pub fn i32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
        let raw = StringOrNumber::deserialize(deserializer)?.into_string();
        raw.trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("invalid grid index: {raw}")))
    }
}
