//! KMA release schedule
//!
//! Every KMA product is requested by the time its run was issued, not by the
//! time of the query. These functions pick the most recent run that is
//! already published for a given wall-clock time in Korea Standard Time.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike, Utc};
use chrono_tz::Asia::Seoul;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Short-term runs (hour of day); each is published at HH:10
const SHORT_TERM_RUN_HOURS: [u32; 8] = [2, 5, 8, 11, 14, 17, 20, 23];
const SHORT_TERM_PUBLISH_MINUTE: u32 = 10;

/// Current wall-clock time in Korea Standard Time
#[must_use]
pub fn kst_now() -> NaiveDateTime {
    Utc::now().with_timezone(&Seoul).naive_local()
}

/// Village forecast products keyed by grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForecastKind {
    /// Ultra-short-term observation (초단기실황)
    Current,
    /// Ultra-short-term forecast, 6 hours (초단기예보)
    UltraShort,
    /// Short-term forecast, 3 days (단기예보)
    ShortTerm,
}

impl ForecastKind {
    /// REST operation name under `VilageFcstInfoService_2.0`
    #[must_use]
    pub const fn operation(self) -> &'static str {
        match self {
            Self::Current => "getUltraSrtNcst",
            Self::UltraShort => "getUltraSrtFcst",
            Self::ShortTerm => "getVilageFcst",
        }
    }

    /// Short name used on the command line and as JSON key
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::UltraShort => "ultrashort",
            Self::ShortTerm => "shortterm",
        }
    }

    /// Latest published run at `now` (KST)
    ///
    /// - current: hourly, published at :40, `base_time` HH00
    /// - ultra-short: hourly, published at :45, `base_time` HH30
    /// - short-term: eight runs a day, published at HH:10
    #[must_use]
    pub fn base_time_at(self, now: NaiveDateTime) -> BaseTime {
        match self {
            Self::Current => {
                let run = if now.minute() < 40 {
                    now - TimeDelta::hours(1)
                } else {
                    now
                };
                BaseTime::new(run.date(), run.hour(), 0)
            },
            Self::UltraShort => {
                let run = if now.minute() < 45 {
                    now - TimeDelta::hours(1)
                } else {
                    now
                };
                BaseTime::new(run.date(), run.hour(), 30)
            },
            Self::ShortTerm => {
                let (hour, minute) = (now.hour(), now.minute());
                SHORT_TERM_RUN_HOURS
                    .iter()
                    .rev()
                    .find(|&&run| hour > run || (hour == run && minute >= SHORT_TERM_PUBLISH_MINUTE))
                    .map_or_else(
                        || BaseTime::new((now - TimeDelta::days(1)).date(), 23, 0),
                        |&run| BaseTime::new(now.date(), run, 0),
                    )
            },
        }
    }
}

impl fmt::Display for ForecastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Issue time of a forecast run (`base_date` + `base_time`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BaseTime {
    date: NaiveDate,
    hour: u32,
    minute: u32,
}

impl BaseTime {
    /// Create a base time; hour and minute are taken as given
    #[must_use]
    pub const fn new(date: NaiveDate, hour: u32, minute: u32) -> Self {
        Self { date, hour, minute }
    }

    /// Issue date
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// `base_date` query value (`YYYYMMDD`)
    #[must_use]
    pub fn base_date(&self) -> String {
        self.date.format("%Y%m%d").to_string()
    }

    /// `base_time` query value (`HHMM`)
    #[must_use]
    pub fn base_time(&self) -> String {
        format!("{:02}{:02}", self.hour, self.minute)
    }
}

impl fmt::Display for BaseTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.base_date(), self.base_time())
    }
}

/// Latest mid-term issue (06:00 or 18:00 KST) at `now`
#[must_use]
pub fn midterm_issue_time(now: NaiveDateTime) -> NaiveDateTime {
    let (date, hour) = match now.hour() {
        0..6 => ((now - TimeDelta::days(1)).date(), 18),
        6..18 => (now.date(), 6),
        _ => (now.date(), 18),
    };
    date.and_time(NaiveTime::MIN) + TimeDelta::hours(hour)
}

/// `tmFc` query value (`YYYYMMDDHHMM`)
#[must_use]
pub fn format_tm_fc(issue: NaiveDateTime) -> String {
    issue.format("%Y%m%d%H%M").to_string()
}
