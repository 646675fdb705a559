//! Short-term forecast day selection

use chrono::{NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::errors::DomainError;

/// Which days of a short-term forecast to show
///
/// # Examples
///
/// ```
/// use domain::DaySelection;
///
/// assert_eq!("all".parse::<DaySelection>().unwrap(), DaySelection::All);
/// assert_eq!("2".parse::<DaySelection>().unwrap(), DaySelection::Offset(2));
/// assert!("0".parse::<DaySelection>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DaySelection {
    /// Every day the forecast covers
    All,
    /// A single day, `n` days after today (n ≥ 1)
    Offset(u32),
}

impl DaySelection {
    /// Date selected relative to `today`, or `None` for [`DaySelection::All`]
    #[must_use]
    pub fn target_date(self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            Self::All => None,
            Self::Offset(days) => Some(today + TimeDelta::days(i64::from(days))),
        }
    }
}

impl Default for DaySelection {
    fn default() -> Self {
        Self::Offset(1)
    }
}

impl FromStr for DaySelection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(Self::All);
        }
        match s.trim().parse::<u32>() {
            Ok(days) if days >= 1 => Ok(Self::Offset(days)),
            _ => Err(DomainError::InvalidDaySelection(s.to_string())),
        }
    }
}

impl fmt::Display for DaySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Offset(days) => write!(f, "{days}"),
        }
    }
}

/// Korean label for a day relative to today
#[must_use]
pub fn day_label(days_from_today: i64) -> String {
    match days_from_today {
        0 => "오늘".to_string(),
        1 => "내일".to_string(),
        2 => "모레".to_string(),
        3 => "글피".to_string(),
        n => format!("{n}일 후"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all() {
        assert_eq!("all".parse::<DaySelection>(), Ok(DaySelection::All));
    }

    #[test]
    fn parses_positive_integers() {
        assert_eq!("1".parse::<DaySelection>(), Ok(DaySelection::Offset(1)));
        assert_eq!("3".parse::<DaySelection>(), Ok(DaySelection::Offset(3)));
        assert_eq!(" 4 ".parse::<DaySelection>(), Ok(DaySelection::Offset(4)));
    }

    #[test]
    fn rejects_zero_negative_and_text() {
        for input in ["0", "-1", "tomorrow", "", "1.5", "ALL"] {
            assert!(
                input.parse::<DaySelection>().is_err(),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn default_is_tomorrow() {
        assert_eq!(DaySelection::default(), DaySelection::Offset(1));
    }

    #[test]
    fn target_date_adds_offset() {
        let today = NaiveDate::from_ymd_opt(2026, 2, 28).expect("valid date");
        assert_eq!(
            DaySelection::Offset(1).target_date(today),
            NaiveDate::from_ymd_opt(2026, 3, 1)
        );
        assert_eq!(DaySelection::All.target_date(today), None);
    }

    #[test]
    fn labels() {
        assert_eq!(day_label(0), "오늘");
        assert_eq!(day_label(1), "내일");
        assert_eq!(day_label(2), "모레");
        assert_eq!(day_label(3), "글피");
        assert_eq!(day_label(5), "5일 후");
    }

    #[test]
    fn display_round_trips() {
        assert_eq!(DaySelection::All.to_string(), "all");
        assert_eq!(DaySelection::Offset(2).to_string(), "2");
    }
}
