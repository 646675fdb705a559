//! Mid-term forecast stations
//!
//! `getMidFcst` is keyed by a forecast-office station id (`stnId`). Several
//! regions share one office, e.g. Seoul, Incheon and Gyeonggi all map to 109.

use serde::Serialize;
use std::fmt;

use crate::errors::DomainError;

const STATIONS: [(&str, &str); 18] = [
    ("전국", "108"),
    ("서울", "109"),
    ("경기", "109"),
    ("인천", "109"),
    ("강원", "105"),
    ("충북", "131"),
    ("충남", "133"),
    ("대전", "133"),
    ("세종", "133"),
    ("전북", "146"),
    ("광주", "156"),
    ("전남", "156"),
    ("대구", "143"),
    ("경북", "143"),
    ("부산", "159"),
    ("울산", "159"),
    ("경남", "159"),
    ("제주", "184"),
];

/// A region with its mid-term forecast station id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MidtermStation {
    region: &'static str,
    station_id: &'static str,
}

impl MidtermStation {
    /// Look up a station by Korean region name
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownRegion` if the name is not in the table.
    pub fn find(region: &str) -> Result<Self, DomainError> {
        STATIONS
            .iter()
            .find(|(name, _)| *name == region)
            .map(|&(region, station_id)| Self { region, station_id })
            .ok_or_else(|| DomainError::UnknownRegion(region.to_string()))
    }

    /// All regions, sorted by name
    #[must_use]
    pub fn all() -> Vec<Self> {
        let mut stations: Vec<Self> = STATIONS
            .iter()
            .map(|&(region, station_id)| Self { region, station_id })
            .collect();
        stations.sort_by_key(|s| s.region);
        stations
    }

    /// Korean region name
    #[must_use]
    pub const fn region(&self) -> &'static str {
        self.region
    }

    /// `stnId` query value
    #[must_use]
    pub const fn station_id(&self) -> &'static str {
        self.station_id
    }
}

impl fmt::Display for MidtermStation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.region, self.station_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_known_regions() {
        assert_eq!(MidtermStation::find("전국").map(|s| s.station_id()), Ok("108"));
        assert_eq!(MidtermStation::find("서울").map(|s| s.station_id()), Ok("109"));
        assert_eq!(MidtermStation::find("제주").map(|s| s.station_id()), Ok("184"));
    }

    #[test]
    fn shared_offices() {
        for region in ["부산", "울산", "경남"] {
            assert_eq!(
                MidtermStation::find(region).map(|s| s.station_id()),
                Ok("159")
            );
        }
    }

    #[test]
    fn unknown_region_is_error() {
        assert_eq!(
            MidtermStation::find("Seoul"),
            Err(DomainError::UnknownRegion("Seoul".to_string()))
        );
    }

    #[test]
    fn all_is_sorted_and_complete() {
        let all = MidtermStation::all();
        assert_eq!(all.len(), 18);
        assert!(all.windows(2).all(|w| w[0].region() <= w[1].region()));
        assert_eq!(all[0].region(), "강원");
    }

    #[test]
    fn display() {
        let station = MidtermStation::find("강원").expect("known region");
        assert_eq!(station.to_string(), "강원 (105)");
    }
}
