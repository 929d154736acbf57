// src/region.rs
//! The six New England states the scraper covers.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ScrapeError;
use crate::trail::Coordinates;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Region {
    CT,
    MA,
    ME,
    NH,
    RI,
    VT,
}

impl Region {
    /// Processing order for a full run.
    pub const ALL: [Region; 6] = [
        Region::CT,
        Region::MA,
        Region::ME,
        Region::NH,
        Region::RI,
        Region::VT,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Region::CT => "CT",
            Region::MA => "MA",
            Region::ME => "ME",
            Region::NH => "NH",
            Region::RI => "RI",
            Region::VT => "VT",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Region::CT => "Connecticut",
            Region::MA => "Massachusetts",
            Region::ME => "Maine",
            Region::NH => "New Hampshire",
            Region::RI => "Rhode Island",
            Region::VT => "Vermont",
        }
    }

    /// Reference point used when a trail page publishes no coordinates.
    pub fn center(self) -> Coordinates {
        let (lat, lng) = match self {
            Region::CT => (41.6032, -73.0877),
            Region::MA => (42.4072, -71.3824),
            Region::ME => (45.2538, -69.4455),
            Region::NH => (43.1939, -71.5724),
            Region::RI => (41.5801, -71.4774),
            Region::VT => (44.5588, -72.5778),
        };
        Coordinates { lat, lng }
    }

    /// Site path of the state's listing page, e.g. `/state/vt-trails/`.
    pub fn listing_path(self) -> String {
        format!("/state/{}-trails/", self.code().to_ascii_lowercase())
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Region {
    type Err = ScrapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Region::ALL
            .into_iter()
            .find(|r| r.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| ScrapeError::UnknownRegion(code.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!("vt".parse::<Region>().unwrap(), Region::VT);
        assert_eq!(" NH ".parse::<Region>().unwrap(), Region::NH);
        assert!("NY".parse::<Region>().is_err());
    }

    #[test]
    fn listing_path_uses_lowercase_code() {
        assert_eq!(Region::RI.listing_path(), "/state/ri-trails/");
    }

    #[test]
    fn vermont_center() {
        let c = Region::VT.center();
        assert_eq!((c.lat, c.lng), (44.5588, -72.5778));
    }

    #[test]
    fn serializes_as_bare_code() {
        assert_eq!(serde_json::to_string(&Region::MA).unwrap(), "\"MA\"");
    }
}
