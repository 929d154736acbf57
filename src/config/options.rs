// src/config/options.rs
use std::{path::PathBuf, time::Duration};

use super::consts::*;
use crate::region::Region;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub max_attempts: u32,
    pub retry_delay: Duration,
    /// Per-request network timeout, handed to the HTTP client.
    pub timeout: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            retry_delay: Duration::from_millis(RETRY_DELAY_MS),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    /// Scheme + host, no trailing slash needed.
    pub base_url: String,
    pub regions: Vec<Region>,
    pub fetch: FetchOptions,
    pub item_delay: Duration,
    pub region_delay: Duration,
    pub out_path: PathBuf,
    pub min_trails: usize,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            regions: Region::ALL.to_vec(),
            fetch: FetchOptions::default(),
            item_delay: Duration::from_millis(ITEM_DELAY_MS),
            region_delay: Duration::from_millis(REGION_DELAY_MS),
            out_path: PathBuf::from(DEFAULT_OUT_PATH),
            min_trails: MIN_TRAILS,
        }
    }
}

impl ScrapeOptions {
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub fn listing_url(&self, region: Region) -> String {
        format!("{}{}", self.base(), region.listing_path())
    }

    /// No politeness sleeps and no retry backoff. Used against local mock servers.
    pub fn without_delays(mut self) -> Self {
        self.item_delay = Duration::ZERO;
        self.region_delay = Duration::ZERO;
        self.fetch.retry_delay = Duration::ZERO;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GpxOptions {
    pub input: PathBuf,
    pub out_dir: PathBuf,
}

impl Default for GpxOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_OUT_PATH),
            out_dir: PathBuf::from(DEFAULT_GPX_DIR),
        }
    }
}

/// Charging-station collection: one feed request, two output files.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StationOptions {
    pub api_url: String,
    pub api_key: String,
    pub regions: Vec<Region>,
    pub fetch: FetchOptions,
    /// E-bike friendly subset.
    pub out_path: PathBuf,
    /// Every station in the feed.
    pub all_out_path: PathBuf,
}

impl Default for StationOptions {
    fn default() -> Self {
        Self {
            api_url: NREL_API_URL.to_string(),
            api_key: NREL_DEMO_KEY.to_string(),
            regions: Region::ALL.to_vec(),
            fetch: FetchOptions {
                timeout: Duration::from_secs(STATIONS_TIMEOUT_SECS),
                ..FetchOptions::default()
            },
            out_path: PathBuf::from(STATIONS_OUT_PATH),
            all_out_path: PathBuf::from(STATIONS_ALL_OUT_PATH),
        }
    }
}
