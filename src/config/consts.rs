// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://www.traillink.com";
pub const USER_AGENT: &str = concat!(
    "trail_scrape/",
    env!("CARGO_PKG_VERSION"),
    " (New England trail map data collector; polite single-connection crawler)"
);
pub const ACCEPT_HTML: &str = "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8";
pub const REQUEST_TIMEOUT_SECS: u64 = 20;
pub const MAX_ATTEMPTS: u32 = 3;
pub const RETRY_DELAY_MS: u64 = 2_000;

// Politeness
pub const ITEM_DELAY_MS: u64 = 1_000; // before every trail page
pub const REGION_DELAY_MS: u64 = 3_000; // between states

// Extraction
pub const DESCRIPTION_MAX_CHARS: usize = 500;

// Coordinate fallback: uniform offset in degrees, per axis
pub const JITTER_DEGREES: f64 = 0.15;

// Output
pub const DEFAULT_OUT_PATH: &str = "data/trails.json";
pub const DEFAULT_GPX_DIR: &str = "gpx";
pub const SOURCE_LABEL: &str = "TrailLink";
pub const PROVENANCE_NOTE: &str = "Trail metadata scraped from TrailLink.com state listings. \
     Trails without published coordinates are placed near their state's center with a small random offset.";

// Charging stations (NREL Alternative Fuel Data Center)
pub const NREL_API_URL: &str = "https://developer.nrel.gov/api/alt-fuel-stations/v1.json";
pub const NREL_DEMO_KEY: &str = "DEMO_KEY"; // public, rate-limited
pub const STATIONS_TIMEOUT_SECS: u64 = 60; // the full NE feed is several MB
pub const STATIONS_OUT_PATH: &str = "data/charging_stations.json";
pub const STATIONS_ALL_OUT_PATH: &str = "data/charging_stations_all.json";
pub const STATIONS_SOURCE_LABEL: &str = "NREL Alternative Fuel Data Center";
pub const STATIONS_SOURCE_URL: &str = "https://afdc.energy.gov/stations/";

// Sanity
pub const MIN_TRAILS: usize = 10;
