// src/stations.rs
//! Public EV charging stations in the covered states, from the NREL
//! alt-fuel-stations feed, reshaped for the map front end.
//!
//! Two files are written: every station, and the subset an e-bike rider can
//! plug into (a NEMA wall outlet, or a J1772 Level 2 port with an adapter).

use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::consts::{STATIONS_SOURCE_LABEL, STATIONS_SOURCE_URL};
use crate::config::options::StationOptions;
use crate::core::Fetcher;
use crate::error::ScrapeError;
use crate::file::write_json;

/* ---------- feed ---------- */

/// The parts of an NREL response we read. Missing or null fields fall back to defaults.
#[derive(Debug, Default, Deserialize)]
pub struct Feed {
    #[serde(default)]
    pub total_results: Option<u64>,
    #[serde(default)]
    pub fuel_stations: Vec<FeedStation>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FeedStation {
    pub id: u64,
    pub station_name: Option<String>,
    pub street_address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub station_phone: Option<String>,
    pub access_days_time: Option<String>,
    pub ev_pricing: Option<String>,
    pub ev_network: Option<String>,
    pub ev_connector_types: Option<Vec<String>>,
    pub ev_level1_evse_num: Option<u32>,
    pub ev_level2_evse_num: Option<u32>,
    pub ev_dc_fast_num: Option<u32>,
    pub facility_type: Option<String>,
    pub date_last_confirmed: Option<String>,
}

/* ---------- output ---------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ChargerType {
    #[serde(rename = "NEMA")]
    Nema,
    J1772,
    Other,
}

impl ChargerType {
    /// NEMA outlets win over J1772 when a station has both.
    pub fn classify(connectors: &[String]) -> Self {
        if connectors.iter().any(|c| c.starts_with("NEMA")) {
            ChargerType::Nema
        } else if connectors.iter().any(|c| c == "J1772") {
            ChargerType::J1772
        } else {
            ChargerType::Other
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ChargerType::Nema => "🔌",
            ChargerType::J1772 => "⚡",
            ChargerType::Other => "🔋",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    pub id: u64,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub phone: Option<String>,
    pub hours: String,
    pub pricing: String,
    pub network: String,
    pub connectors: Vec<String>,
    pub charger_type: ChargerType,
    pub icon: String,
    pub level1_count: u32,
    pub level2_count: u32,
    pub dc_fast_count: u32,
    pub facility_type: String,
    pub last_confirmed: String,
}

impl Station {
    /// J1772 Combo is a DC fast connector and does not count.
    pub fn is_ebike_friendly(&self) -> bool {
        self.charger_type != ChargerType::Other
    }
}

impl From<FeedStation> for Station {
    fn from(raw: FeedStation) -> Self {
        let connectors = raw.ev_connector_types.unwrap_or_default();
        let charger_type = ChargerType::classify(&connectors);
        Self {
            id: raw.id,
            name: or_label(raw.station_name, "Unknown"),
            address: raw.street_address.unwrap_or_default(),
            city: raw.city.unwrap_or_default(),
            state: raw.state.unwrap_or_default(),
            zip: raw.zip.unwrap_or_default(),
            lat: raw.latitude,
            lng: raw.longitude,
            phone: raw.station_phone.filter(|p| !p.trim().is_empty()),
            hours: raw.access_days_time.unwrap_or_default(),
            pricing: or_label(raw.ev_pricing, "Unknown"),
            network: or_label(raw.ev_network, "Non-Networked"),
            connectors,
            charger_type,
            icon: charger_type.icon().to_string(),
            level1_count: raw.ev_level1_evse_num.unwrap_or(0),
            level2_count: raw.ev_level2_evse_num.unwrap_or(0),
            dc_fast_count: raw.ev_dc_fast_num.unwrap_or(0),
            facility_type: raw.facility_type.unwrap_or_default(),
            last_confirmed: raw.date_last_confirmed.unwrap_or_default(),
        }
    }
}

fn or_label(value: Option<String>, label: &str) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| label.to_string())
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationMetadata {
    pub last_updated: DateTime<Utc>,
    pub source: String,
    pub source_url: String,
    pub total_stations: usize,
    pub by_state: BTreeMap<String, usize>,
    pub by_type: BTreeMap<ChargerType, usize>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StationDataset {
    pub stations: Vec<Station>,
    pub metadata: StationMetadata,
}

impl StationDataset {
    pub fn new(stations: Vec<Station>, last_updated: DateTime<Utc>) -> Self {
        let mut by_state = BTreeMap::new();
        let mut by_type = BTreeMap::new();
        for s in &stations {
            let state = if s.state.is_empty() { "Unknown" } else { s.state.as_str() };
            *by_state.entry(state.to_string()).or_insert(0) += 1;
            *by_type.entry(s.charger_type).or_insert(0) += 1;
        }
        let metadata = StationMetadata {
            last_updated,
            source: STATIONS_SOURCE_LABEL.to_string(),
            source_url: STATIONS_SOURCE_URL.to_string(),
            total_stations: stations.len(),
            by_state,
            by_type,
        };
        Self { stations, metadata }
    }

    pub fn ebike_friendly(&self) -> Self {
        let stations = self.stations.iter().filter(|s| s.is_ebike_friendly()).cloned().collect();
        Self::new(stations, self.metadata.last_updated)
    }
}

/* ---------- run ---------- */

#[derive(Debug)]
pub struct StationSummary {
    pub out_path: PathBuf,
    pub all_out_path: PathBuf,
    pub total_stations: usize,
    pub ebike_friendly: usize,
}

/// Fetch the feed once and write both station files.
pub async fn run(opts: &StationOptions) -> Result<StationSummary, ScrapeError> {
    let fetcher = Fetcher::new(&opts.fetch)?;

    let states: Vec<&str> = opts.regions.iter().map(|r| r.code()).collect();
    let states = states.join(",");
    let query = [
        ("api_key", opts.api_key.as_str()),
        ("status", "E"),
        ("fuel_type", "ELEC"),
        ("state", states.as_str()),
        ("access", "public"),
        ("limit", "all"),
    ];

    let body = fetcher
        .fetch_query(&opts.api_url, &query)
        .await
        .ok_or_else(|| ScrapeError::FeedUnavailable { url: opts.api_url.clone() })?;
    let feed: Feed = serde_json::from_str(&body)?;
    info!(
        reported = ?feed.total_results,
        received = feed.fuel_stations.len(),
        states = %states,
        "station feed received"
    );

    let stations: Vec<Station> = feed.fuel_stations.into_iter().map(Station::from).collect();
    let all = StationDataset::new(stations, Utc::now());
    let friendly = all.ebike_friendly();

    write_json(&opts.all_out_path, &all)?;
    write_json(&opts.out_path, &friendly)?;

    let summary = StationSummary {
        out_path: opts.out_path.clone(),
        all_out_path: opts.all_out_path.clone(),
        total_stations: all.metadata.total_stations,
        ebike_friendly: friendly.metadata.total_stations,
    };
    for (state, count) in &friendly.metadata.by_state {
        info!(%state, count, "e-bike friendly stations");
    }
    info!(
        total = summary.total_stations,
        ebike_friendly = summary.ebike_friendly,
        path = %summary.out_path.display(),
        "station files written"
    );
    Ok(summary)
}
