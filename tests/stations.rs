// tests/stations.rs
use std::time::Duration;

use serde_json::Value;
use trail_scrape::config::options::StationOptions;
use trail_scrape::{ScrapeError, stations};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FEED_PATH: &str = "/api/alt-fuel-stations/v1.json";

fn feed_body() -> Value {
    serde_json::json!({
        "total_results": 4,
        "fuel_stations": [
            {"id": 1, "station_name": "Library Outlet", "state": "VT", "city": "Montpelier",
             "latitude": 44.26, "longitude": -72.57, "ev_connector_types": ["NEMA515"],
             "ev_level1_evse_num": 2},
            {"id": 2, "station_name": "Town Green", "state": "NH",
             "ev_connector_types": ["J1772"], "ev_level2_evse_num": 4, "ev_network": "ChargePoint Network"},
            {"id": 3, "station_name": "Highway Plaza", "state": "MA",
             "ev_connector_types": ["J1772COMBO", "CHADEMO"], "ev_dc_fast_num": 6},
            {"id": 4, "station_name": null, "state": "VT", "ev_connector_types": null}
        ]
    })
}

fn options(server: &MockServer, dir: &std::path::Path) -> StationOptions {
    let mut opts = StationOptions {
        api_url: format!("{}{FEED_PATH}", server.uri()),
        out_path: dir.join("data").join("charging_stations.json"),
        all_out_path: dir.join("data").join("charging_stations_all.json"),
        ..StationOptions::default()
    };
    opts.fetch.max_attempts = 2;
    opts.fetch.retry_delay = Duration::ZERO;
    opts
}

fn read_json(path: &std::path::Path) -> Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

#[tokio::test]
async fn writes_full_and_ebike_friendly_lists() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(FEED_PATH))
        .and(query_param("api_key", "DEMO_KEY"))
        .and(query_param("state", "CT,MA,ME,NH,RI,VT"))
        .and(query_param("fuel_type", "ELEC"))
        .and(query_param("status", "E"))
        .and(query_param("access", "public"))
        .and(query_param("limit", "all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(feed_body()))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let opts = options(&server, dir.path());
    let summary = stations::run(&opts).await.unwrap();
    assert_eq!(summary.total_stations, 4);
    assert_eq!(summary.ebike_friendly, 2);

    let all = read_json(&opts.all_out_path);
    assert_eq!(all["metadata"]["totalStations"], 4);
    assert_eq!(all["metadata"]["byType"]["Other"], 2);
    assert_eq!(all["metadata"]["byState"]["VT"], 2);
    assert_eq!(all["stations"][3]["name"], "Unknown");

    let friendly = read_json(&opts.out_path);
    let stations = friendly["stations"].as_array().unwrap();
    let ids: Vec<u64> = stations.iter().map(|s| s["id"].as_u64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(stations[0]["chargerType"], "NEMA");
    assert_eq!(stations[0]["icon"], "🔌");
    assert_eq!(stations[0]["level1Count"], 2);
    assert_eq!(stations[1]["chargerType"], "J1772");
    assert_eq!(stations[1]["network"], "ChargePoint Network");
    assert_eq!(friendly["metadata"]["byState"]["NH"], 1);
    assert!(friendly["metadata"]["byState"].get("MA").is_none());
    assert_eq!(friendly["metadata"]["source"], "NREL Alternative Fuel Data Center");
}

#[tokio::test]
async fn rejected_key_is_an_error_and_writes_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(FEED_PATH))
        .respond_with(ResponseTemplate::new(403).set_body_string(r#"{"error":{"code":"API_KEY_INVALID"}}"#))
        .expect(2)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let mut opts = options(&server, dir.path());
    opts.api_key = "bad".into();

    let err = stations::run(&opts).await.unwrap_err();
    assert!(matches!(err, ScrapeError::FeedUnavailable { .. }), "{err}");
    assert!(!opts.out_path.exists());
    assert!(!opts.all_out_path.exists());
}

#[tokio::test]
async fn malformed_feed_is_a_json_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(FEED_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let err = stations::run(&options(&server, dir.path())).await.unwrap_err();
    assert!(matches!(err, ScrapeError::Json(_)), "{err}");
}
