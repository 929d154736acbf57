// src/trail.rs
use serde::{Deserialize, Serialize};

use crate::region::Region;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// One trail as extracted from its detail page.
///
/// Only `name` and `length` are load-bearing; every other field is
/// best-effort and may be empty.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trail {
    pub id: String,
    pub name: String,
    pub region: Region,
    /// Miles.
    pub length: f64,
    pub surface: String,
    pub description: String,
    pub coordinates: Option<Coordinates>,
    pub cities: String,
    pub source_url: String,
    pub rating: Option<f64>,
    /// Path of the exported GPX file, set by the `gpx` export.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpx_file: Option<String>,
}

impl Trail {
    /// Empty record for `source_url`; the parser fills in what it finds.
    pub fn new(source_url: &str, region: Region) -> Self {
        Self {
            id: slug_from_url(source_url),
            name: String::new(),
            region,
            length: 0.0,
            surface: String::new(),
            description: String::new(),
            coordinates: None,
            cities: String::new(),
            source_url: source_url.to_string(),
            rating: None,
            gpx_file: None,
        }
    }

    /// Records without a name or a positive length never reach the dataset.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && self.length.is_finite() && self.length > 0.0
    }
}

/// Last non-empty path segment: `https://host/trail/cape-cod-rail-trail/` → `cape-cod-rail-trail`.
fn slug_from_url(url: &str) -> String {
    let path = url.split(['?', '#']).next().unwrap_or("");
    path.rsplit('/')
        .find(|seg| !seg.is_empty())
        .unwrap_or("")
        .to_string()
}
