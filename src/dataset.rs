// src/dataset.rs
use std::{cmp::Ordering, collections::BTreeMap};

use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::consts::{PROVENANCE_NOTE, SOURCE_LABEL};
use crate::core::sanitize::sort_key;
use crate::geo::estimate_coordinates;
use crate::region::Region;
use crate::trail::Trail;

/// The persisted artifact: every kept trail plus metadata derived from them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub trails: Vec<Trail>,
    pub metadata: Metadata,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub generated: NaiveDate,
    pub source: String,
    pub regions: Vec<Region>,
    pub total_trails: usize,
    pub total_miles: f64,
    pub by_region: BTreeMap<Region, usize>,
    pub note: String,
}

/// Fill in fallback coordinates, sort by name and derive the metadata block.
pub fn assemble<R: Rng>(mut trails: Vec<Trail>, rng: &mut R, generated: NaiveDate) -> Dataset {
    let estimated = trails
        .iter_mut()
        .map(|t| estimate_coordinates(t, rng))
        .filter(|&synthesized| synthesized)
        .count();
    debug!(estimated, total = trails.len(), "fallback coordinates assigned");

    trails.sort_by(|a, b| compare_names(&a.name, &b.name));

    let metadata = Metadata {
        generated,
        source: SOURCE_LABEL.to_string(),
        regions: Region::ALL.to_vec(),
        total_trails: trails.len(),
        total_miles: round1(trails.iter().map(|t| t.length).sum()),
        by_region: count_by_region(&trails),
        note: PROVENANCE_NOTE.to_string(),
    };

    Dataset { trails, metadata }
}

/// Case- and accent-insensitive first so "baker" sits next to "Baker" and
/// "École" next to "Ecole"; raw order breaks ties.
fn compare_names(a: &str, b: &str) -> Ordering {
    sort_key(a).cmp(&sort_key(b)).then_with(|| a.cmp(b))
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

fn count_by_region(trails: &[Trail]) -> BTreeMap<Region, usize> {
    let mut counts = BTreeMap::new();
    for t in trails {
        *counts.entry(t.region).or_insert(0) += 1;
    }
    counts
}
