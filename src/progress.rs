// src/progress.rs
use tracing::info;

use crate::region::Region;

/// Lightweight progress reporting for a scrape run.
/// Frontends implement this to surface status; the pipeline never depends on it.
pub trait Progress {
    /// Called at the start with the number of regions to visit.
    fn begin(&mut self, _regions: usize) {}

    /// Listing fetched; `links` trail pages will follow.
    fn region_started(&mut self, _region: Region, _links: usize) {}

    /// Listing unavailable; nothing collected for this region.
    fn region_skipped(&mut self, _region: Region) {}

    /// One trail page processed. `kept` is false when it was unavailable or invalid.
    fn item_done(&mut self, _url: &str, _kept: bool) {}

    fn region_done(&mut self, _region: Region, _kept: usize) {}

    /// Called at the end with the total number of kept trails.
    fn finish(&mut self, _kept: usize) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// One summary line per region, through the regular log output.
#[derive(Default)]
pub struct LogProgress {
    regions_total: usize,
    regions_seen: usize,
    skipped: Vec<Region>,
}

impl Progress for LogProgress {
    fn begin(&mut self, regions: usize) {
        self.regions_total = regions;
        info!(regions, "starting scrape");
    }

    fn region_started(&mut self, region: Region, links: usize) {
        self.regions_seen += 1;
        info!(
            "[{}/{}] {} ({}): {} trail links",
            self.regions_seen, self.regions_total, region.name(), region, links
        );
    }

    fn region_skipped(&mut self, region: Region) {
        self.regions_seen += 1;
        self.skipped.push(region);
    }

    fn region_done(&mut self, region: Region, kept: usize) {
        info!(%region, kept, "region finished");
    }

    fn finish(&mut self, kept: usize) {
        if self.skipped.is_empty() {
            info!(kept, "all regions processed");
        } else {
            let skipped: Vec<&str> = self.skipped.iter().map(|r| r.code()).collect();
            info!(kept, skipped = %skipped.join(","), "finished with skipped regions");
        }
    }
}
