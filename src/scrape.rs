// src/scrape.rs
// Region-by-region crawl. Strictly sequential: one request in flight at most,
// with politeness sleeps before every trail page and between regions.

use tokio::time::sleep;
use tracing::{debug, warn};

use crate::{
    config::options::ScrapeOptions,
    core::Fetcher,
    progress::Progress,
    specs::{listing::extract_trail_links, trail::parse_trail},
    trail::Trail,
};

/// Collect every valid trail across `opts.regions`, in region order then link order.
pub async fn collect_trails(
    opts: &ScrapeOptions,
    fetcher: &Fetcher,
    progress: &mut dyn Progress,
) -> Vec<Trail> {
    let mut trails: Vec<Trail> = Vec::new();
    progress.begin(opts.regions.len());

    for (i, &region) in opts.regions.iter().enumerate() {
        if i > 0 {
            sleep(opts.region_delay).await;
        }

        let listing_url = opts.listing_url(region);
        let Some(listing) = fetcher.fetch(&listing_url).await else {
            warn!(%region, url = %listing_url, "listing unavailable; skipping region");
            progress.region_skipped(region);
            continue;
        };

        let links = extract_trail_links(&listing, opts.base());
        if links.is_empty() {
            warn!(%region, url = %listing_url, "listing has no trail links");
        }
        progress.region_started(region, links.len());

        let before = trails.len();
        for url in &links {
            sleep(opts.item_delay).await;

            let Some(doc) = fetcher.fetch(url).await else {
                warn!(%region, url = %url, "trail page unavailable; skipping");
                progress.item_done(url, false);
                continue;
            };

            let trail = parse_trail(&doc, url, region);
            let kept = trail.is_valid();
            if kept {
                trails.push(trail);
            } else {
                debug!(
                    %region, url = %url, name = %trail.name, length = trail.length,
                    "dropping record without name or length"
                );
            }
            progress.item_done(url, kept);
        }

        progress.region_done(region, trails.len() - before);
    }

    progress.finish(trails.len());
    trails
}
