// src/runner.rs
use std::path::PathBuf;

use chrono::Local;
use tracing::{error, info};

use crate::{
    config::options::ScrapeOptions,
    core::Fetcher,
    dataset::assemble,
    error::ScrapeError,
    file::write_dataset,
    progress::Progress,
    scrape::collect_trails,
};

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub out_path: PathBuf,
    pub total_trails: usize,
    pub total_miles: f64,
}

/// Full pipeline: crawl, assemble, write, then check the yield.
///
/// A low yield is reported as `ScrapeError::LowYield` *after* the dataset has
/// been written; the file is not rolled back.
pub async fn run(
    opts: &ScrapeOptions,
    progress: &mut dyn Progress,
) -> Result<RunSummary, ScrapeError> {
    let fetcher = Fetcher::new(&opts.fetch)?;
    let trails = collect_trails(opts, &fetcher, progress).await;

    let dataset = assemble(trails, &mut rand::rng(), Local::now().date_naive());
    write_dataset(&opts.out_path, &dataset)?;

    let summary = RunSummary {
        out_path: opts.out_path.clone(),
        total_trails: dataset.metadata.total_trails,
        total_miles: dataset.metadata.total_miles,
    };
    info!(
        trails = summary.total_trails,
        miles = summary.total_miles,
        path = %summary.out_path.display(),
        "dataset written"
    );

    if summary.total_trails < opts.min_trails {
        error!(
            trails = summary.total_trails,
            min = opts.min_trails,
            "yield below minimum; the site layout has probably changed"
        );
        return Err(ScrapeError::LowYield {
            count: summary.total_trails,
            min: opts.min_trails,
            path: summary.out_path,
        });
    }

    Ok(summary)
}
