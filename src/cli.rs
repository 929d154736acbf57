// src/cli.rs
use std::{path::PathBuf, time::Duration};

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{consts::*, options::{GpxOptions, ScrapeOptions, StationOptions}};
use crate::error::ScrapeError;
use crate::progress::LogProgress;
use crate::region::Region;

#[derive(Parser, Debug)]
#[command(name = "trail_scrape")]
#[command(about = "Collect New England trail metadata into a JSON dataset")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Dataset output path
    #[arg(short, long, default_value = DEFAULT_OUT_PATH)]
    pub out: PathBuf,

    /// Site root; override to point at a mirror or a local fixture server
    #[arg(long, default_value = BASE_URL)]
    pub base_url: String,

    /// Comma-separated state codes to scrape (default: all six)
    #[arg(long, value_delimiter = ',')]
    pub regions: Vec<Region>,

    /// Attempts per page before giving up on it
    #[arg(long, default_value_t = MAX_ATTEMPTS)]
    pub max_attempts: u32,

    #[arg(long, default_value_t = RETRY_DELAY_MS)]
    pub retry_delay_ms: u64,

    /// Pause before every trail page
    #[arg(long, default_value_t = ITEM_DELAY_MS)]
    pub item_delay_ms: u64,

    /// Pause between states
    #[arg(long, default_value_t = REGION_DELAY_MS)]
    pub region_delay_ms: u64,

    /// Fail the run when fewer trails than this are collected
    #[arg(long, default_value_t = MIN_TRAILS)]
    pub min_trails: usize,

    /// Verbose logging (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the supported state codes
    Regions,
    /// Export GPX waypoint files from a saved dataset
    Gpx {
        #[arg(short, long, default_value = DEFAULT_OUT_PATH)]
        input: PathBuf,
        #[arg(short = 'd', long, default_value = DEFAULT_GPX_DIR)]
        out_dir: PathBuf,
    },
    /// Fetch public charging stations and write the e-bike friendly and full lists
    Stations {
        #[arg(long, default_value = NREL_API_URL)]
        api_url: String,
        /// NREL developer key; the public demo key is rate-limited
        #[arg(long, default_value = NREL_DEMO_KEY)]
        api_key: String,
        #[arg(short, long, default_value = STATIONS_OUT_PATH)]
        out: PathBuf,
        #[arg(long, default_value = STATIONS_ALL_OUT_PATH)]
        all_out: PathBuf,
    },
}

impl Cli {
    pub fn scrape_options(&self) -> ScrapeOptions {
        let mut opts = ScrapeOptions {
            base_url: self.base_url.clone(),
            out_path: self.out.clone(),
            item_delay: Duration::from_millis(self.item_delay_ms),
            region_delay: Duration::from_millis(self.region_delay_ms),
            min_trails: self.min_trails,
            ..ScrapeOptions::default()
        };
        if !self.regions.is_empty() {
            opts.regions = dedup_in_order(&self.regions);
        }
        opts.fetch.max_attempts = self.max_attempts;
        opts.fetch.retry_delay = Duration::from_millis(self.retry_delay_ms);
        opts
    }
}

fn dedup_in_order(regions: &[Region]) -> Vec<Region> {
    let mut out: Vec<Region> = Vec::with_capacity(regions.len());
    for &r in regions {
        if !out.contains(&r) { out.push(r); }
    }
    out
}

pub fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "info,trail_scrape=debug",
        _ => "debug,trail_scrape=trace",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

pub async fn run(cli: Cli) -> Result<(), ScrapeError> {
    match &cli.command {
        Some(Command::Regions) => {
            for region in Region::ALL {
                println!("{},{}", region.code(), region.name());
            }
            Ok(())
        }
        Some(Command::Gpx { input, out_dir }) => {
            let opts = GpxOptions { input: input.clone(), out_dir: out_dir.clone() };
            crate::gpx::export(&opts).map(|_| ())
        }
        Some(Command::Stations { api_url, api_key, out, all_out }) => {
            let opts = StationOptions {
                api_url: api_url.clone(),
                api_key: api_key.clone(),
                out_path: out.clone(),
                all_out_path: all_out.clone(),
                ..StationOptions::default()
            };
            crate::stations::run(&opts).await.map(|_| ())
        }
        None => {
            let opts = cli.scrape_options();
            crate::runner::run(&opts, &mut LogProgress::default()).await.map(|_| ())
        }
    }
}
