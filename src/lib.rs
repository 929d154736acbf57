// src/lib.rs

pub mod cli;
pub mod config;
pub mod core;
pub mod specs;

pub mod dataset;
pub mod error;
pub mod file;
pub mod geo;
pub mod gpx;
pub mod progress;
pub mod region;
pub mod runner;
pub mod scrape;
pub mod stations;
pub mod trail;

pub use error::ScrapeError;
pub use region::Region;
pub use trail::{Coordinates, Trail};
