// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Fatal conditions. Anything recoverable (a dead link, a missing field, an
/// unreachable listing) is logged and skipped instead of ending up here.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("{action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(
        "only {count} trails collected (minimum {min}); scraping is likely broken. \
         Dataset was still written to {}", path.display()
    )]
    LowYield {
        count: usize,
        min: usize,
        path: PathBuf,
    },

    #[error("station feed unavailable at {url}")]
    FeedUnavailable { url: String },

    #[error("unknown region code: {0:?}")]
    UnknownRegion(String),
}

impl ScrapeError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { action, path: path.into(), source }
    }
}
