// src/core/net.rs
// HTTP GET with bounded retries. Failures degrade to `None`; they never abort a run.

use reqwest::{Client, header};
use tokio::time::sleep;
use tracing::{info, warn};

use crate::config::consts::{ACCEPT_HTML, USER_AGENT};
use crate::config::options::FetchOptions;
use crate::error::ScrapeError;

pub struct Fetcher {
    client: Client,
    opts: FetchOptions,
}

impl Fetcher {
    pub fn new(opts: &FetchOptions) -> Result<Self, ScrapeError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(header::ACCEPT, header::HeaderValue::from_static(ACCEPT_HTML));

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(opts.timeout)
            .build()?;

        Ok(Self { client, opts: opts.clone() })
    }

    pub fn max_attempts(&self) -> u32 {
        self.opts.max_attempts.max(1)
    }

    /// Body of `url` on a 2xx response, or `None` once every attempt failed.
    pub async fn fetch(&self, url: &str) -> Option<String> {
        self.fetch_query(url, &[]).await
    }

    /// Like [`Fetcher::fetch`], with `query` appended as URL parameters.
    /// Only `url` is logged, so parameter values (API keys) stay out of the logs.
    pub async fn fetch_query(&self, url: &str, query: &[(&str, &str)]) -> Option<String> {
        let max = self.max_attempts();

        for attempt in 1..=max {
            info!(url, attempt, max_attempts = max, "fetching");

            match self.client.get(url).query(query).send().await {
                Ok(resp) if resp.status().is_success() => match resp.text().await {
                    Ok(body) => return Some(body),
                    Err(e) => warn!(url, attempt, error = %e, "failed to read response body"),
                },
                Ok(resp) => warn!(url, attempt, status = %resp.status(), "non-success status"),
                Err(e) => warn!(url, attempt, error = %e, "request failed"),
            }

            if attempt < max {
                sleep(self.opts.retry_delay).await;
            }
        }

        warn!(url, attempts = max, "giving up; treating as unavailable");
        None
    }
}
