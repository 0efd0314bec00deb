//! Outbound page fetching over HTTP.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use bizdata_config::HttpConfig;

use crate::PageFetcher;
use crate::error::{FetchError, ScrapeError};

/// [`PageFetcher`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(config: &HttpConfig) -> Result<Self, ScrapeError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }
        let client = builder
            .build()
            .map_err(|e| ScrapeError::Client(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!(%url, "fetching page");
        let resp = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "text/html")
            .send()
            .await?;

        // Non-success bodies go through normal extraction.
        let status = resp.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "non-success status, scraping body anyway");
        }

        let body = resp.text().await?;
        debug!(%url, status = status.as_u16(), bytes = body.len(), "page fetched");
        Ok(body)
    }
}
