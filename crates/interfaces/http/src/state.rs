//! Application state shared across all request handlers.

use std::sync::Arc;

use bizdata_config::AppConfig;
use bizdata_scrape::{MarketDataService, ScrapeError};

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<MarketDataService>,
}

impl AppState {
    pub fn new(service: MarketDataService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// State wired to the live site.
    pub fn from_config(config: &AppConfig) -> Result<Self, ScrapeError> {
        let service = MarketDataService::from_config(config)?;
        tracing::info!(
            base_url = %config.site.base_url,
            timeout_secs = config.http.timeout_secs,
            tab_text_limit = config.site.tab_text_limit,
            "market data service initialized"
        );
        Ok(Self::new(service))
    }
}
