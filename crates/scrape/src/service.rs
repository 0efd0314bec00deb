//! The lookup itself: search, route, fetch detail pages, reply.

use std::sync::Arc;

use scraper::Selector;
use tracing::{debug, info, warn};

use bizdata_config::{AppConfig, SiteConfig};

use crate::error::ScrapeError;
use crate::fetch::HttpFetcher;
use crate::intent::{IntentClassifier, KeywordClassifier, Tab};
use crate::section::{Section, id_code};
use crate::urls::SiteUrls;
use crate::{PageFetcher, Reply, ReplyKind, html, messages};

/// Answers free-text security queries from the quote site.
///
/// Stateless apart from configuration; one instance serves all requests.
pub struct MarketDataService {
    urls: SiteUrls,
    result_selector: Selector,
    general_info_selector: Selector,
    tab_text_limit: usize,
    fetcher: Arc<dyn PageFetcher>,
    classifier: Box<dyn IntentClassifier>,
}

impl MarketDataService {
    /// Service wired to the live site with the keyword classifier.
    pub fn from_config(config: &AppConfig) -> Result<Self, ScrapeError> {
        let fetcher = HttpFetcher::new(&config.http)?;
        Self::new(
            &config.site,
            Arc::new(fetcher),
            Box::new(KeywordClassifier::from_config(&config.intent)),
        )
    }

    pub fn new(
        site: &SiteConfig,
        fetcher: Arc<dyn PageFetcher>,
        classifier: Box<dyn IntentClassifier>,
    ) -> Result<Self, ScrapeError> {
        Ok(Self {
            urls: SiteUrls::new(site)?,
            result_selector: parse_selector(&site.result_selector)?,
            general_info_selector: parse_selector(&site.general_info_selector)?,
            tab_text_limit: site.tab_text_limit,
            fetcher,
            classifier,
        })
    }

    /// Run one lookup.  `None` means the request carried no query at all.
    pub async fn answer(&self, user_query: Option<&str>) -> Reply {
        info!("processing market data request");

        let query = user_query.unwrap_or_default();
        let identifier = security_identifier(query);
        if identifier.is_empty() {
            return Reply::new(ReplyKind::Prompt, messages::PROMPT);
        }

        let search_url = self.urls.search_url(identifier);
        let results = match self.fetcher.fetch(&search_url).await {
            Ok(page) => page,
            Err(err) => {
                warn!(url = %search_url, error = %err, "search request failed");
                return Reply::failed(ReplyKind::SearchFailed, messages::SEARCH_ERROR, &err);
            }
        };

        let Some(href) = html::first_attr(&results, &self.result_selector, "href") else {
            debug!(%identifier, "no search result");
            return Reply::new(ReplyKind::NoMatch, messages::NO_MATCH);
        };

        let Some(section) = Section::from_href(&href) else {
            debug!(%href, "search hit has an unknown instrument type");
            return Reply::new(ReplyKind::UnrecognizedType, messages::UNRECOGNIZED_TYPE);
        };

        let id = id_code(&href);
        debug!(%href, %section, id_code = id, "search hit");

        let summary = self.general_info(section, id).await;

        match self.classifier.classify(query).tab() {
            Some(tab) => self.tab_text(section, tab, id).await,
            None => summary,
        }
    }

    async fn general_info(&self, section: Section, id: &str) -> Reply {
        let url = self.urls.generalview_url(section, id);
        match self.fetcher.fetch(&url).await {
            Ok(page) => match html::first_text(&page, &self.general_info_selector) {
                Some(text) => Reply::new(ReplyKind::GeneralInfo, text),
                None => Reply::new(ReplyKind::GeneralInfoMissing, messages::GENERAL_INFO_MISSING),
            },
            Err(err) => {
                warn!(%url, error = %err, "general info fetch failed");
                Reply::failed(ReplyKind::ScrapeFailed, messages::GENERAL_INFO_ERROR, &err)
            }
        }
    }

    async fn tab_text(&self, section: Section, tab: Tab, id: &str) -> Reply {
        let (kind, error_prefix) = match tab {
            Tab::Holdings => (ReplyKind::Holdings, messages::HOLDINGS_ERROR),
            Tab::Performance => (ReplyKind::Performance, messages::PERFORMANCE_ERROR),
        };

        let url = self.urls.tab_url(section, tab, id);
        match self.fetcher.fetch(&url).await {
            Ok(page) => {
                let text = html::page_text(&page);
                Reply::new(kind, html::truncate_chars(&text, self.tab_text_limit))
            }
            Err(err) => {
                warn!(%url, tab = tab.path(), error = %err, "tab fetch failed");
                Reply::failed(ReplyKind::ScrapeFailed, error_prefix, &err)
            }
        }
    }
}

/// Identifier searched on the site: the query with surrounding whitespace
/// removed.
pub fn security_identifier(query: &str) -> &str {
    query.trim()
}

fn parse_selector(selector: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(selector).map_err(|e| ScrapeError::InvalidSelector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}
