//! Security lookup against the Bizportal quote site.
//!
//! A free-text query is trimmed into an identifier, searched on the site, and
//! the first hit is routed by its href into one of six instrument sections.
//! The reply is the instrument's summary text, or a slice of its holdings /
//! performance page when the query asks for one.
//!
//! Every outcome, including fetch failures, is a [`Reply`] carrying
//! user-facing text; nothing here returns an error to the caller of
//! [`MarketDataService::answer`].

use std::fmt;

use async_trait::async_trait;
use serde::Serialize;

pub mod error;
pub mod fetch;
pub mod html;
pub mod intent;
pub mod messages;
pub mod section;
pub mod service;
pub mod urls;

pub use error::{FetchError, ScrapeError};
pub use fetch::HttpFetcher;
pub use intent::{Intent, IntentClassifier, KeywordClassifier, Tab};
pub use section::{Section, id_code};
pub use service::MarketDataService;
pub use urls::SiteUrls;

// ── Fetcher seam ─────────────────────────────────────────────────────────────

/// Fetches the body of a page as text.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

// ── Replies ──────────────────────────────────────────────────────────────────

/// Which branch of the lookup produced a reply.
///
/// The text alone does not tell "no data" apart from "fetch failed"; the kind
/// does, for logs and for callers that read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyKind {
    Prompt,
    NoMatch,
    UnrecognizedType,
    GeneralInfo,
    GeneralInfoMissing,
    Holdings,
    Performance,
    SearchFailed,
    ScrapeFailed,
}

impl ReplyKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ReplyKind::Prompt => "prompt",
            ReplyKind::NoMatch => "no_match",
            ReplyKind::UnrecognizedType => "unrecognized_type",
            ReplyKind::GeneralInfo => "general_info",
            ReplyKind::GeneralInfoMissing => "general_info_missing",
            ReplyKind::Holdings => "holdings",
            ReplyKind::Performance => "performance",
            ReplyKind::SearchFailed => "search_failed",
            ReplyKind::ScrapeFailed => "scrape_failed",
        }
    }

    /// True for replies caused by a failed fetch rather than by the data.
    pub fn is_failure(self) -> bool {
        matches!(self, ReplyKind::SearchFailed | ReplyKind::ScrapeFailed)
    }
}

impl fmt::Display for ReplyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text returned to the user plus the branch that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub kind: ReplyKind,
    pub text: String,
}

impl Reply {
    pub fn new(kind: ReplyKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Failure reply: localized `prefix` followed by the error text.
    pub fn failed(kind: ReplyKind, prefix: &str, err: &FetchError) -> Self {
        Self::new(kind, format!("{prefix}{err}"))
    }
}
