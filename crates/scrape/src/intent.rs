//! Query intent: which page of an instrument the user is asking about.

use bizdata_config::IntentConfig;

/// What the user wants to know about the instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    General,
    Holdings,
    Performance,
}

/// Detail sub-pages reachable from an instrument's quote page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Holdings,
    Performance,
}

impl Intent {
    /// Sub-page that answers this intent, if it is not the summary.
    pub fn tab(self) -> Option<Tab> {
        match self {
            Intent::General => None,
            Intent::Holdings => Some(Tab::Holdings),
            Intent::Performance => Some(Tab::Performance),
        }
    }
}

impl Tab {
    pub fn path(self) -> &'static str {
        match self {
            Tab::Holdings => "holdings",
            Tab::Performance => "performance",
        }
    }
}

/// Maps free query text to an [`Intent`].
pub trait IntentClassifier: Send + Sync {
    fn classify(&self, query: &str) -> Intent;
}

/// Substring matcher over fixed keyword lists.
#[derive(Debug, Clone)]
pub struct KeywordClassifier {
    holdings: Vec<String>,
    performance: Vec<String>,
}

impl KeywordClassifier {
    pub fn new(holdings: Vec<String>, performance: Vec<String>) -> Self {
        let keep = |words: Vec<String>| -> Vec<String> {
            words.into_iter().filter(|w| !w.is_empty()).collect()
        };
        Self {
            holdings: keep(holdings),
            performance: keep(performance),
        }
    }

    pub fn from_config(config: &IntentConfig) -> Self {
        Self::new(
            config.holdings_keywords.clone(),
            config.performance_keywords.clone(),
        )
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::from_config(&IntentConfig::default())
    }
}

impl IntentClassifier for KeywordClassifier {
    fn classify(&self, query: &str) -> Intent {
        let hit = |words: &[String]| words.iter().any(|w| query.contains(w.as_str()));
        if hit(&self.holdings) {
            Intent::Holdings
        } else if hit(&self.performance) {
            Intent::Performance
        } else {
            Intent::General
        }
    }
}
