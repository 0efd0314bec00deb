use std::env;
use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Browser-like user agent.  The quote site serves a reduced page to clients
/// that do not look like a desktop browser.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

// ── Server ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address the HTTP endpoint listens on.
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:7071".to_string(),
        }
    }
}

// ── Site ─────────────────────────────────────────────────────────────────────

/// Where and how the quote site is scraped.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site origin without a trailing slash.
    pub base_url: String,
    /// Path of the securities search list, appended to `base_url`.
    pub search_path: String,
    /// CSS selector for the anchors in the search result list.  The first
    /// match is taken as the best hit.
    pub result_selector: String,
    /// CSS selector for the summary block on the `generalview` page.
    pub general_info_selector: String,
    /// Character budget for holdings / performance page text.
    pub tab_text_limit: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.bizportal.co.il".to_string(),
            search_path: "/tradedata/paperslist".to_string(),
            result_selector: "a.link-papers".to_string(),
            general_info_selector: "div.paperHeaderContent".to_string(),
            tab_text_limit: 1000,
        }
    }
}

// ── Outbound HTTP ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Per-request timeout.  `0` leaves the HTTP client's own default in place
    /// (no timeout).
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

// ── Intent keywords ──────────────────────────────────────────────────────────

/// Substrings that route a query to the holdings or performance tab.
/// Holdings keywords are checked first.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IntentConfig {
    pub holdings_keywords: Vec<String>,
    pub performance_keywords: Vec<String>,
}

impl Default for IntentConfig {
    fn default() -> Self {
        Self {
            holdings_keywords: vec!["אחזקות".to_string()],
            performance_keywords: vec!["תשואה".to_string(), "ביצועים".to_string()],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    pub log_level: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub site: SiteConfig,
    pub http: HttpConfig,
    pub intent: IntentConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let mut config = Self::default();
        if let Ok(raw) = fs::read_to_string(path) {
            config = toml::from_str(&raw)?;
        }

        config.apply_overrides(|key| env::var(key).ok());
        Ok(config)
    }

    /// Apply environment-style overrides on top of file values.  Empty values
    /// are ignored.
    ///
    /// | Variable                       | Effect                            |
    /// |--------------------------------|-----------------------------------|
    /// | `BIZDATA_BIND_ADDR`            | `server.bind_addr`                |
    /// | `FUNCTIONS_CUSTOMHANDLER_PORT` | `server.bind_addr = 0.0.0.0:PORT` |
    /// | `BIZDATA_BASE_URL`             | `site.base_url`                   |
    /// | `BIZDATA_LOG_LEVEL`            | `telemetry.log_level`             |
    ///
    /// The Azure Functions host port wins over `BIZDATA_BIND_ADDR` so the
    /// binary can run unmodified as a custom handler.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(addr) = get("BIZDATA_BIND_ADDR") {
            self.server.bind_addr = addr;
        }
        if let Some(port) = get("FUNCTIONS_CUSTOMHANDLER_PORT") {
            if port.parse::<u16>().is_ok() {
                self.server.bind_addr = format!("0.0.0.0:{port}");
            }
        }
        if let Some(base) = get("BIZDATA_BASE_URL") {
            self.site.base_url = base;
        }
        if let Some(level) = get("BIZDATA_LOG_LEVEL") {
            self.telemetry.log_level = level;
        }

        self.site.base_url = self.site.base_url.trim_end_matches('/').to_string();
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?;
        }

        let rendered = toml::to_string_pretty(self)?;
        fs::write(path, rendered)?;
        Ok(())
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
