//! URL templates of the quote site.

use url::Url;

use bizdata_config::SiteConfig;

use crate::error::ScrapeError;
use crate::intent::Tab;
use crate::section::Section;

#[derive(Debug, Clone)]
pub struct SiteUrls {
    base: String,
    search: Url,
}

impl SiteUrls {
    pub fn new(site: &SiteConfig) -> Result<Self, ScrapeError> {
        let base = site.base_url.trim_end_matches('/').to_string();
        let raw = format!("{base}{}", site.search_path);
        let search = Url::parse(&raw).map_err(|e| ScrapeError::InvalidUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(search.scheme(), "http" | "https") {
            return Err(ScrapeError::InvalidUrl {
                url: raw,
                reason: "scheme must be http or https".to_string(),
            });
        }
        Ok(Self { base, search })
    }

    /// Search-list URL with the identifier as the percent-encoded `q` param.
    pub fn search_url(&self, identifier: &str) -> String {
        let mut url = self.search.clone();
        url.query_pairs_mut().append_pair("q", identifier);
        url.into()
    }

    pub fn generalview_url(&self, section: Section, id_code: &str) -> String {
        format!("{}/{section}/generalview/{id_code}", self.base)
    }

    pub fn tab_url(&self, section: Section, tab: Tab, id_code: &str) -> String {
        format!("{}/{section}/quote/{}/{id_code}", self.base, tab.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls() -> SiteUrls {
        SiteUrls::new(&SiteConfig::default()).unwrap()
    }

    #[test]
    fn search_url_encodes_query() {
        let u = urls();
        assert_eq!(
            u.search_url("1101534"),
            "https://www.bizportal.co.il/tradedata/paperslist?q=1101534"
        );
        assert_eq!(
            u.search_url("tel aviv"),
            "https://www.bizportal.co.il/tradedata/paperslist?q=tel+aviv"
        );
        let hebrew = u.search_url("טבע");
        assert!(hebrew.ends_with("?q=%D7%98%D7%91%D7%A2"), "{hebrew}");
    }

    #[test]
    fn detail_urls() {
        let u = urls();
        assert_eq!(
            u.generalview_url(Section::Bonds, "12345"),
            "https://www.bizportal.co.il/bonds/quote/generalview/12345"
        );
        assert_eq!(
            u.tab_url(Section::MutualFunds, Tab::Holdings, "5112628"),
            "https://www.bizportal.co.il/mutualfunds/quote/quote/holdings/5112628"
        );
        assert_eq!(
            u.tab_url(Section::ForexEtf, Tab::Performance, "1144633"),
            "https://www.bizportal.co.il/forex/etf/quote/performance/1144633"
        );
    }

    #[test]
    fn trailing_slash_in_base_is_ignored() {
        let site = SiteConfig {
            base_url: "http://localhost:8080/".to_string(),
            ..SiteConfig::default()
        };
        let u = SiteUrls::new(&site).unwrap();
        assert_eq!(
            u.generalview_url(Section::Derivatives, "1"),
            "http://localhost:8080/derivatives/quote/generalview/1"
        );
        assert_eq!(u.search_url("x"), "http://localhost:8080/tradedata/paperslist?q=x");
    }

    #[test]
    fn rejects_bad_base_url() {
        let site = SiteConfig {
            base_url: "not a url".to_string(),
            ..SiteConfig::default()
        };
        assert!(matches!(
            SiteUrls::new(&site),
            Err(ScrapeError::InvalidUrl { .. })
        ));

        let site = SiteConfig {
            base_url: "ftp://example.com".to_string(),
            ..SiteConfig::default()
        };
        assert!(SiteUrls::new(&site).is_err());
    }
}
