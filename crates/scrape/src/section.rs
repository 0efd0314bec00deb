//! Instrument-type routing from search-result hrefs.

use std::fmt;

/// Instrument type of a search hit, derived from the path of its href.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Bonds,
    ForeignStock,
    MutualFunds,
    ForexEtf,
    TradedFund,
    Derivatives,
}

/// Href markers in match order.
const MARKERS: [(&str, Section); 6] = [
    ("/bonds/", Section::Bonds),
    ("/foreign/stock/", Section::ForeignStock),
    ("/mutualfunds/", Section::MutualFunds),
    ("/forex/etf/", Section::ForexEtf),
    ("/tradedfund/", Section::TradedFund),
    ("/derivatives/", Section::Derivatives),
];

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Bonds,
        Section::ForeignStock,
        Section::MutualFunds,
        Section::ForexEtf,
        Section::TradedFund,
        Section::Derivatives,
    ];

    /// First section whose marker occurs anywhere in `href`.
    pub fn from_href(href: &str) -> Option<Self> {
        MARKERS
            .iter()
            .find(|(marker, _)| href.contains(*marker))
            .map(|(_, section)| *section)
    }

    /// URL path segment the site uses for detail pages of this type.
    pub fn path(self) -> &'static str {
        match self {
            Section::Bonds => "bonds/quote",
            Section::ForeignStock => "foreign/stock",
            Section::MutualFunds => "mutualfunds/quote",
            Section::ForexEtf => "forex/etf",
            Section::TradedFund => "tradedfund/quote",
            Section::Derivatives => "derivatives/quote",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Instrument identifier carried by an href: its last path segment.
///
/// Query string and fragment are ignored, as is a single trailing slash.
pub fn id_code(href: &str) -> &str {
    let path = href.split(['?', '#']).next().unwrap_or(href);
    let path = path.strip_suffix('/').unwrap_or(path);
    path.rsplit('/').next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_marker_routes_to_its_section() {
        let cases = [
            ("/tradedata/bonds/1101534", Section::Bonds, "bonds/quote"),
            ("/foreign/stock/AAPL", Section::ForeignStock, "foreign/stock"),
            ("/mutualfunds/5112628", Section::MutualFunds, "mutualfunds/quote"),
            ("/forex/etf/1144633", Section::ForexEtf, "forex/etf"),
            ("/tradedfund/1146471", Section::TradedFund, "tradedfund/quote"),
            ("/derivatives/82360105", Section::Derivatives, "derivatives/quote"),
        ];
        for (href, section, path) in cases {
            assert_eq!(Section::from_href(href), Some(section), "href {href}");
            assert_eq!(section.path(), path);
            assert_eq!(section.to_string(), path);
        }
    }

    #[test]
    fn absolute_hrefs_route_too() {
        let href = "https://www.bizportal.co.il/tradedata/bonds/12345";
        assert_eq!(Section::from_href(href), Some(Section::Bonds));
    }

    #[test]
    fn unknown_path_has_no_section() {
        assert_eq!(Section::from_href("/capitalmarket/quote/generalview/604611"), None);
        assert_eq!(Section::from_href(""), None);
        // Markers need both slashes.
        assert_eq!(Section::from_href("/bondsx/1"), None);
    }

    #[test]
    fn earlier_marker_wins() {
        assert_eq!(
            Section::from_href("/derivatives/bonds/77"),
            Some(Section::Bonds)
        );
    }

    #[test]
    fn all_sections_have_distinct_paths() {
        let mut paths: Vec<_> = Section::ALL.iter().map(|s| s.path()).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), Section::ALL.len());
    }

    #[test]
    fn id_code_is_last_segment() {
        assert_eq!(id_code(".../bonds/12345"), "12345");
        assert_eq!(id_code("https://www.bizportal.co.il/mutualfunds/5112628"), "5112628");
        assert_eq!(id_code("5112628"), "5112628");
    }

    #[test]
    fn id_code_ignores_query_fragment_and_trailing_slash() {
        assert_eq!(id_code("/forex/etf/1144633/"), "1144633");
        assert_eq!(id_code("/forex/etf/1144633?tab=1"), "1144633");
        assert_eq!(id_code("/forex/etf/1144633#top"), "1144633");
    }
}
