//! Saved-search URL handling.

use std::fmt;

/// Name of the page-number query parameter.
pub const PAGE_PARAM: &str = "pag";

/// A saved search, identified by its URL with any page parameter removed.
///
/// This is the partition key of the known-listings store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Normalize a search URL by dropping every `pag=<digits>` pair.
    ///
    /// Any `#fragment` is dropped too, since it never reaches the server.
    /// The rest of the query string is kept byte-for-byte, including its
    /// order and encoding.
    pub fn new(raw: &str) -> Self {
        let raw = raw.split_once('#').map_or(raw, |(before, _)| before);
        let Some((base, query)) = raw.split_once('?') else {
            return Self(raw.to_string());
        };

        let kept: Vec<&str> = query.split('&').filter(|p| !is_page_pair(p)).collect();
        if kept.is_empty() {
            Self(base.to_string())
        } else {
            Self(format!("{base}?{}", kept.join("&")))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// URL of a given result page (1-based).
    pub fn page_url(&self, page: u32) -> String {
        let separator = match self.0.find('?') {
            None => "?",
            Some(_) if self.0.ends_with('?') || self.0.ends_with('&') => "",
            Some(_) => "&",
        };
        format!("{}{separator}{PAGE_PARAM}={page}", self.0)
    }
}

fn is_page_pair(pair: &str) -> bool {
    pair.strip_prefix(PAGE_PARAM)
        .and_then(|rest| rest.strip_prefix('='))
        .is_some_and(|value| !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()))
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://www.immobiliare.it/api-next/search-list/real-estates/";

    #[test]
    fn strips_trailing_page_param() {
        let q = SearchQuery::new(&format!("{BASE}?idContratto=2&idCategoria=1&pag=3"));
        assert_eq!(q.as_str(), format!("{BASE}?idContratto=2&idCategoria=1"));
    }

    #[test]
    fn strips_page_param_in_any_position() {
        let first = SearchQuery::new(&format!("{BASE}?pag=12&idContratto=2"));
        let middle = SearchQuery::new(&format!("{BASE}?idContratto=2&pag=7&idCategoria=1"));
        assert_eq!(first.as_str(), format!("{BASE}?idContratto=2"));
        assert_eq!(middle.as_str(), format!("{BASE}?idContratto=2&idCategoria=1"));
    }

    #[test]
    fn same_search_on_different_pages_normalizes_equal() {
        let a = SearchQuery::new(&format!("{BASE}?idContratto=2&pag=1"));
        let b = SearchQuery::new(&format!("{BASE}?idContratto=2&pag=999"));
        assert_eq!(a, b);
    }

    #[test]
    fn keeps_lookalike_params() {
        let raw = format!("{BASE}?pagina=2&pag=abc&idQuartiere[]=10");
        assert_eq!(SearchQuery::new(&raw).as_str(), raw);
    }

    #[test]
    fn only_page_param_leaves_bare_path() {
        let q = SearchQuery::new(&format!("{BASE}?pag=2"));
        assert_eq!(q.as_str(), BASE);
    }

    #[test]
    fn fragment_is_dropped_before_page_param_is_found() {
        let q = SearchQuery::new(&format!("{BASE}?idContratto=2&pag=2#top"));
        assert_eq!(q.as_str(), format!("{BASE}?idContratto=2"));
        assert_eq!(q.page_url(3), format!("{BASE}?idContratto=2&pag=3"));
        assert_eq!(SearchQuery::new(&format!("{BASE}#results")).as_str(), BASE);
    }

    #[test]
    fn page_url_picks_separator() {
        assert_eq!(SearchQuery::new(BASE).page_url(1), format!("{BASE}?pag=1"));
        assert_eq!(
            SearchQuery::new(&format!("{BASE}?a=1")).page_url(2),
            format!("{BASE}?a=1&pag=2")
        );
        assert_eq!(
            SearchQuery::new(&format!("{BASE}?")).page_url(3),
            format!("{BASE}?pag=3")
        );
    }
}
