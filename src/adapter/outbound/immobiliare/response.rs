//! Search API response types.

use serde::Deserialize;
use serde_json::Value;

use crate::port::SearchPage;

/// Body of one search results page.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// Ads on this page, passed through unexamined.
    pub results: Vec<Value>,
    /// SEO block carrying the pagination indicator.
    pub seo_data: SeoData,
}

/// SEO metadata of a results page.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoData {
    /// Next-page indicator: a link, a flag, or null on the last page.
    #[serde(default)]
    pub next_page: Option<Value>,
}

impl SeoData {
    /// Whether another page follows. Absent, null, false, empty and zero
    /// values all mean "no".
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.next_page.as_ref().is_some_and(is_truthy)
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

impl From<SearchResponse> for SearchPage {
    fn from(response: SearchResponse) -> Self {
        let next_page = response.seo_data.has_next_page();
        Self {
            results: response.results,
            next_page,
        }
    }
}
