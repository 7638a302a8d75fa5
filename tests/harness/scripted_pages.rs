use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use immobot::error::FetchError;
use immobot::port::{PageSource, SearchPage};
use serde_json::{json, Value};

/// Scripted search API: serves queued pages in order and records every
/// requested URL.
#[derive(Clone, Default)]
pub struct ScriptedPages {
    pages: Arc<Mutex<VecDeque<Result<SearchPage, u16>>>>,
    requested: Arc<Mutex<Vec<String>>>,
}

impl ScriptedPages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a page holding listings with the given ids.
    pub fn push_page(&self, ids: &[Value], next_page: bool) -> &Self {
        let results = ids.iter().map(ad).collect();
        self.pages
            .lock()
            .expect("lock scripted pages")
            .push_back(Ok(SearchPage { results, next_page }));
        self
    }

    /// Queue a non-success HTTP status.
    pub fn push_status(&self, status: u16) -> &Self {
        self.pages
            .lock()
            .expect("lock scripted pages")
            .push_back(Err(status));
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().expect("lock requested urls").clone()
    }
}

/// A raw search result as the API returns it.
pub fn ad(id: &Value) -> Value {
    let slug = match id {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    json!({
        "realEstate": {"id": id, "title": format!("Trilocale {slug}")},
        "seo": {"url": ad_url(&slug)}
    })
}

pub fn ad_url(id: &str) -> String {
    format!("https://www.immobiliare.it/annunci/{id}/")
}

#[async_trait]
impl PageSource for ScriptedPages {
    async fn fetch_page(&self, url: &str) -> Result<SearchPage, FetchError> {
        self.requested
            .lock()
            .expect("lock requested urls")
            .push(url.to_string());

        let next = self.pages.lock().expect("lock scripted pages").pop_front();
        match next {
            Some(Ok(page)) => Ok(page),
            Some(Err(status)) => Err(FetchError::Status {
                status: reqwest::StatusCode::from_u16(status).expect("valid status"),
                url: url.to_string(),
                body: String::new(),
            }),
            None => panic!("unexpected request for {url}"),
        }
    }
}
