//! In-memory [`Fetcher`] for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use url::Url;

use crate::fetcher::{FetchError, Fetcher};

enum Canned {
    Body(String),
    Status(u16),
}

/// Serves canned bodies keyed by exact URL and records every request.
///
/// Unknown URLs fail like a refused connection.
#[derive(Default)]
pub struct MockFetcher {
    responses: HashMap<String, Canned>,
    requests: Mutex<Vec<(String, bool)>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(mut self, url: &str, body: &str) -> Self {
        self.responses.insert(url.to_string(), Canned::Body(body.to_string()));
        self
    }

    pub fn with_status(mut self, url: &str, status: u16) -> Self {
        self.responses.insert(url.to_string(), Canned::Status(status));
        self
    }

    /// Every `(url, incognito)` pair requested so far, in order.
    pub fn requests(&self) -> Vec<(String, bool)> {
        self.requests.lock().expect("mock lock poisoned").clone()
    }

    pub fn request_urls(&self) -> Vec<String> {
        self.requests().into_iter().map(|(url, _)| url).collect()
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn fetch_text(&self, url: &Url, incognito: bool) -> Result<String, FetchError> {
        self.requests
            .lock()
            .expect("mock lock poisoned")
            .push((url.to_string(), incognito));

        match self.responses.get(url.as_str()) {
            Some(Canned::Body(body)) => Ok(body.clone()),
            Some(Canned::Status(status)) => Err(FetchError::Status {
                url: url.to_string(),
                status: *status,
            }),
            None => Err(FetchError::Transport {
                url: url.to_string(),
                reason: "connection refused".into(),
            }),
        }
    }
}
