use url::Url;

use crate::domain::ResolutionRequest;
use crate::fetcher::{Document, FetchError, Fetcher};
use crate::rules::Registry;
use crate::settings::{PlaylistPreference, Settings};

/// Everything an extractor may use while handling one request.
///
/// Fetch helpers forward the request's incognito flag, so extractors cannot
/// get it wrong.
pub struct ExtractContext<'a> {
    request: &'a ResolutionRequest,
    fetcher: &'a dyn Fetcher,
    settings: &'a dyn Settings,
    registry: &'a Registry,
}

impl<'a> ExtractContext<'a> {
    pub fn new(
        request: &'a ResolutionRequest,
        fetcher: &'a dyn Fetcher,
        settings: &'a dyn Settings,
        registry: &'a Registry,
    ) -> Self {
        Self {
            request,
            fetcher,
            settings,
            registry,
        }
    }

    pub fn request(&self) -> &ResolutionRequest {
        self.request
    }

    pub fn incognito(&self) -> bool {
        self.request.incognito()
    }

    pub fn playlist_preference(&self) -> PlaylistPreference {
        PlaylistPreference::from_settings(self.settings)
    }

    /// Whether some rule would pick `url` up on the next hop.
    pub fn is_resolvable(&self, url: &Url) -> bool {
        self.registry.find_rule(url).is_some()
    }

    pub async fn fetch_text(&self, url: &Url) -> Result<String, FetchError> {
        self.fetcher.fetch_text(url, self.incognito()).await
    }

    pub async fn fetch_json(&self, url: &Url) -> Result<serde_json::Value, FetchError> {
        self.fetcher.fetch_json(url, self.incognito()).await
    }

    pub async fn fetch_document(&self, url: &Url) -> Result<Document, FetchError> {
        self.fetcher.fetch_document(url, self.incognito()).await
    }
}
