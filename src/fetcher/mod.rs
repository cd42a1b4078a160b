pub mod config;
pub mod document;
pub mod http_fetcher;
#[cfg(test)]
pub(crate) mod mock;

use async_trait::async_trait;
use thiserror::Error;
use url::Url;

use crate::domain::ResolveError;

pub use config::FetcherConfig;
pub use document::Document;
pub use http_fetcher::HttpFetcher;

/// Why a fetch produced nothing usable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("request to {url} failed: {reason}")]
    Transport { url: String, reason: String },

    #[error("could not decode response from {url}: {reason}")]
    Decode { url: String, reason: String },
}

impl FetchError {
    pub fn url(&self) -> &str {
        match self {
            Self::Status { url, .. } | Self::Transport { url, .. } | Self::Decode { url, .. } => url,
        }
    }

    /// Normalise into the user-facing taxonomy.
    pub fn into_failure(self, site: &str) -> ResolveError {
        ResolveError::not_found(site, self.url())
    }
}

/// One HTTP GET, returned as text, JSON or an HTML document.
///
/// `incognito` requests must not carry cookies or other ambient credentials.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch_text(&self, url: &Url, incognito: bool) -> Result<String, FetchError>;

    async fn fetch_json(&self, url: &Url, incognito: bool) -> Result<serde_json::Value, FetchError> {
        let body = self.fetch_text(url, incognito).await?;
        serde_json::from_str(&body).map_err(|e| FetchError::Decode {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }

    async fn fetch_document(&self, url: &Url, incognito: bool) -> Result<Document, FetchError> {
        let body = self.fetch_text(url, incognito).await?;
        Ok(Document::new(url.clone(), body))
    }
}
