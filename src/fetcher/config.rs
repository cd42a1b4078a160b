use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the HTTP fetcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetcherConfig {
    /// Request timeout in seconds (default: 10)
    pub timeout_secs: u64,

    /// User agent sent with every request
    pub user_agent: String,

    /// Keep cookies between non-incognito requests (default: true)
    pub cookies: bool,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            user_agent: concat!("playlink/", env!("CARGO_PKG_VERSION")).to_string(),
            cookies: true,
        }
    }
}

impl FetcherConfig {
    /// Get the request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
