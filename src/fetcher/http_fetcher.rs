use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::app::Result;
use crate::fetcher::{FetchError, Fetcher, FetcherConfig};

/// reqwest-backed fetcher.
///
/// Keeps two clients: one with a cookie store for regular requests and one
/// without for incognito requests, so private resolutions never see or
/// leave cookies.
pub struct HttpFetcher {
    client: Client,
    incognito_client: Client,
}

impl HttpFetcher {
    pub fn new(config: &FetcherConfig) -> Result<Self> {
        let client = Self::builder(config).cookie_store(config.cookies).build()?;
        let incognito_client = Self::builder(config).build()?;

        Ok(Self {
            client,
            incognito_client,
        })
    }

    fn builder(config: &FetcherConfig) -> reqwest::ClientBuilder {
        Client::builder()
            .timeout(config.timeout())
            .gzip(true)
            .brotli(true)
            .user_agent(config.user_agent.clone())
    }

    fn client(&self, incognito: bool) -> &Client {
        if incognito {
            &self.incognito_client
        } else {
            &self.client
        }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch_text(&self, url: &Url, incognito: bool) -> std::result::Result<String, FetchError> {
        tracing::debug!("GET {} (incognito: {})", url, incognito);

        let response = self
            .client(incognito)
            .get(url.clone())
            .send()
            .await
            .map_err(|e| FetchError::Transport {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("{} answered {}", url, status);
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| FetchError::Decode {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Local server that sets a cookie on every response and records the
    /// `Cookie` header of each request it receives.
    async fn cookie_server() -> (Url, Arc<Mutex<Vec<Option<String>>>>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let log = seen.clone();

        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let mut request = Vec::new();
                let mut chunk = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut chunk).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => request.extend_from_slice(&chunk[..n]),
                    }
                }

                let request = String::from_utf8_lossy(&request);
                let cookie = request.lines().find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("cookie").then(|| value.trim().to_string())
                });
                log.lock().unwrap().push(cookie);

                let response = "HTTP/1.1 200 OK\r\n\
                                Set-Cookie: session=abc; Path=/\r\n\
                                Content-Length: 2\r\n\
                                Connection: close\r\n\r\nok";
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        (Url::parse(&format!("http://{}/", addr)).unwrap(), seen)
    }

    #[tokio::test]
    async fn test_incognito_requests_carry_no_cookies() {
        let (url, seen) = cookie_server().await;
        let fetcher = HttpFetcher::new(&FetcherConfig::default()).unwrap();

        assert_eq!(fetcher.fetch_text(&url, false).await.unwrap(), "ok");
        assert_eq!(fetcher.fetch_text(&url, false).await.unwrap(), "ok");
        assert_eq!(fetcher.fetch_text(&url, true).await.unwrap(), "ok");
        assert_eq!(fetcher.fetch_text(&url, true).await.unwrap(), "ok");

        assert_eq!(
            *seen.lock().unwrap(),
            vec![None, Some("session=abc".to_string()), None, None]
        );
    }

    #[test]
    fn test_builds_with_default_config() {
        assert!(HttpFetcher::new(&FetcherConfig::default()).is_ok());
    }

    #[test]
    fn test_builds_without_cookies() {
        let config = FetcherConfig {
            cookies: false,
            ..Default::default()
        };
        assert!(HttpFetcher::new(&config).is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        let config = FetcherConfig {
            timeout_secs: 2,
            ..Default::default()
        };
        let fetcher = HttpFetcher::new(&config).unwrap();
        // Port 9 (discard) on localhost is closed in test environments.
        let url = Url::parse("http://127.0.0.1:9/").unwrap();
        let err = fetcher.fetch_text(&url, true).await.unwrap_err();
        assert!(matches!(err, FetchError::Transport { .. }));
    }
}
