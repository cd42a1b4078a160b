use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use url::Url;

use crate::domain::Outcome;
use crate::resolver::ExtractContext;
use crate::rules::{Extractor, Rule};
use crate::sites::{encode, segments};

const SITE: &str = "Rutube";

static VIDEO_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-f]{32}$").expect("valid video id pattern"));
static EMBED_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("valid embed id pattern"));

pub(crate) fn rules() -> Vec<Rule> {
    vec![
        Rule::new(SITE, &["*://rutube.ru/video/*/"], Rutube { id: &VIDEO_ID }),
        Rule::new(SITE, &["*://rutube.ru/play/embed/*"], Rutube { id: &EMBED_ID }),
    ]
}

/// Rutube hands out signed stream routes through its player options API;
/// the route cannot be derived from the page URL.
struct Rutube {
    id: &'static LazyLock<Regex>,
}

impl Rutube {
    fn options_url(id: &str, page: &Url) -> Option<Url> {
        let api = format!(
            "https://rutube.ru/api/play/options/{}/?format=json&no_404=true&referer={}",
            id,
            encode(page.as_str())
        );
        Url::parse(&api).ok()
    }
}

#[async_trait]
impl Extractor for Rutube {
    async fn extract(&self, url: &Url, ctx: &ExtractContext<'_>) -> Outcome {
        let Some(id) = segments(url).last().copied().filter(|id| self.id.is_match(id)) else {
            return Outcome::Unchanged;
        };
        let Some(api) = Self::options_url(id, url) else {
            return Outcome::Unchanged;
        };

        match ctx.fetch_json(&api).await {
            Ok(json) => match json["video_balancer"]["m3u8"].as_str() {
                Some(route) => Outcome::Final(route.to_string()),
                None => Outcome::Unchanged,
            },
            Err(e) => {
                tracing::debug!("{} options lookup failed: {}", SITE, e);
                Outcome::Unchanged
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetcher::mock::MockFetcher;
    use crate::settings::MemorySettings;
    use crate::sites::testing::run;

    const EMBED: &str = "https://rutube.ru/play/embed/11318635";
    const EMBED_API: &str = "https://rutube.ru/api/play/options/11318635/\
                             ?format=json&no_404=true&referer=https%3A%2F%2Frutube.ru%2Fplay%2Fembed%2F11318635";

    fn video() -> Rutube {
        Rutube { id: &VIDEO_ID }
    }

    fn embed() -> Rutube {
        Rutube { id: &EMBED_ID }
    }

    #[tokio::test]
    async fn test_malformed_id_makes_no_request() {
        let fetcher = MockFetcher::new();
        for url in ["https://rutube.ru/video/no_id/", "https://rutube.ru/video/0a1b2c3d4e5/"] {
            let outcome = run(&video(), url, &fetcher, &MemorySettings::new()).await;
            assert_eq!(outcome, Outcome::Unchanged);
        }
        assert!(fetcher.requests().is_empty());
    }

    #[tokio::test]
    async fn test_video_route() {
        let page = "https://rutube.ru/video/c3290999478b6c11addf33b26f4ca81c/?pl_id=2664175&pl_type=user";
        let api = format!(
            "https://rutube.ru/api/play/options/c3290999478b6c11addf33b26f4ca81c/\
             ?format=json&no_404=true&referer={}",
            encode(page)
        );
        let fetcher = MockFetcher::new().with_body(
            &api,
            r#"{"video_balancer": {"m3u8": "https://bl.rutube.ru/route/c3290999478b6c11addf33b26f4ca81c.m3u8?guids=x"}}"#,
        );

        let outcome = run(&video(), page, &fetcher, &MemorySettings::new()).await;
        assert_eq!(
            outcome,
            Outcome::Final("https://bl.rutube.ru/route/c3290999478b6c11addf33b26f4ca81c.m3u8?guids=x".to_string())
        );
    }

    #[tokio::test]
    async fn test_embed_route() {
        let fetcher = MockFetcher::new().with_body(
            EMBED_API,
            r#"{"video_balancer": {"m3u8": "https://bl.rutube.ru/route/7fa99a98331d643cc44d4f529fba762a.m3u8?"}}"#,
        );
        let outcome = run(&embed(), EMBED, &fetcher, &MemorySettings::new()).await;
        assert_eq!(
            outcome,
            Outcome::Final("https://bl.rutube.ru/route/7fa99a98331d643cc44d4f529fba762a.m3u8?".to_string())
        );
        assert_eq!(fetcher.request_urls(), vec![EMBED_API.to_string()]);
    }

    #[tokio::test]
    async fn test_access_denied_is_unchanged() {
        let fetcher = MockFetcher::new().with_body(EMBED_API, r#"{"detail": "forbidden"}"#);
        let outcome = run(&embed(), EMBED, &fetcher, &MemorySettings::new()).await;
        assert_eq!(outcome, Outcome::Unchanged);

        let fetcher = MockFetcher::new().with_status(EMBED_API, 403);
        let outcome = run(&embed(), EMBED, &fetcher, &MemorySettings::new()).await;
        assert_eq!(outcome, Outcome::Unchanged);
    }

    #[tokio::test]
    async fn test_embed_id_must_be_numeric() {
        let fetcher = MockFetcher::new();
        let outcome = run(&embed(), "https://rutube.ru/play/embed/abc", &fetcher, &MemorySettings::new()).await;
        assert_eq!(outcome, Outcome::Unchanged);
        assert!(fetcher.requests().is_empty());
    }
}
