use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use crate::domain::Outcome;
use crate::resolver::ExtractContext;
use crate::rules::{Extractor, Rule};
use crate::sites::segments;

const SITE: &str = "PeerTube";

pub(crate) fn rules() -> Vec<Rule> {
    vec![Rule::new(
        SITE,
        &["*://*/videos/watch/*", "*://*/videos/embed/*", "*://*/w/*"],
        PeerTube,
    )]
}

/// PeerTube runs on any host, so the page shape alone proves nothing. The
/// instance API is queried, and anything short of a video record means the
/// rule does not apply.
struct PeerTube;

impl PeerTube {
    fn api_url(url: &Url, id: &str) -> Url {
        let mut api = url.clone();
        api.set_path(&format!("/api/v1/videos/{}", id));
        api.set_query(None);
        api.set_fragment(None);
        api
    }

    fn playable(video: &Value) -> Option<&str> {
        video["files"][0]["fileUrl"]
            .as_str()
            .or_else(|| video["streamingPlaylists"][0]["playlistUrl"].as_str())
    }
}

#[async_trait]
impl Extractor for PeerTube {
    async fn extract(&self, url: &Url, ctx: &ExtractContext<'_>) -> Outcome {
        let Some(id) = segments(url).last().copied() else {
            return Outcome::NotApplicable;
        };
        let api = Self::api_url(url, id);

        match ctx.fetch_json(&api).await {
            Ok(video) => match Self::playable(&video) {
                Some(file) => Outcome::Final(file.to_string()),
                None => Outcome::NotApplicable,
            },
            Err(e) => {
                tracing::debug!("{} lookup of {} failed: {}", SITE, url, e);
                Outcome::NotApplicable
            }
        }
    }
}
