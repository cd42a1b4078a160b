use async_trait::async_trait;
use url::Url;

use crate::domain::Outcome;
use crate::resolver::ExtractContext;
use crate::rules::{Extractor, Rule};
use crate::sites::segments;

const SITE: &str = "VideoPress";
const API_URL: &str = "https://public-api.wordpress.com/rest/v1.1/videos/";

pub(crate) fn rules() -> Vec<Rule> {
    vec![Rule::new(
        SITE,
        &["*://videopress.com/v/*", "*://videopress.com/embed/*"],
        VideoPress,
    )]
}

/// Looks the video up in the WordPress REST API and plays its `original`
/// file.
struct VideoPress;

impl VideoPress {
    /// The id always lands as one path segment under the API root.
    fn api_url(id: &str) -> Option<Url> {
        let mut api = Url::parse(API_URL).ok()?;
        api.path_segments_mut().ok()?.pop_if_empty().push(id);
        Some(api)
    }
}

#[async_trait]
impl Extractor for VideoPress {
    async fn extract(&self, url: &Url, ctx: &ExtractContext<'_>) -> Outcome {
        let Some(id) = segments(url).last().copied() else {
            return Outcome::NotApplicable;
        };
        let Some(api) = Self::api_url(id) else {
            return Outcome::NotApplicable;
        };

        match ctx.fetch_json(&api).await {
            Ok(json) => match json["original"].as_str() {
                Some(original) => Outcome::Final(original.to_string()),
                None => Outcome::NotApplicable,
            },
            Err(e) => {
                tracing::debug!("{} lookup failed: {}", SITE, e);
                Outcome::NotApplicable
            }
        }
    }
}
