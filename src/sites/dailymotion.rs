use async_trait::async_trait;
use url::Url;

use crate::domain::{Outcome, ResolveError};
use crate::resolver::ExtractContext;
use crate::rules::{Extractor, Rule};
use crate::sites::{encode, segments};

const SITE: &str = "Dailymotion";
const PLUGIN_URL: &str = "plugin://plugin.video.dailymotion_com/";

pub(crate) fn rules() -> Vec<Rule> {
    vec![Rule::new(
        SITE,
        &[
            "*://www.dailymotion.com/video/*",
            "*://www.dailymotion.com/embed/video/*",
            "*://dai.ly/*",
        ],
        Dailymotion,
    )]
}

/// Video pages are `/video/<id>_<slug>`; the short and embed forms carry the
/// bare id.
struct Dailymotion;

#[async_trait]
impl Extractor for Dailymotion {
    async fn extract(&self, url: &Url, _ctx: &ExtractContext<'_>) -> Outcome {
        let id = segments(url)
            .last()
            .and_then(|segment| segment.split('_').next())
            .filter(|id| !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric()));

        match id {
            Some(id) => Outcome::plugin(format!("{}?mode=playVideo&url={}", PLUGIN_URL, encode(id))),
            None => ResolveError::no_video(SITE, url.path()).into(),
        }
    }
}
