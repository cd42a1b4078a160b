use async_trait::async_trait;
use url::Url;

use crate::domain::{Outcome, ResolveError};
use crate::resolver::ExtractContext;
use crate::rules::{Extractor, Rule};
use crate::sites::segments;

const SITE: &str = "Vimeo";
const PLUGIN_URL: &str = "plugin://plugin.video.vimeo/play/";

pub(crate) fn rules() -> Vec<Rule> {
    vec![Rule::new(
        SITE,
        &["*://vimeo.com/*", "*://player.vimeo.com/video/*"],
        Vimeo,
    )]
}

struct Vimeo;

#[async_trait]
impl Extractor for Vimeo {
    async fn extract(&self, url: &Url, _ctx: &ExtractContext<'_>) -> Outcome {
        match segments(url).last() {
            Some(id) if id.chars().all(|c| c.is_ascii_digit()) => {
                Outcome::plugin(format!("{}?video_id={}", PLUGIN_URL, id))
            }
            _ => ResolveError::no_video(SITE, url.path()).into(),
        }
    }
}
