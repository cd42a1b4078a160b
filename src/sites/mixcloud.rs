use async_trait::async_trait;
use url::Url;

use crate::domain::{Outcome, ResolveError};
use crate::resolver::ExtractContext;
use crate::rules::{Extractor, Rule};
use crate::sites::{encode, segments};

const SITE: &str = "Mixcloud";
const PLUGIN_URL: &str = "plugin://plugin.audio.mixcloud/";

pub(crate) fn rules() -> Vec<Rule> {
    vec![Rule::new(
        SITE,
        &["*://www.mixcloud.com/*/", "*://www.mixcloud.com/*/*/"],
        Mixcloud,
    )]
}

/// Mixes live at `/<user>/<mix>/`. One-segment pages are profiles or the
/// discovery area and hold no single mix.
struct Mixcloud;

#[async_trait]
impl Extractor for Mixcloud {
    async fn extract(&self, url: &Url, _ctx: &ExtractContext<'_>) -> Outcome {
        let segments = segments(url);
        if segments.len() < 2 || segments[0] == "discover" {
            return ResolveError::no_audio(SITE, url.path()).into();
        }

        Outcome::plugin(format!("{}?mode=40&key={}", PLUGIN_URL, encode(url.path())))
    }
}
