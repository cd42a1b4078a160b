use async_trait::async_trait;
use url::Url;

use crate::domain::{Outcome, ResolveError};
use crate::resolver::ExtractContext;
use crate::rules::{Extractor, Rule};
use crate::sites::{encode, segments};

const SITE: &str = "SoundCloud";
const PLUGIN_URL: &str = "plugin://plugin.audio.soundcloud/play/";

/// First path segments that belong to the site rather than to an artist.
const RESERVED: &[&str] = &["you", "discover", "search", "stations", "charts"];

pub(crate) fn rules() -> Vec<Rule> {
    vec![Rule::new(
        SITE,
        &["*://soundcloud.com/*/*", "*://m.soundcloud.com/*/*"],
        SoundCloud,
    )]
}

struct SoundCloud;

#[async_trait]
impl Extractor for SoundCloud {
    async fn extract(&self, url: &Url, _ctx: &ExtractContext<'_>) -> Outcome {
        let reserved = segments(url)
            .first()
            .is_some_and(|first| RESERVED.contains(first));
        if reserved {
            return ResolveError::no_audio(SITE, url.path()).into();
        }

        Outcome::plugin(format!("{}?url={}", PLUGIN_URL, encode(url.as_str())))
    }
}
