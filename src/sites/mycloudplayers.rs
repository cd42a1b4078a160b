use async_trait::async_trait;
use url::Url;

use crate::domain::Outcome;
use crate::resolver::ExtractContext;
use crate::rules::{Extractor, Rule};
use crate::sites::{encode, query_param};

const PLUGIN_URL: &str = "plugin://plugin.audio.soundcloud/play/";

pub(crate) fn rules() -> Vec<Rule> {
    vec![Rule::new("My Cloud Player", &["*://mycloudplayers.com/"], MyCloudPlayers)]
}

/// SoundCloud front end; the track id sits in `?play=`.
struct MyCloudPlayers;

#[async_trait]
impl Extractor for MyCloudPlayers {
    async fn extract(&self, url: &Url, _ctx: &ExtractContext<'_>) -> Outcome {
        match query_param(url, "play") {
            Some(id) => Outcome::plugin(format!("{}?audio_id={}", PLUGIN_URL, encode(&id))),
            None => Outcome::Unchanged,
        }
    }
}
