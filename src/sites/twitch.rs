use async_trait::async_trait;
use url::Url;

use crate::domain::{Outcome, ResolveError};
use crate::resolver::ExtractContext;
use crate::rules::{Extractor, Rule};
use crate::sites::{encode, segments};

const SITE: &str = "Twitch";
const PLUGIN_URL: &str = "plugin://plugin.video.twitch/?mode=play&";

/// Top-level pages that look like channel names but are not.
const RESERVED: &[&str] = &[
    "directory",
    "search",
    "settings",
    "videos",
    "downloads",
    "jobs",
    "p",
    "turbo",
    "friends",
    "subscriptions",
    "inventory",
    "wallet",
    "prime",
    "store",
];

pub(crate) fn rules() -> Vec<Rule> {
    vec![
        Rule::new(SITE, &["*://www.twitch.tv/videos/*"], TwitchVideo),
        Rule::new(
            SITE,
            &["*://clips.twitch.tv/*", "*://www.twitch.tv/*/clip/*"],
            TwitchClip,
        ),
        Rule::new(SITE, &["*://www.twitch.tv/*"], TwitchChannel),
    ]
}

struct TwitchChannel;

#[async_trait]
impl Extractor for TwitchChannel {
    async fn extract(&self, url: &Url, _ctx: &ExtractContext<'_>) -> Outcome {
        match segments(url).first() {
            Some(name) if !RESERVED.contains(name) => {
                Outcome::plugin(format!("{}channel_name={}", PLUGIN_URL, encode(name)))
            }
            _ => ResolveError::unsupported(SITE, url.path()).into(),
        }
    }
}

/// Past broadcasts, `/videos/<numeric id>`.
struct TwitchVideo;

#[async_trait]
impl Extractor for TwitchVideo {
    async fn extract(&self, url: &Url, _ctx: &ExtractContext<'_>) -> Outcome {
        match segments(url).last() {
            Some(id) if id.chars().all(|c| c.is_ascii_digit()) => {
                Outcome::plugin(format!("{}video_id={}", PLUGIN_URL, id))
            }
            _ => ResolveError::no_video(SITE, url.path()).into(),
        }
    }
}

struct TwitchClip;

#[async_trait]
impl Extractor for TwitchClip {
    async fn extract(&self, url: &Url, _ctx: &ExtractContext<'_>) -> Outcome {
        match segments(url).last() {
            Some(slug) => Outcome::plugin(format!("{}slug={}", PLUGIN_URL, encode(slug))),
            None => ResolveError::no_video(SITE, url.path()).into(),
        }
    }
}
