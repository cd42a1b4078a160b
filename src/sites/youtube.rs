//! YouTube watch pages, playlists and embedded players.
//!
//! Everything is handed to the YouTube add-on by id; nothing is fetched.

use async_trait::async_trait;
use url::Url;

use crate::domain::Outcome;
use crate::resolver::ExtractContext;
use crate::rules::{Extractor, Rule};
use crate::settings::PlaylistPreference;
use crate::sites::{encode, query_param, segments};

const SITE: &str = "YouTube";
const PLUGIN_URL: &str = "plugin://plugin.video.youtube/play/";

pub(crate) fn rules() -> Vec<Rule> {
    vec![
        Rule::new(
            SITE,
            &[
                "*://www.youtube.com/watch",
                "*://youtube.com/watch",
                "*://m.youtube.com/watch",
                "*://music.youtube.com/watch",
            ],
            Watch,
        ),
        Rule::new(
            SITE,
            &["*://www.youtube.com/playlist", "*://m.youtube.com/playlist"],
            Playlist,
        ),
        Rule::new(
            SITE,
            &[
                "*://www.youtube.com/embed/*",
                "*://www.youtube-nocookie.com/embed/*",
                "*://youtu.be/*",
            ],
            Embed,
        ),
    ]
}

fn video(id: &str) -> Outcome {
    Outcome::plugin(format!("{}?video_id={}", PLUGIN_URL, encode(id)))
}

fn playlist(id: &str) -> Outcome {
    Outcome::plugin(format!("{}?playlist_id={}", PLUGIN_URL, encode(id)))
}

/// `/watch?v=<video>&list=<playlist>`. When both ids are present the user's
/// playlist preference decides which one plays.
struct Watch;

#[async_trait]
impl Extractor for Watch {
    async fn extract(&self, url: &Url, ctx: &ExtractContext<'_>) -> Outcome {
        match (query_param(url, "v"), query_param(url, "list")) {
            (Some(video_id), Some(playlist_id)) => match ctx.playlist_preference() {
                PlaylistPreference::Playlist => playlist(&playlist_id),
                PlaylistPreference::Video => video(&video_id),
            },
            (Some(video_id), None) => video(&video_id),
            (None, Some(playlist_id)) => playlist(&playlist_id),
            (None, None) => Outcome::Unchanged,
        }
    }
}

struct Playlist;

#[async_trait]
impl Extractor for Playlist {
    async fn extract(&self, url: &Url, _ctx: &ExtractContext<'_>) -> Outcome {
        match query_param(url, "list") {
            Some(id) => playlist(&id),
            None => Outcome::Unchanged,
        }
    }
}

/// `/embed/<id>`, `youtu.be/<id>` and `/embed/videoseries?list=<id>`.
struct Embed;

#[async_trait]
impl Extractor for Embed {
    async fn extract(&self, url: &Url, _ctx: &ExtractContext<'_>) -> Outcome {
        match segments(url).last() {
            Some(&"videoseries") => match query_param(url, "list") {
                Some(id) => playlist(&id),
                None => Outcome::Unchanged,
            },
            Some(id) => video(id),
            None => Outcome::Unchanged,
        }
    }
}
