use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio_test::{assert_err, assert_ok};
use url::Url;

use playlink::fetcher::{FetchError, Fetcher};
use playlink::settings::{MemorySettings, PlaylistPreference};
use playlink::{ErrorKind, ExtractOptions, Resolver};

/// Canned pages keyed by URL; anything else is unreachable.
#[derive(Default)]
struct CannedFetcher {
    pages: HashMap<String, String>,
    seen: Mutex<Vec<(String, bool)>>,
}

impl CannedFetcher {
    fn page(mut self, url: &str, body: &str) -> Self {
        self.pages.insert(url.to_string(), body.to_string());
        self
    }

    fn seen(&self) -> Vec<(String, bool)> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl Fetcher for CannedFetcher {
    async fn fetch_text(&self, url: &Url, incognito: bool) -> Result<String, FetchError> {
        self.seen.lock().unwrap().push((url.to_string(), incognito));
        self.pages.get(url.as_str()).cloned().ok_or_else(|| FetchError::Transport {
            url: url.to_string(),
            reason: "unreachable".into(),
        })
    }
}

fn resolver(fetcher: Arc<CannedFetcher>, preference: PlaylistPreference) -> Resolver {
    let settings = MemorySettings::new().with_playlist_preference(preference);
    Resolver::new(fetcher, Arc::new(settings))
}

fn offline(preference: PlaylistPreference) -> Resolver {
    resolver(Arc::new(CannedFetcher::default()), preference)
}

const WATCH: &str =
    "https://www.youtube.com/watch?v=avt4ZWlVjdY&list=PL7nedIL_qbuZBS5ZAiGkjB1LW9C3zZvum";
const WATCH_SWAPPED: &str =
    "https://www.youtube.com/watch?list=PL7nedIL_qbuZBS5ZAiGkjB1LW9C3zZvum&v=avt4ZWlVjdY";

#[tokio::test]
async fn mixcloud_discover_is_not_audio() {
    let err = assert_err!(
        offline(PlaylistPreference::Playlist)
            .extract_str("https://www.mixcloud.com/discover/", ExtractOptions::default())
            .await
    );
    assert_eq!(err.kind(), ErrorKind::NoAudio);
}

#[tokio::test]
async fn vimeo_video() {
    let resolved = assert_ok!(
        offline(PlaylistPreference::Playlist)
            .extract_str("https://vimeo.com/228786490", ExtractOptions::default())
            .await
    );
    assert_eq!(resolved, "plugin://plugin.video.vimeo/play/?video_id=228786490");
}

#[tokio::test]
async fn youtube_preference_decides_and_order_is_irrelevant() {
    for url in [WATCH, WATCH_SWAPPED] {
        let playlist = offline(PlaylistPreference::Playlist)
            .extract_str(url, ExtractOptions::default())
            .await;
        assert_eq!(
            playlist,
            Ok("plugin://plugin.video.youtube/play/?playlist_id=PL7nedIL_qbuZBS5ZAiGkjB1LW9C3zZvum".to_string())
        );

        let video = offline(PlaylistPreference::Video)
            .extract_str(url, ExtractOptions::default())
            .await;
        assert_eq!(
            video,
            Ok("plugin://plugin.video.youtube/play/?video_id=avt4ZWlVjdY".to_string())
        );
    }
}

#[tokio::test]
async fn article_embedding_youtube_takes_one_hop() {
    let article = "https://www.melty.fr/les-films-d-action-qui-ont-change-le-game-de-la-decennie-a702835.html";
    let fetcher = Arc::new(CannedFetcher::default().page(
        article,
        r#"<html><body>
             <iframe src="https://www.youtube.com/embed/mtolAJbj44s"></iframe>
           </body></html>"#,
    ));

    let one_hop = resolver(fetcher.clone(), PlaylistPreference::Playlist).with_max_depth(1);
    let resolved = assert_ok!(one_hop.extract_str(article, ExtractOptions::incognito()).await);
    assert_eq!(resolved, "plugin://plugin.video.youtube/play/?video_id=mtolAJbj44s");
    assert_eq!(fetcher.seen(), vec![(article.to_string(), true)]);

    let no_hops = resolver(fetcher, PlaylistPreference::Playlist).with_max_depth(0);
    let err = assert_err!(no_hops.extract_str(article, ExtractOptions::default()).await);
    assert_eq!(err.kind(), ErrorKind::TooDeep);
}

#[tokio::test]
async fn peertube_without_files_returns_url() {
    let fetcher = Arc::new(CannedFetcher::default().page("https://foo.com/api/v1/videos/bar", "{}"));
    let resolved = resolver(fetcher.clone(), PlaylistPreference::Playlist)
        .extract_str("https://foo.com/videos/watch/bar", ExtractOptions::default())
        .await;

    assert_eq!(resolved, Ok("https://foo.com/videos/watch/bar".to_string()));
    assert_eq!(
        fetcher.seen(),
        vec![("https://foo.com/api/v1/videos/bar".to_string(), false)]
    );
}

#[tokio::test]
async fn unreachable_peertube_api_is_not_an_error() {
    let resolved = offline(PlaylistPreference::Playlist)
        .extract_str("https://foo.com/videos/embed/bar", ExtractOptions::default())
        .await;
    assert_eq!(resolved, Ok("https://foo.com/videos/embed/bar".to_string()));
}

#[tokio::test]
async fn unknown_link_is_returned_unchanged() {
    let fetcher = Arc::new(CannedFetcher::default());
    let resolved = resolver(fetcher.clone(), PlaylistPreference::Playlist)
        .extract_str("https://example.org/some/page?x=1", ExtractOptions::default())
        .await;

    assert_eq!(resolved, Ok("https://example.org/some/page?x=1".to_string()));
    assert!(fetcher.seen().is_empty());
}

#[tokio::test]
async fn acestream_link() {
    let resolved = offline(PlaylistPreference::Playlist)
        .extract_str(
            "acestream://94c2fd8fb9bc8f2fc71a2cbe9d4b866f227a0209",
            ExtractOptions::default(),
        )
        .await;
    assert_eq!(
        resolved,
        Ok("plugin://program.plexus/?mode=1&name=&url=acestream%3A%2F%2F94c2fd8fb9bc8f2fc71a2cbe9d4b866f227a0209".to_string())
    );
}
