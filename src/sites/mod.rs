//! Built-in site extractors.
//!
//! One module per site. Each exposes `rules()`, and [`rules`] stitches them
//! together in registration order: site-specific rules first, generic
//! host matchers (PeerTube) last.

mod acestream;
mod article;
mod dailymotion;
mod melty;
mod mixcloud;
mod mycloudplayers;
mod peertube;
mod rutube;
pub mod script;
mod soundcloud;
mod twitch;
mod videopress;
mod vidlox;
mod vimeo;
mod vingtminutes;
mod youtube;

use url::Url;

use crate::rules::Rule;

/// Every built-in rule, in lookup order.
pub fn rules() -> Vec<Rule> {
    [
        acestream::rules(),
        dailymotion::rules(),
        mixcloud::rules(),
        mycloudplayers::rules(),
        soundcloud::rules(),
        twitch::rules(),
        vimeo::rules(),
        youtube::rules(),
        videopress::rules(),
        vidlox::rules(),
        rutube::rules(),
        melty::rules(),
        vingtminutes::rules(),
        peertube::rules(),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Value of the first `name` query parameter, if present and non-empty.
pub(crate) fn query_param(url: &Url, name: &str) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// Non-empty path segments of `url`.
pub(crate) fn segments(url: &Url) -> Vec<&str> {
    url.path_segments()
        .map(|segments| segments.filter(|s| !s.is_empty()).collect())
        .unwrap_or_default()
}

/// Percent-encode a value for a `plugin://` query string.
pub(crate) fn encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

#[cfg(test)]
pub(crate) mod testing {
    use url::Url;

    use crate::domain::{ExtractOptions, Outcome, ResolutionRequest};
    use crate::fetcher::mock::MockFetcher;
    use crate::resolver::ExtractContext;
    use crate::rules::{Extractor, Registry};
    use crate::settings::MemorySettings;

    /// Run one extractor against `url`, outside of the dispatcher.
    pub async fn run(
        extractor: &dyn Extractor,
        url: &str,
        fetcher: &MockFetcher,
        settings: &MemorySettings,
    ) -> Outcome {
        let url = Url::parse(url).unwrap();
        let request = ResolutionRequest::new(url.clone(), ExtractOptions::default());
        let registry = Registry::builtin();
        let ctx = ExtractContext::new(&request, fetcher, settings, &registry);
        extractor.extract(&url, &ctx).await
    }

    /// [`run`] with no network and default settings.
    pub async fn run_offline(extractor: &dyn Extractor, url: &str) -> Outcome {
        run(extractor, url, &MockFetcher::new(), &MemorySettings::new()).await
    }
}
