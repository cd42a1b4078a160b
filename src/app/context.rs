use std::sync::Arc;

use crate::app::error::Result;
use crate::config::Config;
use crate::fetcher::{Fetcher, HttpFetcher};
use crate::resolver::parallel::{ParallelResolver, DEFAULT_WORKERS};
use crate::resolver::Resolver;
use crate::rules::Registry;
use crate::settings::Settings;

/// Wires the resolver to its collaborators from a loaded [`Config`].
pub struct AppContext {
    pub config: Config,
    pub resolver: Arc<Resolver>,
    pub parallel_resolver: ParallelResolver,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self> {
        Self::with_workers(config, DEFAULT_WORKERS)
    }

    pub fn with_workers(config: Config, workers: usize) -> Result<Self> {
        let fetcher: Arc<dyn Fetcher> = Arc::new(HttpFetcher::new(&config.fetcher)?);
        Ok(Self::with_fetcher(config, fetcher, workers))
    }

    /// Build around an existing fetcher, e.g. a canned one in tests.
    pub fn with_fetcher(config: Config, fetcher: Arc<dyn Fetcher>, workers: usize) -> Self {
        let settings: Arc<dyn Settings> = Arc::new(config.settings());
        let resolver = Arc::new(
            Resolver::with_registry(Registry::builtin(), fetcher, settings)
                .with_max_depth(config.resolver.max_depth),
        );
        let parallel_resolver = ParallelResolver::with_workers(resolver.clone(), workers);

        Self {
            config,
            resolver,
            parallel_resolver,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ExtractOptions;
    use crate::fetcher::mock::MockFetcher;
    use crate::settings::PlaylistPreference;

    #[tokio::test]
    async fn test_config_reaches_resolver() {
        let mut config = Config::default();
        config.resolver.max_depth = 7;
        config.preferences.youtube_playlist = PlaylistPreference::Video;

        let ctx = AppContext::with_fetcher(config, Arc::new(MockFetcher::new()), 2);
        assert_eq!(ctx.resolver.max_depth(), 7);

        let result = ctx
            .resolver
            .extract_str(
                "https://www.youtube.com/watch?v=avt4ZWlVjdY&list=PL7nedIL_qbuZBS5ZAiGkjB1LW9C3zZvum",
                ExtractOptions::default(),
            )
            .await;
        assert_eq!(
            result,
            Ok("plugin://plugin.video.youtube/play/?video_id=avt4ZWlVjdY".to_string())
        );
    }

    #[test]
    fn test_http_context_builds() {
        assert!(AppContext::new(Config::default()).is_ok());
    }
}
