//! The resolution dispatcher.
//!
//! ```text
//! URL → Registry lookup → Extractor → Outcome ─┬─ Final / Unchanged → caller
//!                  ▲                          ├─ Failure → caller
//!                  └──────── hop (depth+1) ◄──┘─ Further(url)
//! ```
//!
//! Hops are driven by an explicit loop over [`ResolutionRequest`] values, so
//! the depth bound holds no matter how the rules chain.

pub mod context;
pub mod parallel;

use std::sync::Arc;

use url::Url;

use crate::domain::{ExtractOptions, Outcome, ResolutionRequest, ResolveError};
use crate::fetcher::Fetcher;
use crate::rules::Registry;
use crate::settings::Settings;

pub use context::ExtractContext;

/// Hops allowed before giving up. Real pages nest one or two levels deep at
/// most (article → embedded player); this only exists to stop rule cycles.
pub const DEFAULT_MAX_DEPTH: u32 = 3;

pub struct Resolver {
    registry: Arc<Registry>,
    fetcher: Arc<dyn Fetcher>,
    settings: Arc<dyn Settings>,
    max_depth: u32,
}

impl Resolver {
    /// Resolver over the built-in rules.
    pub fn new(fetcher: Arc<dyn Fetcher>, settings: Arc<dyn Settings>) -> Self {
        Self::with_registry(Registry::builtin(), fetcher, settings)
    }

    pub fn with_registry(
        registry: Arc<Registry>,
        fetcher: Arc<dyn Fetcher>,
        settings: Arc<dyn Settings>,
    ) -> Self {
        Self {
            registry,
            fetcher,
            settings,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Resolve `url` into something the player can open.
    ///
    /// Returns the playable (or `plugin://`) URI, or the URL itself when no
    /// rule turns it into anything better. A failure at any hop ends the
    /// whole chain.
    pub async fn extract(&self, url: &Url, options: ExtractOptions) -> Result<String, ResolveError> {
        let mut request = ResolutionRequest::new(url.clone(), options);

        loop {
            let (site, outcome) = self.dispatch(&request).await;

            match outcome {
                Outcome::Unchanged | Outcome::NotApplicable => {
                    return Ok(request.target().to_string());
                }
                Outcome::Final(uri) => {
                    tracing::info!("Resolved {} to {}", url, uri);
                    return Ok(uri);
                }
                Outcome::Failure(err) => {
                    tracing::debug!("Resolution of {} failed: {}", request.target(), err);
                    return Err(err);
                }
                Outcome::Further(next) => {
                    if request.depth() >= self.max_depth {
                        tracing::warn!(
                            "Giving up on {} after {} hops (next: {})",
                            url,
                            request.depth(),
                            next
                        );
                        return Err(ResolveError::too_deep(
                            site.unwrap_or("Resolver"),
                            next.as_str(),
                        ));
                    }
                    tracing::debug!("Hop {} -> {} (depth {})", request.target(), next, request.depth() + 1);
                    request = request.hop(next);
                }
            }
        }
    }

    /// [`Resolver::extract`] for raw input, which may not even be a URL.
    pub async fn extract_str(&self, input: &str, options: ExtractOptions) -> Result<String, ResolveError> {
        let url = Url::parse(input.trim())
            .map_err(|e| ResolveError::unsupported("URL", format!("{} ({})", input, e)))?;
        self.extract(&url, options).await
    }

    /// Run the matching extractors for one request, falling through rules
    /// that turn out not to apply.
    async fn dispatch(&self, request: &ResolutionRequest) -> (Option<&'static str>, Outcome) {
        let ctx = ExtractContext::new(
            request,
            self.fetcher.as_ref(),
            self.settings.as_ref(),
            &self.registry,
        );
        let target = request.target();

        for rule in self.registry.matching(target) {
            tracing::debug!("{} matched {} (depth {})", rule.site(), target, request.depth());

            let outcome = rule.extractor().extract(target, &ctx).await;
            if matches!(outcome, Outcome::NotApplicable) {
                tracing::debug!("{} does not apply to {}", rule.site(), target);
                continue;
            }
            return (Some(rule.site()), outcome);
        }

        (None, Outcome::Unchanged)
    }
}
