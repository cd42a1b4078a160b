//! Rules pair URL templates with the extractor that knows the site.

pub mod pattern;
pub mod registry;

use std::fmt;

use async_trait::async_trait;
use url::Url;

use crate::domain::Outcome;
use crate::resolver::ExtractContext;

pub use pattern::{TemplateError, UrlTemplate};
pub use registry::Registry;

/// Site-specific extraction logic.
///
/// Implementations are stateless: everything they need comes from the URL
/// and the [`ExtractContext`]. The URL handed in is guaranteed to match one
/// of the rule's templates.
#[async_trait]
pub trait Extractor: Send + Sync {
    async fn extract(&self, url: &Url, ctx: &ExtractContext<'_>) -> Outcome;
}

pub struct Rule {
    site: &'static str,
    templates: Vec<UrlTemplate>,
    extractor: Box<dyn Extractor>,
}

impl Rule {
    /// Build a rule from literal templates.
    ///
    /// # Panics
    ///
    /// Panics if a template does not parse: built-in templates are literals,
    /// so this is a bug in the rule set.
    pub fn new(site: &'static str, templates: &[&str], extractor: impl Extractor + 'static) -> Self {
        let templates = templates
            .iter()
            .map(|t| UrlTemplate::parse(t).unwrap_or_else(|e| panic!("Invalid rule for {}: {}", site, e)))
            .collect();

        Self {
            site,
            templates,
            extractor: Box::new(extractor),
        }
    }

    pub fn site(&self) -> &'static str {
        self.site
    }

    pub fn templates(&self) -> &[UrlTemplate] {
        &self.templates
    }

    pub fn extractor(&self) -> &dyn Extractor {
        self.extractor.as_ref()
    }

    pub fn matches(&self, url: &Url) -> bool {
        self.templates.iter().any(|t| t.matches(url))
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("site", &self.site)
            .field("templates", &self.templates)
            .finish_non_exhaustive()
    }
}
