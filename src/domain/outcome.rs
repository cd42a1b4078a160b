use url::Url;

use crate::domain::ResolveError;

/// What an extractor made of a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Recognised, but not playable right now; hand the URL back as is.
    Unchanged,
    /// The extractor queried the site and the rule turned out not to apply.
    /// The dispatcher moves on to the next matching rule.
    NotApplicable,
    /// A playable URI or a `plugin://` launch URI.
    Final(String),
    /// Another URL that needs resolving.
    Further(Url),
    Failure(ResolveError),
}

impl Outcome {
    pub fn plugin(uri: impl Into<String>) -> Self {
        Self::Final(uri.into())
    }
}

impl From<ResolveError> for Outcome {
    fn from(err: ResolveError) -> Self {
        Self::Failure(err)
    }
}
