use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Machine-readable category of a resolution failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    /// The link matches a site but points at something that is not an item
    /// (a listing, a settings page, ...).
    #[serde(rename = "unsupported")]
    Unsupported,
    #[serde(rename = "novideo")]
    NoVideo,
    #[serde(rename = "noaudio")]
    NoAudio,
    /// The remote resource or the whole site could not be reached.
    #[serde(rename = "notFound")]
    NotFound,
    /// Too many hops; the rules are most likely cycling.
    #[serde(rename = "tooDeep")]
    TooDeep,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unsupported => "unsupported",
            Self::NoVideo => "novideo",
            Self::NoAudio => "noaudio",
            Self::NotFound => "notFound",
            Self::TooDeep => "tooDeep",
        }
    }

    fn headline(&self) -> &'static str {
        match self {
            Self::Unsupported => "Link not supported",
            Self::NoVideo => "No video found",
            Self::NoAudio => "No audio found",
            Self::NotFound => "Content unreachable",
            Self::TooDeep => "Too many redirections",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-facing resolution error.
///
/// Carries the [`ErrorKind`] plus the site label and a short detail (usually
/// the offending path or URL), which is enough for a consumer to render a
/// notification title and body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{site}: {kind} ({detail})")]
pub struct ResolveError {
    kind: ErrorKind,
    site: String,
    detail: String,
}

impl ResolveError {
    pub fn new(kind: ErrorKind, site: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            kind,
            site: site.into(),
            detail: detail.into(),
        }
    }

    pub fn unsupported(site: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unsupported, site, detail)
    }

    pub fn no_video(site: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::NoVideo, site, detail)
    }

    pub fn no_audio(site: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::NoAudio, site, detail)
    }

    pub fn not_found(site: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, site, detail)
    }

    pub fn too_deep(site: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::TooDeep, site, detail)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn site(&self) -> &str {
        &self.site
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }

    /// Short title for a notification, e.g. `No video found (novideo)`.
    pub fn title(&self) -> String {
        format!("{} ({})", self.kind.headline(), self.kind)
    }

    /// Longer message naming the site and what was rejected.
    pub fn message(&self) -> String {
        match self.kind {
            ErrorKind::Unsupported => {
                format!("{}: this page is not a playable item ({})", self.site, self.detail)
            }
            ErrorKind::NoVideo => format!("{}: no video at {}", self.site, self.detail),
            ErrorKind::NoAudio => format!("{}: no audio at {}", self.site, self.detail),
            ErrorKind::NotFound => format!("{}: could not reach {}", self.site, self.detail),
            ErrorKind::TooDeep => format!(
                "{}: gave up following embedded links at {}",
                self.site, self.detail
            ),
        }
    }
}
