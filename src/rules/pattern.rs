//! URL templates such as `*://www.youtube.com/embed/*`.
//!
//! A template is `<scheme>://<host><path>`:
//!
//! - scheme `*`, `http` or `https` accepts both `http` and `https`; any other
//!   scheme must match exactly,
//! - host `*` accepts any host, `*.example.com` accepts `example.com` and its
//!   subdomains, anything else is a literal compared case-insensitively,
//! - each path segment is a literal or `*`, which stands for exactly one
//!   non-empty segment. The URL must have as many segments as the template.
//!   A trailing slash on the template makes it mandatory on the URL.
//!
//! Query strings and fragments are never looked at.

use std::fmt;

use thiserror::Error;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("template `{0}` has no `://`")]
    MissingScheme(String),

    #[error("template `{0}` has an empty host")]
    EmptyHost(String),

    #[error("template `{0}` uses `*` inside a segment")]
    PartialWildcard(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum SchemeMatch {
    Web,
    Exact(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum HostMatch {
    Any,
    Exact(String),
    Subdomains(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Any,
    Literal(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTemplate {
    source: String,
    scheme: SchemeMatch,
    host: HostMatch,
    segments: Vec<Segment>,
    trailing_slash: bool,
}

impl UrlTemplate {
    pub fn parse(template: &str) -> Result<Self, TemplateError> {
        let (scheme, rest) = template
            .split_once("://")
            .ok_or_else(|| TemplateError::MissingScheme(template.to_string()))?;

        let scheme = match scheme.to_ascii_lowercase().as_str() {
            "*" | "http" | "https" => SchemeMatch::Web,
            other => SchemeMatch::Exact(other.to_string()),
        };

        let (host, path) = match rest.find('/') {
            Some(index) => rest.split_at(index),
            None => (rest, ""),
        };

        let host = match host.to_ascii_lowercase() {
            h if h.is_empty() => return Err(TemplateError::EmptyHost(template.to_string())),
            h if h == "*" => HostMatch::Any,
            h => match h.strip_prefix("*.") {
                Some(domain) => HostMatch::Subdomains(domain.to_string()),
                None => HostMatch::Exact(h),
            },
        };

        let (raw_segments, trailing_slash) = split_path(path);
        let segments = raw_segments
            .into_iter()
            .map(|segment| match segment {
                "*" => Ok(Segment::Any),
                s if s.contains('*') => Err(TemplateError::PartialWildcard(template.to_string())),
                s => Ok(Segment::Literal(s.to_string())),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            source: template.to_string(),
            scheme,
            host,
            segments,
            trailing_slash,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn matches(&self, url: &Url) -> bool {
        self.matches_scheme(url.scheme()) && self.matches_host(url.host_str()) && self.matches_path(url.path())
    }

    fn matches_scheme(&self, scheme: &str) -> bool {
        match &self.scheme {
            SchemeMatch::Web => scheme == "http" || scheme == "https",
            SchemeMatch::Exact(expected) => scheme.eq_ignore_ascii_case(expected),
        }
    }

    fn matches_host(&self, host: Option<&str>) -> bool {
        let Some(host) = host else {
            return false;
        };
        let host = host.to_ascii_lowercase();

        match &self.host {
            HostMatch::Any => !host.is_empty(),
            HostMatch::Exact(expected) => host == *expected,
            HostMatch::Subdomains(domain) => {
                host == *domain
                    || host
                        .strip_suffix(domain.as_str())
                        .is_some_and(|prefix| prefix.ends_with('.'))
            }
        }
    }

    fn matches_path(&self, path: &str) -> bool {
        let (segments, trailing_slash) = split_path(path);

        if segments.len() != self.segments.len() {
            return false;
        }
        if self.trailing_slash && !trailing_slash {
            return false;
        }

        self.segments
            .iter()
            .zip(segments)
            .all(|(expected, actual)| match expected {
                Segment::Any => !actual.is_empty(),
                Segment::Literal(literal) => literal == actual,
            })
    }
}

impl fmt::Display for UrlTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Split `/a/b/` into `(["a", "b"], true)`. The root path has no segments.
fn split_path(path: &str) -> (Vec<&str>, bool) {
    let path = path.strip_prefix('/').unwrap_or(path);
    let (body, trailing_slash) = match path.strip_suffix('/') {
        Some(body) => (body, true),
        None => (path, false),
    };

    if body.is_empty() {
        (Vec::new(), trailing_slash)
    } else {
        (body.split('/').collect(), trailing_slash)
    }
}
