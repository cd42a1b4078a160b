//! # playlink
//!
//! Turns links to media pages into URIs a remote media center can play:
//! either a direct media file / stream URL or a `plugin://` launch URI for
//! one of the player's add-ons.
//!
//! ## Architecture
//!
//! ```text
//! URL → Registry → Extractor → Outcome ─┬─ Final / Unchanged → caller
//!          ▲                            ├─ Failure → caller
//!          └──────── hop (depth+1) ◄────┘─ Further(url)
//! ```
//!
//! - [`rules`]: URL templates and the registry that maps them to extractors
//! - [`sites`]: one extractor per supported site
//! - [`resolver`]: the dispatcher and its bounded hop loop
//! - [`fetcher`]: HTTP access with an incognito (cookie-less) mode
//!
//! ## Quick Start
//!
//! ```bash
//! # Resolve a link
//! playlink resolve https://youtu.be/NSFbekvYOlI
//!
//! # Prefer the video when a link also names a playlist
//! playlink resolve --prefer video "https://www.youtube.com/watch?v=avt4ZWlVjdY&list=PL7nedIL_qbuZBS5ZAiGkjB1LW9C3zZvum"
//!
//! # List supported sites
//! playlink rules
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together the config,
/// the HTTP fetcher, the settings store and the resolver.
pub mod app;

/// Command-line interface using clap.
///
/// - `resolve <url>...` - Resolve links, optionally as JSON
/// - `rules` - List supported sites
pub mod cli;

/// Configuration loaded from `~/.config/playlink/config.toml`.
pub mod config;

/// Core domain types: requests, outcomes and user-facing errors.
pub mod domain;

/// HTTP fetching.
///
/// - [`Fetcher`](fetcher::Fetcher): Async trait for page and API requests
/// - [`HttpFetcher`](fetcher::http_fetcher::HttpFetcher): reqwest-based implementation
/// - [`Document`](fetcher::Document): Fetched HTML with selector queries
pub mod fetcher;

/// Resolution dispatcher.
///
/// - [`Resolver`](resolver::Resolver): Resolves one link, following hops
/// - [`ParallelResolver`](resolver::parallel::ParallelResolver): Concurrent resolution with semaphore
pub mod resolver;

/// URL templates and the rule registry.
pub mod rules;

/// Read-only user preferences.
pub mod settings;

/// Built-in site extractors.
pub mod sites;

pub use domain::{ErrorKind, ExtractOptions, Outcome, ResolveError};
pub use resolver::Resolver;
