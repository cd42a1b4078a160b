//! Read-only user preferences consulted by some extractors.
//!
//! The store is injected into the resolver; extractors only ever read it.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Key holding the [`PlaylistPreference`].
pub const YOUTUBE_PLAYLIST: &str = "youtube-playlist";

pub trait Settings: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
}

/// Which id wins when a link carries both a video id and a playlist id.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum PlaylistPreference {
    /// Play the single video.
    Video,
    /// Play the whole playlist.
    #[default]
    Playlist,
}

impl PlaylistPreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Playlist => "playlist",
        }
    }

    /// Read from a settings store, falling back to the default when the key
    /// is missing or holds something unexpected.
    pub fn from_settings(settings: &dyn Settings) -> Self {
        settings
            .get(YOUTUBE_PLAYLIST)
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }
}

impl fmt::Display for PlaylistPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlaylistPreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "video" => Ok(Self::Video),
            "playlist" => Ok(Self::Playlist),
            other => Err(format!("Unknown playlist preference: {}", other)),
        }
    }
}

/// Settings held in memory, typically filled from the config file.
#[derive(Debug, Clone, Default)]
pub struct MemorySettings {
    values: HashMap<String, String>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.values.insert(key.to_string(), value.into());
        self
    }

    pub fn with_playlist_preference(self, preference: PlaylistPreference) -> Self {
        self.with(YOUTUBE_PLAYLIST, preference.as_str())
    }
}

impl Settings for MemorySettings {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}
