//! Configuration management for playlink.
//!
//! Configuration is read from `~/.config/playlink/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is created.

use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::fetcher::FetcherConfig;
use crate::resolver::DEFAULT_MAX_DEPTH;
use crate::settings::{MemorySettings, PlaylistPreference};

/// Main configuration struct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub resolver: ResolverConfig,
    pub fetcher: FetcherConfig,
    pub preferences: PreferenceConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Hops allowed before a chain fails with `tooDeep` (default: 3)
    pub max_depth: u32,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PreferenceConfig {
    /// What to play when a YouTube link names both a video and a playlist
    pub youtube_playlist: PlaylistPreference,
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, creates a default one with comments.
    /// If the config file exists but is invalid, returns an error.
    /// Missing fields in the config file will use default values.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::default_config_path()?)
    }

    /// Same as [`Config::load`], for an explicit path.
    pub fn load_from(config_path: &Path) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            Self::create_default_config(config_path)?;
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| ConfigError::Io {
            path: config_path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: config_path.to_path_buf(),
            source: e,
        })?;

        tracing::debug!("Loaded config from {}", config_path.display());
        Ok(config)
    }

    /// Get the default config file path: `~/.config/playlink/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("playlink").join("config.toml"))
    }

    /// The preference store handed to extractors.
    pub fn settings(&self) -> MemorySettings {
        MemorySettings::new().with_playlist_preference(self.preferences.youtube_playlist)
    }

    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        file.write_all(Self::default_config_content().as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        tracing::info!("Created default config at {}", path.display());
        Ok(())
    }

    fn default_config_content() -> String {
        format!(
            r##"# playlink configuration

[resolver]
# How many times one link may lead to another (article -> embedded player)
max_depth = {max_depth}

[fetcher]
# Request timeout in seconds
timeout_secs = 10

# User agent sent with every request
user_agent = "playlink/{version}"

# Keep cookies between requests (never used for incognito requests)
cookies = true

[preferences]
# When a YouTube link has both a video and a playlist: "playlist" or "video"
youtube_playlist = "playlist"
"##,
            max_depth = DEFAULT_MAX_DEPTH,
            version = env!("CARGO_PKG_VERSION"),
        )
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
