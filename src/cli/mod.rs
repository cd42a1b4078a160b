pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::resolver::parallel::DEFAULT_WORKERS;
use crate::settings::PlaylistPreference;

#[derive(Parser)]
#[command(name = "playlink")]
#[command(about = "Turn media page links into URIs a media center can play", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/playlink/config.toml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Number of links resolved concurrently
    #[arg(short, long, default_value_t = DEFAULT_WORKERS, global = true)]
    pub workers: usize,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve one or more links
    Resolve {
        /// Links to resolve
        #[arg(required = true)]
        urls: Vec<String>,

        /// Send no cookies with any request
        #[arg(long)]
        incognito: bool,

        /// What to play when a YouTube link names a video and a playlist
        #[arg(long, value_enum)]
        prefer: Option<PlaylistPreference>,

        /// Hops allowed before giving up
        #[arg(long)]
        max_depth: Option<u32>,

        /// Print one JSON object per link
        #[arg(long)]
        json: bool,
    },
    /// List the supported sites and their URL templates
    Rules,
}

impl Commands {
    /// Fold command-line overrides into the loaded config.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Commands::Resolve {
            prefer, max_depth, ..
        } = self
        {
            if let Some(prefer) = prefer {
                config.preferences.youtube_playlist = *prefer;
            }
            if let Some(max_depth) = max_depth {
                config.resolver.max_depth = *max_depth;
            }
        }
    }
}
