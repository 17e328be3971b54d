use std::path::Path;

use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::{EmbedError, Result};

pub static CONFIG_FILE: &str = "embed.toml";
pub static ENV_PREFIX: &str = "MEDIA_EMBED_";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AspectRatio {
    pub width: u32,
    pub height: u32,
}

impl AspectRatio {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width divided by height
    pub fn ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }
}

/// Frame sizes used when embedding each platform's player, in pixels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dimensions {
    pub youtube_aspect: AspectRatio,
    pub soundcloud_track_height: u32,
    pub soundcloud_playlist_height: u32,
    pub spotify_track_height: u32,
    pub spotify_playlist_height: u32,
    pub apple_music_album_height: u32,
    pub apple_music_station_height: u32,
    pub apple_music_playlist_height: u32,
    pub mixcloud_height: u32,
    pub instagram_aspect: AspectRatio,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            youtube_aspect: AspectRatio::new(16, 9),
            soundcloud_track_height: 300,
            soundcloud_playlist_height: 400,
            spotify_track_height: 152,
            spotify_playlist_height: 352,
            apple_music_album_height: 175,
            apple_music_station_height: 175,
            apple_music_playlist_height: 450,
            mixcloud_height: 120,
            instagram_aspect: AspectRatio::new(4, 5),
        }
    }
}

impl Dimensions {
    pub fn validate(&self) -> Result<()> {
        let heights = [
            ("soundcloud_track_height", self.soundcloud_track_height),
            ("soundcloud_playlist_height", self.soundcloud_playlist_height),
            ("spotify_track_height", self.spotify_track_height),
            ("spotify_playlist_height", self.spotify_playlist_height),
            ("apple_music_album_height", self.apple_music_album_height),
            ("apple_music_station_height", self.apple_music_station_height),
            ("apple_music_playlist_height", self.apple_music_playlist_height),
            ("mixcloud_height", self.mixcloud_height),
        ];
        if let Some((field, _)) = heights.iter().find(|(_, height)| *height == 0) {
            return Err(EmbedError::InvalidDimension {
                field: *field,
                reason: "height must be greater than zero",
            });
        }

        let aspects = [
            ("youtube_aspect", self.youtube_aspect),
            ("instagram_aspect", self.instagram_aspect),
        ];
        if let Some((field, _)) = aspects
            .iter()
            .find(|(_, aspect)| aspect.width == 0 || aspect.height == 0)
        {
            return Err(EmbedError::InvalidDimension {
                field: *field,
                reason: "aspect ratio terms must be greater than zero",
            });
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dimensions: Dimensions,
}

impl Config {
    pub fn get_config() -> Result<Self> {
        Self::from_file(CONFIG_FILE)
    }

    /// Read `path` (if present) overridden by `MEDIA_EMBED_` environment variables
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let config: Config = Figment::new()
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;
        config.dimensions.validate()?;
        Ok(config)
    }
}
