mod apple_music;
mod instagram;
mod mixcloud;
mod soundcloud;
mod spotify;
mod tiktok;
mod youtube;

use tracing::{debug, warn};

use self::apple_music::{AppleMusicEmbed, AppleMusicStationEmbed};
use self::instagram::InstagramEmbed;
use self::mixcloud::MixcloudEmbed;
use self::soundcloud::SoundcloudEmbed;
use self::spotify::SpotifyEmbed;
use self::tiktok::TiktokEmbed;
use self::youtube::YoutubeEmbed;
use crate::media_type::MediaType;

/// Rewrites a canonical url of one platform into its embeddable form
pub trait EmbedTransformer {
    const PLATFORM: &'static str;

    /// Substrings only present in urls already in embed form
    const EMBED_MARKERS: &'static [&'static str] = &[];

    /// Extract the identifying parts of `url` and fill the platform's embed template
    fn embed_url(url: &str) -> Option<String> {
        Some(url.to_owned())
    }

    fn is_embed_url(url: &str) -> bool {
        let url = url.to_ascii_lowercase();
        Self::EMBED_MARKERS
            .iter()
            .any(|marker| url.contains(marker))
    }

    fn transform(url: &str) -> String {
        if Self::is_embed_url(url) {
            debug!(platform = Self::PLATFORM, url, "already an embed url");
            return url.to_owned();
        }
        match Self::embed_url(url) {
            Some(embed) => {
                debug!(platform = Self::PLATFORM, url, embed = %embed, "generated embed url");
                embed
            }
            None => {
                warn!(platform = Self::PLATFORM, url, "could not generate embed url");
                url.to_owned()
            }
        }
    }
}

struct Passthrough;

impl EmbedTransformer for Passthrough {
    const PLATFORM: &'static str = "other";
}

/// Transform a canonical url already classified as `media_type` into its embed url.
///
/// Urls that do not match the platform's expected shape are returned unchanged.
pub fn transform(media_type: MediaType, url: &str) -> String {
    match media_type {
        MediaType::Youtube => YoutubeEmbed::transform(url),
        MediaType::Soundcloud | MediaType::SoundcloudPlaylist => SoundcloudEmbed::transform(url),
        MediaType::Spotify | MediaType::SpotifyPlaylist => SpotifyEmbed::transform(url),
        MediaType::AppleMusicAlbum | MediaType::AppleMusicPlaylist => {
            AppleMusicEmbed::transform(url)
        }
        MediaType::AppleMusicStation => AppleMusicStationEmbed::transform(url),
        MediaType::Mixcloud => MixcloudEmbed::transform(url),
        MediaType::InstagramReel => InstagramEmbed::transform(url),
        MediaType::Tiktok => TiktokEmbed::transform(url),
        MediaType::Other => Passthrough::transform(url),
    }
}

/// Whether `url` is already in the embed form of `media_type`'s platform
pub fn is_embed_url(media_type: MediaType, url: &str) -> bool {
    match media_type {
        MediaType::Youtube => YoutubeEmbed::is_embed_url(url),
        MediaType::Soundcloud | MediaType::SoundcloudPlaylist => {
            SoundcloudEmbed::is_embed_url(url)
        }
        MediaType::Spotify | MediaType::SpotifyPlaylist => SpotifyEmbed::is_embed_url(url),
        MediaType::AppleMusicAlbum | MediaType::AppleMusicPlaylist => {
            AppleMusicEmbed::is_embed_url(url)
        }
        MediaType::AppleMusicStation => AppleMusicStationEmbed::is_embed_url(url),
        MediaType::Mixcloud => MixcloudEmbed::is_embed_url(url),
        MediaType::InstagramReel => InstagramEmbed::is_embed_url(url),
        MediaType::Tiktok => TiktokEmbed::is_embed_url(url),
        MediaType::Other => Passthrough::is_embed_url(url),
    }
}
