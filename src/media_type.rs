use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

/// Platform and content variant of a media link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MediaType {
    Youtube,
    Spotify,
    SpotifyPlaylist,
    Soundcloud,
    SoundcloudPlaylist,
    AppleMusicAlbum,
    AppleMusicPlaylist,
    AppleMusicStation,
    Mixcloud,
    InstagramReel,
    Tiktok,
    /// No supported platform recognized
    #[serde(alias = "unsupported")]
    Other,
}

impl MediaType {
    pub const ALL: [MediaType; 12] = [
        Self::Youtube,
        Self::Spotify,
        Self::SpotifyPlaylist,
        Self::Soundcloud,
        Self::SoundcloudPlaylist,
        Self::AppleMusicAlbum,
        Self::AppleMusicPlaylist,
        Self::AppleMusicStation,
        Self::Mixcloud,
        Self::InstagramReel,
        Self::Tiktok,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Youtube => "youtube",
            Self::Spotify => "spotify",
            Self::SpotifyPlaylist => "spotify-playlist",
            Self::Soundcloud => "soundcloud",
            Self::SoundcloudPlaylist => "soundcloud-playlist",
            Self::AppleMusicAlbum => "apple-music-album",
            Self::AppleMusicPlaylist => "apple-music-playlist",
            Self::AppleMusicStation => "apple-music-station",
            Self::Mixcloud => "mixcloud",
            Self::InstagramReel => "instagram-reel",
            Self::Tiktok => "tiktok",
            Self::Other => "other",
        }
    }

    pub fn is_supported(&self) -> bool {
        *self != Self::Other
    }
}

impl Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown media type `{0}`")]
pub struct UnknownMediaType(pub String);

impl FromStr for MediaType {
    type Err = UnknownMediaType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "unsupported" {
            return Ok(Self::Other);
        }
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownMediaType(s.to_owned()))
    }
}

/// Classify a canonical url. First matching platform wins.
pub fn classify(url: &str) -> MediaType {
    let media_type = match parse_lenient(url) {
        Some(parsed) => classify_parsed(&parsed),
        None => MediaType::Other,
    };
    debug!(url, %media_type, "classified link");
    media_type
}

fn classify_parsed(url: &Url) -> MediaType {
    let host = match url.host_str() {
        Some(host) => host.to_ascii_lowercase(),
        None => return MediaType::Other,
    };
    let path = url.path();

    if host.contains("youtube.com")
        || host.contains("youtu.be")
        || host.contains("youtube-nocookie.com")
    {
        MediaType::Youtube
    } else if host.contains("soundcloud.com") {
        // Player widget urls carry the track url in the query
        let query = url.query().unwrap_or_default().replace("%2F", "/");
        if path.contains("/sets/") || query.contains("/sets/") || query.contains("/playlists/") {
            MediaType::SoundcloudPlaylist
        } else {
            MediaType::Soundcloud
        }
    } else if host.contains("spotify.com") {
        if path.contains("/playlist/") {
            MediaType::SpotifyPlaylist
        } else {
            MediaType::Spotify
        }
    } else if host.contains("music.apple.com") {
        if path.contains("/station/") {
            MediaType::AppleMusicStation
        } else if path.contains("/album/") {
            MediaType::AppleMusicAlbum
        } else {
            MediaType::AppleMusicPlaylist
        }
    } else if host.contains("mixcloud.com") {
        MediaType::Mixcloud
    } else if host.contains("instagram.com") && (path.contains("/reel/") || path.contains("/p/")) {
        MediaType::InstagramReel
    } else if host.contains("tiktok.com") {
        MediaType::Tiktok
    } else {
        MediaType::Other
    }
}

/// Parse a url, accepting a bare `host/path` without a scheme
pub(crate) fn parse_lenient(url: &str) -> Option<Url> {
    if url.is_empty() || url.contains(char::is_whitespace) {
        return None;
    }
    match Url::parse(url) {
        Ok(parsed) if parsed.has_host() => Some(parsed),
        Ok(_) => None,
        Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse(&format!("https://{url}"))
            .ok()
            .filter(|parsed| parsed.host_str().map_or(false, |host| host.contains('.'))),
        Err(_) => None,
    }
}
