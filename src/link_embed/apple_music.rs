use if_chain::if_chain;
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use super::EmbedTransformer;

static COLLECTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)music\.apple\.com/(?P<country>[a-z]{2})/(?P<kind>album|playlist)/(?:(?P<name>[^/?#]+)/)?(?P<id>[^/?#]+)")
        .unwrap()
});
static STATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)music\.apple\.com/(?P<country>[a-z]{2})/station/(?P<name>[^/?#]+)/(?P<id>[^/?#]+)")
        .unwrap()
});
static TRACK_ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").unwrap());

const APPLE_EMBED_MARKERS: &[&str] = &["embed.music.apple.com"];

/// Albums and playlists
pub struct AppleMusicEmbed;

impl EmbedTransformer for AppleMusicEmbed {
    const PLATFORM: &'static str = "apple-music";
    const EMBED_MARKERS: &'static [&'static str] = APPLE_EMBED_MARKERS;

    fn embed_url(url: &str) -> Option<String> {
        let cap = COLLECTION_RE.captures(url)?;
        let country = cap.name("country").unwrap().as_str().to_ascii_lowercase();
        let kind = cap.name("kind").unwrap().as_str().to_ascii_lowercase();
        let id = cap.name("id").unwrap().as_str();

        let mut embed = format!("https://embed.music.apple.com/{country}/{kind}/{id}?app=music");
        // A song shared from an album page points at the album with `?i=<song id>`
        if_chain! {
            if kind == "album";
            if let Ok(parsed) = Url::parse(url);
            if let Some((_, track)) = parsed.query_pairs().find(|(key, _)| key == "i");
            if TRACK_ID_RE.is_match(&track);
            then {
                embed.push_str("&i=");
                embed.push_str(&track);
            }
        }
        Some(embed)
    }
}

pub struct AppleMusicStationEmbed;

impl EmbedTransformer for AppleMusicStationEmbed {
    const PLATFORM: &'static str = "apple-music-station";
    const EMBED_MARKERS: &'static [&'static str] = APPLE_EMBED_MARKERS;

    fn embed_url(url: &str) -> Option<String> {
        let cap = STATION_RE.captures(url)?;
        let country = cap.name("country").unwrap().as_str().to_ascii_lowercase();
        let name = cap.name("name").unwrap().as_str();
        let id = cap.name("id").unwrap().as_str();
        Some(format!(
            "https://embed.music.apple.com/{country}/station/{name}/{id}?app=music"
        ))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn album() {
        assert_eq!(
            "https://embed.music.apple.com/us/album/1440857781?app=music",
            AppleMusicEmbed::transform("https://music.apple.com/us/album/some-album/1440857781")
        );
        assert_eq!(
            "https://embed.music.apple.com/us/album/1440857781?app=music&i=1440857795",
            AppleMusicEmbed::transform(
                "https://music.apple.com/US/album/some-album/1440857781?i=1440857795"
            )
        );
        assert_eq!(
            "https://embed.music.apple.com/jp/album/1440857781?app=music",
            AppleMusicEmbed::transform("https://music.apple.com/jp/album/1440857781")
        );
    }

    #[test]
    fn playlist() {
        assert_eq!(
            "https://embed.music.apple.com/gb/playlist/pl.u-123?app=music",
            AppleMusicEmbed::transform("https://music.apple.com/gb/playlist/chill/pl.u-123?l=en")
        );
    }

    #[test]
    fn station() {
        assert_eq!(
            "https://embed.music.apple.com/us/station/my-station/ra.123?app=music",
            AppleMusicStationEmbed::transform("https://music.apple.com/us/station/my-station/ra.123")
        );
    }

    #[test]
    fn embed_link_unchanged() {
        let url = "https://embed.music.apple.com/us/album/1440857781?app=music";
        assert_eq!(url, AppleMusicEmbed::transform(url));
        let url = "https://embed.music.apple.com/us/station/my-station/ra.123?app=music";
        assert_eq!(url, AppleMusicStationEmbed::transform(url));
    }

    #[test]
    fn unrecognized_path() {
        assert_eq!(None, AppleMusicEmbed::embed_url("https://music.apple.com/us/artist/name/123"));
        assert_eq!(None, AppleMusicStationEmbed::embed_url("https://music.apple.com/us/station/ra.123"));
    }
}
