use once_cell::sync::Lazy;
use regex::Regex;

use super::EmbedTransformer;

static ITEM_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)spotify\.com/(?:intl-[a-z]{2}(?:-[a-z]{2})?/)?(?P<kind>track|playlist|album|episode|show)/(?P<id>[A-Za-z0-9]+)")
        .unwrap()
});

pub struct SpotifyEmbed;

impl EmbedTransformer for SpotifyEmbed {
    const PLATFORM: &'static str = "spotify";
    const EMBED_MARKERS: &'static [&'static str] = &["open.spotify.com/embed"];

    fn embed_url(url: &str) -> Option<String> {
        let cap = ITEM_RE.captures(url)?;
        let kind = cap.name("kind").unwrap().as_str().to_ascii_lowercase();
        let id = cap.name("id").unwrap().as_str();
        Some(format!("https://open.spotify.com/embed/{kind}/{id}"))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn items() {
        assert_eq!(
            "https://open.spotify.com/embed/track/4uLU6hMCjMI75M1A2tKUQC",
            SpotifyEmbed::transform("https://open.spotify.com/track/4uLU6hMCjMI75M1A2tKUQC?si=1234")
        );
        assert_eq!(
            "https://open.spotify.com/embed/playlist/37i9dQZF1DXcBWIGoYBM5M",
            SpotifyEmbed::transform("https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M")
        );
        assert_eq!(
            "https://open.spotify.com/embed/album/1DFixLWuPkv3KT3TnV35m3",
            SpotifyEmbed::transform("https://open.spotify.com/intl-de/album/1DFixLWuPkv3KT3TnV35m3")
        );
        assert_eq!(
            "https://open.spotify.com/embed/episode/512ojhOuo1ktJprKbVcKyQ",
            SpotifyEmbed::transform("https://open.spotify.com/episode/512ojhOuo1ktJprKbVcKyQ")
        );
    }

    #[test]
    fn embed_link_unchanged() {
        let url = "https://open.spotify.com/embed/track/4uLU6hMCjMI75M1A2tKUQC?utm_source=generator";
        assert_eq!(url, SpotifyEmbed::transform(url));
    }

    #[test]
    fn missing_id() {
        assert_eq!(None, SpotifyEmbed::embed_url("https://open.spotify.com/track/"));
        assert_eq!(None, SpotifyEmbed::embed_url("https://open.spotify.com/artist/0OdUWJ0sBjDrqHygGUXeCF"));
    }
}
