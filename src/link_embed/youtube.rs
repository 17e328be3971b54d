use once_cell::sync::Lazy;
use regex::Regex;

use super::EmbedTransformer;

static VIDEO_ID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:youtu\.be/|[?&]v=|/(?:shorts|live|v)/)(?P<id>[A-Za-z0-9_-]{11})(?:[^A-Za-z0-9_-]|$)")
        .unwrap()
});

pub struct YoutubeEmbed;

impl EmbedTransformer for YoutubeEmbed {
    const PLATFORM: &'static str = "youtube";
    const EMBED_MARKERS: &'static [&'static str] =
        &["youtube.com/embed/", "youtube-nocookie.com/embed/"];

    fn embed_url(url: &str) -> Option<String> {
        VIDEO_ID_RE
            .captures(url)
            .map(|cap| cap.name("id").unwrap())
            .map(|id| format!("https://www.youtube.com/embed/{}", id.as_str()))
    }
}
