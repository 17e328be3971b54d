use once_cell::sync::Lazy;
use regex::Regex;

use super::EmbedTransformer;

static POST_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)instagram\.com/(?:[a-z0-9_.]+/)?(?:reel|p)/(?P<code>[A-Za-z0-9_-]+)")
        .unwrap()
});
static EMBED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)instagram\.com/(?:[a-z0-9_.]+/)?(?:reel|p)/[A-Za-z0-9_-]+/embed(?:[/?#]|$)")
        .unwrap()
});

/// Reels and posts, both embedded through the post endpoint
pub struct InstagramEmbed;

impl EmbedTransformer for InstagramEmbed {
    const PLATFORM: &'static str = "instagram";

    fn embed_url(url: &str) -> Option<String> {
        POST_RE
            .captures(url)
            .map(|cap| cap.name("code").unwrap())
            .map(|code| format!("https://www.instagram.com/p/{}/embed", code.as_str()))
    }

    fn is_embed_url(url: &str) -> bool {
        EMBED_RE.is_match(url)
    }
}
