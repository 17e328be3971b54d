use once_cell::sync::Lazy;
use regex::Regex;

use super::EmbedTransformer;

static VIDEO_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)tiktok\.com/(?P<user>@[A-Za-z0-9_.-]+)/video/(?P<id>\d+)").unwrap()
});

/// TikTok has no iframe player; links are reduced to their canonical form
pub struct TiktokEmbed;

impl EmbedTransformer for TiktokEmbed {
    const PLATFORM: &'static str = "tiktok";
    const EMBED_MARKERS: &'static [&'static str] = &["tiktok.com/embed"];

    fn embed_url(url: &str) -> Option<String> {
        let cap = VIDEO_RE.captures(url)?;
        Some(format!(
            "https://www.tiktok.com/{}/video/{}",
            cap.name("user").unwrap().as_str(),
            cap.name("id").unwrap().as_str()
        ))
    }
}
