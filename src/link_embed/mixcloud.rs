use once_cell::sync::Lazy;
use regex::Regex;
use url::form_urlencoded;

use super::EmbedTransformer;

static SHOW_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)mixcloud\.com/(?P<user>[^/?#]+)/(?P<show>[^/?#]+)").unwrap()
});

pub struct MixcloudEmbed;

impl EmbedTransformer for MixcloudEmbed {
    const PLATFORM: &'static str = "mixcloud";
    const EMBED_MARKERS: &'static [&'static str] = &["mixcloud.com/widget/"];

    fn embed_url(url: &str) -> Option<String> {
        let cap = SHOW_RE.captures(url)?;
        let feed = format!(
            "/{}/{}/",
            cap.name("user").unwrap().as_str(),
            cap.name("show").unwrap().as_str()
        );
        let feed: String = form_urlencoded::byte_serialize(feed.as_bytes()).collect();
        Some(format!(
            "https://www.mixcloud.com/widget/iframe/?hide_cover=1&dark=1&feed={feed}"
        ))
    }
}
