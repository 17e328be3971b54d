use once_cell::sync::Lazy;
use regex::Regex;

use super::EmbedTransformer;

static TRACK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:https?://)?(?:www\.|m\.)?soundcloud\.com/(?P<user>[^/?#]+)/(?P<slug>[^?#]+?)/?$")
        .unwrap()
});

static DISPLAY_FLAGS: &str = "&color=%23ff5500&auto_play=false&hide_related=false&show_comments=true&show_user=true&show_reposts=false&show_teaser=true";

pub struct SoundcloudEmbed;

impl EmbedTransformer for SoundcloudEmbed {
    const PLATFORM: &'static str = "soundcloud";
    const EMBED_MARKERS: &'static [&'static str] = &["w.soundcloud.com/player"];

    fn embed_url(url: &str) -> Option<String> {
        // Share links carry tracking parameters
        let url = url.split(['?', '#']).next().unwrap_or_default();
        let cap = TRACK_RE.captures(url)?;
        let user = cap.name("user").unwrap().as_str();
        let slug = cap.name("slug").unwrap().as_str();
        Some(format!(
            "https://w.soundcloud.com/player/?url=https://soundcloud.com/{user}/{slug}{DISPLAY_FLAGS}"
        ))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn track() {
        let embed = SoundcloudEmbed::transform("https://soundcloud.com/artist/track-name?si=abc");
        assert!(embed.starts_with(
            "https://w.soundcloud.com/player/?url=https://soundcloud.com/artist/track-name&"
        ));
        assert!(embed.ends_with("&show_teaser=true"));
        assert!(!embed.contains("si=abc"));
    }

    #[test]
    fn playlist() {
        assert_eq!(
            format!("https://w.soundcloud.com/player/?url=https://soundcloud.com/artist/sets/album-name{DISPLAY_FLAGS}"),
            SoundcloudEmbed::transform("https://m.soundcloud.com/artist/sets/album-name/")
        );
    }

    #[test]
    fn player_link_unchanged() {
        let url = "https://w.soundcloud.com/player/?url=https://soundcloud.com/x/y";
        assert_eq!(url, SoundcloudEmbed::transform(url));
    }

    #[test]
    fn scheme_less_track() {
        let embed = SoundcloudEmbed::transform("soundcloud.com/artist/track-name?si=abc");
        assert!(embed.starts_with(
            "https://w.soundcloud.com/player/?url=https://soundcloud.com/artist/track-name&"
        ));
    }

    #[test]
    fn profile_link() {
        assert_eq!(None, SoundcloudEmbed::embed_url("https://soundcloud.com/artist"));
        assert_eq!(None, SoundcloudEmbed::embed_url("https://on.soundcloud.com/AbCd"));
    }
}
