use itertools::Itertools;
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::config::{AspectRatio, Dimensions};
use crate::media_type::MediaType;

pub const YOUTUBE_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share";
pub const SOUNDCLOUD_ALLOW: &str = "autoplay";
pub const SPOTIFY_ALLOW: &str =
    "autoplay; clipboard-write; encrypted-media; fullscreen; picture-in-picture";
pub const APPLE_MUSIC_ALLOW: &str = "autoplay *; encrypted-media *; fullscreen *; clipboard-write";
// Apple's player refuses to load without exactly this token set
pub const APPLE_MUSIC_SANDBOX: &str = "allow-forms allow-popups allow-same-origin allow-scripts allow-storage-access-by-user-activation allow-top-navigation-by-user-activation";
pub const MIXCLOUD_ALLOW: &str = "autoplay";
pub const INSTAGRAM_ALLOW: &str =
    "autoplay; clipboard-write; encrypted-media; fullscreen; picture-in-picture; web-share";

static DEFAULT_DIMENSIONS: Lazy<Dimensions> = Lazy::new(Dimensions::default);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Frame {
    /// Full width, height follows the aspect ratio
    Aspect(AspectRatio),
    /// Full width, fixed pixel height
    FixedHeight(u32),
}

/// Attributes needed to embed a player iframe
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderDescriptor {
    pub frame: Frame,
    pub allow: &'static str,
    pub allow_fullscreen: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sandbox: Option<&'static str>,
    pub scrollable: bool,
    pub transparent: bool,
    pub rounded: bool,
}

impl RenderDescriptor {
    fn new(frame: Frame, allow: &'static str) -> Self {
        Self {
            frame,
            allow,
            allow_fullscreen: false,
            sandbox: None,
            scrollable: false,
            transparent: false,
            rounded: false,
        }
    }

    pub fn iframe_html(&self, src: &str, title: Option<&str>) -> String {
        let mut attributes = vec![("src", escape_attribute(src))];
        if let Some(title) = title {
            attributes.push(("title", escape_attribute(title)));
        }

        let mut style = vec!["width: 100%".to_owned(), "border: 0".to_owned()];
        match self.frame {
            Frame::Aspect(aspect) => {
                style.push(format!("aspect-ratio: {} / {}", aspect.width, aspect.height));
            }
            Frame::FixedHeight(height) => {
                attributes.push(("width", "100%".to_owned()));
                attributes.push(("height", height.to_string()));
            }
        }
        if self.transparent {
            style.push("background: transparent".to_owned());
        }
        if self.rounded {
            style.push("border-radius: 12px".to_owned());
        }

        attributes.push(("allow", self.allow.to_owned()));
        if let Some(sandbox) = self.sandbox {
            attributes.push(("sandbox", sandbox.to_owned()));
        }
        if !self.scrollable {
            attributes.push(("scrolling", "no".to_owned()));
        }
        attributes.push(("frameborder", "0".to_owned()));
        attributes.push(("loading", "lazy".to_owned()));
        attributes.push(("style", style.join("; ")));

        let mut html = format!(
            "<iframe {}",
            attributes
                .iter()
                .map(|(name, value)| format!("{name}=\"{value}\""))
                .join(" ")
        );
        if self.allow_fullscreen {
            html.push_str(" allowfullscreen");
        }
        html.push_str("></iframe>");
        html
    }
}

/// How the presentation layer should show a media link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Rendering {
    Iframe(RenderDescriptor),
    /// No embeddable player, show a plain external link
    Link,
}

impl Rendering {
    pub fn descriptor(&self) -> Option<&RenderDescriptor> {
        match self {
            Self::Iframe(descriptor) => Some(descriptor),
            Self::Link => None,
        }
    }

    pub fn html(&self, src: &str, title: Option<&str>) -> String {
        match self {
            Self::Iframe(descriptor) => descriptor.iframe_html(src, title),
            Self::Link => format!(
                "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
                escape_attribute(src),
                escape_attribute(title.unwrap_or(src))
            ),
        }
    }
}

/// Rendering of `media_type` with the default dimension table
pub fn describe_rendering(media_type: MediaType) -> Rendering {
    DEFAULT_DIMENSIONS.rendering(media_type)
}

impl Dimensions {
    pub fn rendering(&self, media_type: MediaType) -> Rendering {
        let descriptor = match media_type {
            MediaType::Youtube => RenderDescriptor {
                allow_fullscreen: true,
                ..RenderDescriptor::new(Frame::Aspect(self.youtube_aspect), YOUTUBE_ALLOW)
            },
            MediaType::Soundcloud => soundcloud(self.soundcloud_track_height),
            MediaType::SoundcloudPlaylist => soundcloud(self.soundcloud_playlist_height),
            MediaType::Spotify => spotify(self.spotify_track_height),
            MediaType::SpotifyPlaylist => spotify(self.spotify_playlist_height),
            MediaType::AppleMusicAlbum => apple_music(self.apple_music_album_height),
            MediaType::AppleMusicStation => apple_music(self.apple_music_station_height),
            MediaType::AppleMusicPlaylist => apple_music(self.apple_music_playlist_height),
            MediaType::Mixcloud => RenderDescriptor {
                transparent: true,
                ..RenderDescriptor::new(Frame::FixedHeight(self.mixcloud_height), MIXCLOUD_ALLOW)
            },
            MediaType::InstagramReel => RenderDescriptor {
                allow_fullscreen: true,
                ..RenderDescriptor::new(Frame::Aspect(self.instagram_aspect), INSTAGRAM_ALLOW)
            },
            MediaType::Tiktok | MediaType::Other => return Rendering::Link,
        };
        Rendering::Iframe(descriptor)
    }
}

fn soundcloud(height: u32) -> RenderDescriptor {
    RenderDescriptor {
        transparent: true,
        ..RenderDescriptor::new(Frame::FixedHeight(height), SOUNDCLOUD_ALLOW)
    }
}

fn spotify(height: u32) -> RenderDescriptor {
    RenderDescriptor {
        rounded: true,
        ..RenderDescriptor::new(Frame::FixedHeight(height), SPOTIFY_ALLOW)
    }
}

fn apple_music(height: u32) -> RenderDescriptor {
    RenderDescriptor {
        sandbox: Some(APPLE_MUSIC_SANDBOX),
        transparent: true,
        ..RenderDescriptor::new(Frame::FixedHeight(height), APPLE_MUSIC_ALLOW)
    }
}

fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod test {
    use super::*;

    fn descriptor(media_type: MediaType) -> RenderDescriptor {
        describe_rendering(media_type)
            .descriptor()
            .cloned()
            .unwrap_or_else(|| panic!("{media_type} has no iframe"))
    }

    fn height(media_type: MediaType) -> u32 {
        match descriptor(media_type).frame {
            Frame::FixedHeight(height) => height,
            frame => panic!("{media_type} has frame {frame:?}"),
        }
    }

    #[test]
    fn youtube() {
        let youtube = descriptor(MediaType::Youtube);
        assert_eq!(Frame::Aspect(AspectRatio::new(16, 9)), youtube.frame);
        assert!(youtube.allow_fullscreen);
        assert_eq!(None, youtube.sandbox);
        assert!(youtube.allow.contains("picture-in-picture"));
        assert!(youtube.allow.contains("clipboard-write"));
    }

    #[test]
    fn fixed_heights() {
        assert!(height(MediaType::Soundcloud) < height(MediaType::SoundcloudPlaylist));
        assert!(height(MediaType::Spotify) < height(MediaType::SpotifyPlaylist));
        assert!(height(MediaType::AppleMusicStation) < height(MediaType::AppleMusicPlaylist));
        assert!(height(MediaType::AppleMusicAlbum) < height(MediaType::AppleMusicPlaylist));
        assert_eq!(120, height(MediaType::Mixcloud));
    }

    #[test]
    fn permissions() {
        for media_type in [
            MediaType::AppleMusicAlbum,
            MediaType::AppleMusicPlaylist,
            MediaType::AppleMusicStation,
        ] {
            let apple = descriptor(media_type);
            assert_eq!(Some(APPLE_MUSIC_SANDBOX), apple.sandbox);
            assert_eq!(APPLE_MUSIC_ALLOW, apple.allow);
        }
        assert_eq!(
            "allow-forms allow-popups allow-same-origin allow-scripts allow-storage-access-by-user-activation allow-top-navigation-by-user-activation",
            APPLE_MUSIC_SANDBOX
        );

        let spotify = descriptor(MediaType::SpotifyPlaylist);
        assert_eq!(SPOTIFY_ALLOW, spotify.allow);
        assert!(spotify.rounded);

        let soundcloud = descriptor(MediaType::Soundcloud);
        assert!(soundcloud.transparent);
        assert!(!soundcloud.scrollable);

        let instagram = descriptor(MediaType::InstagramReel);
        assert_eq!(Frame::Aspect(AspectRatio::new(4, 5)), instagram.frame);
        assert!(instagram.allow.contains("web-share"));
        assert!(!instagram.scrollable);
    }

    #[test]
    fn links_without_player() {
        assert_eq!(Rendering::Link, describe_rendering(MediaType::Tiktok));
        assert_eq!(Rendering::Link, describe_rendering(MediaType::Other));
    }

    #[test]
    fn every_type_described() {
        for media_type in MediaType::ALL {
            let rendering = describe_rendering(media_type);
            assert_eq!(
                media_type != MediaType::Tiktok && media_type.is_supported(),
                rendering.descriptor().is_some()
            );
        }
    }

    #[test]
    fn custom_dimensions() {
        let dimensions = Dimensions {
            spotify_track_height: 80,
            ..Default::default()
        };
        assert_eq!(
            Some(Frame::FixedHeight(80)),
            dimensions
                .rendering(MediaType::Spotify)
                .descriptor()
                .map(|d| d.frame)
        );
    }

    #[test]
    fn iframe_markup() {
        let html = describe_rendering(MediaType::AppleMusicAlbum).html(
            "https://embed.music.apple.com/us/album/1?app=music&i=2",
            Some("My \"album\""),
        );
        assert!(html.starts_with(
            "<iframe src=\"https://embed.music.apple.com/us/album/1?app=music&amp;i=2\" title=\"My &quot;album&quot;\""
        ));
        assert!(html.contains("height=\"175\""));
        assert!(html.contains(&format!("sandbox=\"{APPLE_MUSIC_SANDBOX}\"")));
        assert!(html.contains("allow=\"autoplay *; encrypted-media *; fullscreen *; clipboard-write\""));
        assert!(html.contains("scrolling=\"no\""));
        assert!(!html.contains("allowfullscreen"));
        assert!(html.ends_with("></iframe>"));

        let html = describe_rendering(MediaType::Youtube)
            .html("https://www.youtube.com/embed/dQw4w9WgXcQ", None);
        assert!(html.contains("aspect-ratio: 16 / 9"));
        assert!(html.ends_with(" allowfullscreen></iframe>"));
    }

    #[test]
    fn link_markup() {
        assert_eq!(
            "<a href=\"https://www.tiktok.com/@a/video/1?x=1&amp;y=2\" target=\"_blank\" rel=\"noopener noreferrer\">https://www.tiktok.com/@a/video/1?x=1&amp;y=2</a>",
            Rendering::Link.html("https://www.tiktok.com/@a/video/1?x=1&y=2", None)
        );
    }

    #[test]
    fn serializes_for_presentation() {
        let json = serde_json::to_value(describe_rendering(MediaType::Spotify)).unwrap();
        assert_eq!(152, json["iframe"]["frame"]["fixedHeight"]);
        assert_eq!(SPOTIFY_ALLOW, json["iframe"]["allow"]);
        assert!(json["iframe"].get("sandbox").is_none());
    }
}
