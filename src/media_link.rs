use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::link_embed::is_embed_url;
use crate::media_type::MediaType;
use crate::render::{describe_rendering, Rendering};
use crate::resolve;

/// A media link in a profile, as handed to storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaLink {
    id: String,
    raw_url: String,
    #[serde(rename = "type")]
    media_type: MediaType,
    embed_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
}

impl MediaLink {
    pub fn new(raw_url: &str) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), raw_url)
    }

    pub fn with_id(id: impl Into<String>, raw_url: &str) -> Self {
        let resolved = resolve(raw_url);
        Self {
            id: id.into(),
            raw_url: raw_url.to_owned(),
            media_type: resolved.media_type,
            embed_url: resolved.embed_url,
            title: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn raw_url(&self) -> &str {
        &self.raw_url
    }

    pub fn media_type(&self) -> MediaType {
        self.media_type
    }

    pub fn embed_url(&self) -> &str {
        &self.embed_url
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: Option<String>) {
        self.title = title;
    }

    /// Replace the raw url, resolving the link again if it changed
    pub fn set_raw_url(&mut self, raw_url: &str) {
        if raw_url == self.raw_url {
            return;
        }
        let resolved = resolve(raw_url);
        self.raw_url = raw_url.to_owned();
        self.media_type = resolved.media_type;
        self.embed_url = resolved.embed_url;
    }

    pub fn rendering(&self) -> Rendering {
        describe_rendering(self.media_type)
    }

    pub fn html(&self) -> String {
        self.rendering().html(&self.embed_url, self.title())
    }

    /// The platform was recognized but no embeddable url could be built from the link.
    ///
    /// Callers use this to ask the user for a different link. TikTok and `other`
    /// render as a plain link rather than a player, so they never report a failure.
    pub fn preview_failed(&self) -> bool {
        self.rendering().descriptor().is_some() && !is_embed_url(self.media_type, &self.embed_url)
    }
}
