//! Turns links pasted into a profile into embeddable media players.
//!
//! A pasted link goes through four pure steps: [`normalize`] cleans up the
//! text, [`classify`] picks a [`MediaType`], [`transform`] rewrites the url
//! into the platform's embed url and [`describe_rendering`] says how to put
//! it on a page. None of them fail; anything unrecognized passes through
//! unchanged as [`MediaType::Other`].

pub mod config;
pub mod error;
mod link_embed;
mod media_link;
mod media_type;
mod normalize;
mod render;

use serde::Serialize;
use tracing::debug;

pub use crate::config::{AspectRatio, Config, Dimensions};
pub use crate::error::{EmbedError, Result};
pub use crate::link_embed::{is_embed_url, transform, EmbedTransformer};
pub use crate::media_link::MediaLink;
pub use crate::media_type::{classify, MediaType, UnknownMediaType};
pub use crate::normalize::{normalize, normalize_input, Normalized};
pub use crate::render::{describe_rendering, Frame, RenderDescriptor, Rendering};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolved {
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub canonical_url: String,
    pub embed_url: String,
}

impl Resolved {
    pub fn rendering(&self) -> Rendering {
        describe_rendering(self.media_type)
    }
}

/// Run a pasted link or embed code through the whole pipeline
pub fn resolve(raw: &str) -> Resolved {
    let Normalized { url, from_iframe } = normalize_input(raw);
    let media_type = classify(&url);
    // The src of pasted embed code is already what the platform wants in an iframe
    let embed_url = if from_iframe {
        url.clone()
    } else {
        transform(media_type, &url)
    };
    debug!(%media_type, embed_url = %embed_url, "resolved link");
    Resolved {
        media_type,
        canonical_url: url,
        embed_url,
    }
}
