//! Delivery URL construction.
//!
//! Deterministically derives playback, embed, and thumbnail URLs from a video
//! identifier and the configured library/CDN hostnames. No network calls, no
//! validation of the video identifier: the remote system is authoritative for
//! its format.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::StreamConfig;

/// MP4 renditions available for direct play.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Resolution {
    #[serde(rename = "360p")]
    P360,
    #[serde(rename = "480p")]
    P480,
    #[default]
    #[serde(rename = "720p")]
    P720,
    #[serde(rename = "1080p")]
    P1080,
}

impl Display for Resolution {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Resolution::P360 => write!(f, "360p"),
            Resolution::P480 => write!(f, "480p"),
            Resolution::P720 => write!(f, "720p"),
            Resolution::P1080 => write!(f, "1080p"),
        }
    }
}

impl FromStr for Resolution {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "360p" => Ok(Resolution::P360),
            "480p" => Ok(Resolution::P480),
            "720p" => Ok(Resolution::P720),
            "1080p" => Ok(Resolution::P1080),
            other => Err(format!(
                "Unknown resolution '{}'. Must be one of: 360p, 480p, 720p, 1080p",
                other
            )),
        }
    }
}

/// Builds delivery URLs for a configured library. Every method is a pure
/// string formatter over `(hostnames, library_id, video_id)`.
#[derive(Clone, Debug)]
pub struct DeliveryUrlBuilder {
    library_id: String,
    cdn_hostname: String,
    embed_hostname: String,
}

impl DeliveryUrlBuilder {
    pub fn new(library_id: String, cdn_hostname: String, embed_hostname: String) -> Self {
        Self {
            library_id,
            cdn_hostname,
            embed_hostname,
        }
    }

    pub fn from_config(config: &StreamConfig) -> Self {
        Self::new(
            config.library_id.clone(),
            config.cdn_hostname.clone(),
            config.embed_hostname.clone(),
        )
    }

    /// URL of the iframe-embeddable player for a video.
    pub fn embed_url(&self, video_id: &str) -> String {
        format!(
            "https://{}/embed/{}/{}",
            self.embed_hostname, self.library_id, video_id
        )
    }

    /// URL of the auto-generated thumbnail.
    pub fn thumbnail_url(&self, video_id: &str) -> String {
        format!("https://{}/{}/thumbnail.jpg", self.cdn_hostname, video_id)
    }

    /// URL of the progressive MP4 rendition at the given resolution.
    pub fn direct_play_url(&self, video_id: &str, resolution: Resolution) -> String {
        format!(
            "https://{}/{}/play_{}.mp4",
            self.cdn_hostname, video_id, resolution
        )
    }

    /// URL of the HLS master playlist.
    pub fn hls_url(&self, video_id: &str) -> String {
        format!("https://{}/{}/playlist.m3u8", self.cdn_hostname, video_id)
    }
}
