use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::status::VideoStatus;
use super::upload_credentials::UploadCredentials;
use crate::delivery_url::{DeliveryUrlBuilder, Resolution};

/// A video object as returned by the Bunny Stream management API. This
/// service never mutates the resource beyond the title; it derives URLs that
/// point at it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteVideo {
    /// Opaque identifier of the video in the remote library.
    pub guid: String,
    #[serde(default)]
    pub title: String,
    /// Raw status code; see [VideoStatus] for the label mapping.
    #[serde(default)]
    pub status: i64,
    /// Duration in seconds.
    #[serde(default)]
    pub length: i64,
    #[serde(default)]
    pub storage_size: i64,
    #[serde(default)]
    pub views: i64,
    #[serde(default)]
    pub width: i64,
    #[serde(default)]
    pub height: i64,
    /// Upload timestamp. The remote API emits local timestamps without an
    /// offset, so this stays naive.
    #[serde(default)]
    pub date_uploaded: Option<NaiveDateTime>,
    #[serde(default)]
    pub thumbnail_file_name: Option<String>,
    /// Comma-separated rendition list, e.g. "360p,720p".
    #[serde(default)]
    pub available_resolutions: Option<String>,
    #[serde(default)]
    pub collection_id: Option<String>,
}

/// One page of a library listing from the remote API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoListPage {
    pub total_items: i64,
    pub current_page: i64,
    pub items_per_page: i64,
    #[serde(default)]
    pub items: Vec<RemoteVideo>,
}

/// Request to create a placeholder video in the remote library.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateVideoRequest {
    /// Title shown in the library and the player.
    #[validate(length(
        min = 1,
        max = 255,
        message = "Title must be between 1 and 255 characters"
    ))]
    pub title: String,
    /// Optional collection to file the video under.
    #[serde(default)]
    pub collection_id: Option<String>,
}

/// Request to rename a video.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateVideoRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Title must be between 1 and 255 characters"
    ))]
    pub title: String,
}

/// API-facing view of a video, decorated with the status label and the
/// delivery URLs a client needs to render it.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VideoResponse {
    pub video_id: String,
    pub title: String,
    /// Raw remote status code.
    pub status: i64,
    pub status_label: String,
    /// Duration in seconds.
    pub duration: i64,
    pub storage_size: i64,
    pub width: i64,
    pub height: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_uploaded: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<String>,
    pub embed_url: String,
    pub thumbnail_url: String,
    pub hls_url: String,
}

impl VideoResponse {
    pub fn from_remote(video: RemoteVideo, urls: &DeliveryUrlBuilder) -> Self {
        let status_label = VideoStatus::from_code(video.status).label().to_string();
        VideoResponse {
            embed_url: urls.embed_url(&video.guid),
            thumbnail_url: urls.thumbnail_url(&video.guid),
            hls_url: urls.hls_url(&video.guid),
            video_id: video.guid,
            title: video.title,
            status: video.status,
            status_label,
            duration: video.length,
            storage_size: video.storage_size,
            width: video.width,
            height: video.height,
            date_uploaded: video.date_uploaded,
            collection_id: video.collection_id,
        }
    }
}

/// Response to video creation: the placeholder resource plus the credentials
/// for uploading its content.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateVideoResponse {
    pub video: VideoResponse,
    pub upload: UploadCredentials,
}

/// Paged listing response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VideoListResponse {
    pub total_items: i64,
    pub current_page: i64,
    pub items_per_page: i64,
    pub items: Vec<VideoResponse>,
}

/// Full URL bundle for playback of one video at one resolution.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PlaybackUrls {
    pub video_id: String,
    pub resolution: Resolution,
    pub embed_url: String,
    pub thumbnail_url: String,
    pub hls_url: String,
    pub direct_play_url: String,
}

impl PlaybackUrls {
    pub fn build(video_id: &str, resolution: Resolution, urls: &DeliveryUrlBuilder) -> Self {
        PlaybackUrls {
            video_id: video_id.to_string(),
            resolution,
            embed_url: urls.embed_url(video_id),
            thumbnail_url: urls.thumbnail_url(video_id),
            hls_url: urls.hls_url(video_id),
            direct_play_url: urls.direct_play_url(video_id, resolution),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls() -> DeliveryUrlBuilder {
        DeliveryUrlBuilder::new(
            "585866".to_string(),
            "vz-907071cc-4fd.b-cdn.net".to_string(),
            "iframe.mediadelivery.net".to_string(),
        )
    }

    fn remote(guid: &str, status: i64) -> RemoteVideo {
        RemoteVideo {
            guid: guid.to_string(),
            title: "Lesson 1".to_string(),
            status,
            length: 312,
            storage_size: 1024,
            views: 0,
            width: 1920,
            height: 1080,
            date_uploaded: None,
            thumbnail_file_name: Some("thumbnail.jpg".to_string()),
            available_resolutions: Some("360p,720p".to_string()),
            collection_id: None,
        }
    }

    #[test]
    fn test_video_response_from_remote() {
        let response = VideoResponse::from_remote(remote("abc-123-def", 4), &urls());
        assert_eq!(response.video_id, "abc-123-def");
        assert_eq!(response.status, 4);
        assert_eq!(response.status_label, "Ready");
        assert_eq!(
            response.embed_url,
            "https://iframe.mediadelivery.net/embed/585866/abc-123-def"
        );
        assert_eq!(
            response.thumbnail_url,
            "https://vz-907071cc-4fd.b-cdn.net/abc-123-def/thumbnail.jpg"
        );
        assert_eq!(
            response.hls_url,
            "https://vz-907071cc-4fd.b-cdn.net/abc-123-def/playlist.m3u8"
        );
    }

    #[test]
    fn test_video_response_unknown_status() {
        let response = VideoResponse::from_remote(remote("abc", 42), &urls());
        assert_eq!(response.status, 42);
        assert_eq!(response.status_label, "Unknown");
    }

    #[test]
    fn test_playback_urls_bundle() {
        let bundle = PlaybackUrls::build("abc-123-def", Resolution::P1080, &urls());
        assert_eq!(
            bundle.direct_play_url,
            "https://vz-907071cc-4fd.b-cdn.net/abc-123-def/play_1080p.mp4"
        );
        assert_eq!(bundle.resolution, Resolution::P1080);
    }

    #[test]
    fn test_remote_video_deserializes_camel_case() {
        let json = serde_json::json!({
            "guid": "abc-123-def",
            "title": "Lesson 1",
            "status": 3,
            "length": 312,
            "storageSize": 99,
            "dateUploaded": "2024-05-01T10:30:00",
            "availableResolutions": "360p,720p"
        });
        let video: RemoteVideo = serde_json::from_value(json).unwrap();
        assert_eq!(video.guid, "abc-123-def");
        assert_eq!(video.storage_size, 99);
        assert!(video.date_uploaded.is_some());
        assert_eq!(video.collection_id, None);
    }

    #[test]
    fn test_create_video_request_validation() {
        let ok = CreateVideoRequest {
            title: "Lesson 1".to_string(),
            collection_id: None,
        };
        assert!(ok.validate().is_ok());

        let empty = CreateVideoRequest {
            title: String::new(),
            collection_id: None,
        };
        assert!(empty.validate().is_err());

        let too_long = CreateVideoRequest {
            title: "x".repeat(256),
            collection_id: None,
        };
        assert!(too_long.validate().is_err());
    }
}
