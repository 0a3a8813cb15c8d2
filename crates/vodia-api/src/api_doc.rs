//! OpenAPI document assembly.

use utoipa::OpenApi;

use crate::error::ErrorResponse;
use vodia_core::delivery_url::Resolution;
use vodia_core::models::{
    CreateVideoRequest, CreateVideoResponse, PlaybackUrls, UpdateVideoRequest, UploadCredentials,
    VideoListResponse, VideoResponse, VideoStatus,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Vodia API",
        description = "Upload credentials, delivery URLs, and library management for Bunny Stream video hosting."
    ),
    paths(
        crate::handlers::videos::create_video,
        crate::handlers::videos::list_videos,
        crate::handlers::videos::get_video,
        crate::handlers::videos::update_video,
        crate::handlers::videos::delete_video,
        crate::handlers::upload_credentials::issue_upload_credentials,
        crate::handlers::playback::get_playback_urls,
    ),
    components(schemas(
        CreateVideoRequest,
        UpdateVideoRequest,
        VideoResponse,
        CreateVideoResponse,
        VideoListResponse,
        PlaybackUrls,
        UploadCredentials,
        Resolution,
        VideoStatus,
        ErrorResponse,
    )),
    tags(
        (name = "videos", description = "Remote library management"),
        (name = "uploads", description = "Resumable upload authorization"),
        (name = "playback", description = "Delivery URL derivation")
    )
)]
pub struct ApiDoc;
