use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;
use vodia_core::models::{
    CreateVideoRequest, CreateVideoResponse, UpdateVideoRequest, VideoListResponse, VideoResponse,
};
use vodia_stream::VideoListQuery;

use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;

#[derive(Deserialize, ToSchema, utoipa::IntoParams)]
pub struct ListQuery {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_items_per_page")]
    pub items_per_page: i64,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub collection_id: Option<String>,
}

fn default_page() -> i64 {
    1
}

fn default_items_per_page() -> i64 {
    50
}

/// Create a placeholder video in the remote library and return it together
/// with fresh upload credentials, so a client can start the resumable upload
/// in one round trip.
#[utoipa::path(
    post,
    path = "/api/v0/stream/videos",
    tag = "videos",
    request_body = CreateVideoRequest,
    responses(
        (status = 201, description = "Video created", body = CreateVideoResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 502, description = "Upstream error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, request), fields(operation = "create_video"))]
pub async fn create_video(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<CreateVideoRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    request.validate().map_err(vodia_core::AppError::from)?;

    let video = state
        .stream
        .create_video(&request.title, request.collection_id.as_deref())
        .await?;

    let upload = state.signer.credentials(&video.guid);
    let response = CreateVideoResponse {
        video: VideoResponse::from_remote(video, &state.urls),
        upload,
    };

    tracing::info!(video_id = %response.video.video_id, "Created placeholder video");

    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/v0/stream/videos",
    tag = "videos",
    params(ListQuery),
    responses(
        (status = 200, description = "One page of the library listing", body = VideoListResponse),
        (status = 502, description = "Upstream error", body = ErrorResponse)
    )
)]
#[tracing::instrument(
    skip(state, params),
    fields(page = params.page, operation = "list_videos")
)]
pub async fn list_videos(
    Query(params): Query<ListQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let query = VideoListQuery {
        page: params.page.max(1),
        items_per_page: params.items_per_page.clamp(1, 100),
        search: params.search,
        collection_id: params.collection_id,
    };

    let page = state.stream.list_videos(&query).await?;

    let response = VideoListResponse {
        total_items: page.total_items,
        current_page: page.current_page,
        items_per_page: page.items_per_page,
        items: page
            .items
            .into_iter()
            .map(|video| VideoResponse::from_remote(video, &state.urls))
            .collect(),
    };

    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/v0/stream/videos/{id}",
    tag = "videos",
    params(
        ("id" = String, Path, description = "Video ID")
    ),
    responses(
        (status = 200, description = "Video found", body = VideoResponse),
        (status = 404, description = "Video not found", body = ErrorResponse),
        (status = 502, description = "Upstream error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(video_id = %id, operation = "get_video"))]
pub async fn get_video(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let video = state.stream.get_video(&id).await?;
    Ok(Json(VideoResponse::from_remote(video, &state.urls)))
}

#[utoipa::path(
    patch,
    path = "/api/v0/stream/videos/{id}",
    tag = "videos",
    params(
        ("id" = String, Path, description = "Video ID")
    ),
    request_body = UpdateVideoRequest,
    responses(
        (status = 204, description = "Video updated"),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 404, description = "Video not found", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, request), fields(video_id = %id, operation = "update_video"))]
pub async fn update_video(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<UpdateVideoRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    request.validate().map_err(vodia_core::AppError::from)?;

    state.stream.update_video(&id, &request.title).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/v0/stream/videos/{id}",
    tag = "videos",
    params(
        ("id" = String, Path, description = "Video ID")
    ),
    responses(
        (status = 204, description = "Video deleted"),
        (status = 404, description = "Video not found", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(video_id = %id, operation = "delete_video"))]
pub async fn delete_video(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    state.stream.delete_video(&id).await?;
    tracing::info!(video_id = %id, "Deleted video");
    Ok(StatusCode::NO_CONTENT)
}
