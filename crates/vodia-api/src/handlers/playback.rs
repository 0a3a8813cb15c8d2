use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;
use vodia_core::delivery_url::Resolution;
use vodia_core::models::PlaybackUrls;
use vodia_core::AppError;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;

#[derive(Deserialize, ToSchema, utoipa::IntoParams)]
pub struct PlaybackQuery {
    /// Direct-play resolution; defaults to 720p.
    #[serde(default)]
    pub resolution: Option<String>,
}

/// Derive the delivery URL bundle for a video. Pure string formatting over
/// the configured hostnames; no upstream call, no existence check.
#[utoipa::path(
    get,
    path = "/api/v0/stream/videos/{id}/playback",
    tag = "playback",
    params(
        ("id" = String, Path, description = "Video ID"),
        PlaybackQuery
    ),
    responses(
        (status = 200, description = "Playback URL bundle", body = PlaybackUrls),
        (status = 400, description = "Unknown resolution", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, params), fields(video_id = %id, operation = "playback_urls"))]
pub async fn get_playback_urls(
    Path(id): Path<String>,
    Query(params): Query<PlaybackQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let resolution = match params.resolution.as_deref() {
        Some(raw) => raw
            .parse::<Resolution>()
            .map_err(AppError::InvalidInput)?,
        None => Resolution::default(),
    };

    Ok(Json(PlaybackUrls::build(&id, resolution, &state.urls)))
}
