use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use vodia_core::models::UploadCredentials;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;

/// Issue fresh upload credentials for an existing placeholder video, e.g. to
/// resume an upload after the previous authorization expired.
///
/// Pure computation: no upstream call is made and the video's existence is
/// not checked - a credential for an unknown video is rejected by the remote
/// system at upload time.
#[utoipa::path(
    post,
    path = "/api/v0/stream/videos/{id}/upload-credentials",
    tag = "uploads",
    params(
        ("id" = String, Path, description = "Video ID")
    ),
    responses(
        (status = 200, description = "Upload credentials generated", body = UploadCredentials),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(video_id = %id, operation = "issue_upload_credentials"))]
pub async fn issue_upload_credentials(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let credentials = state.signer.credentials(&id);
    tracing::debug!(expiry = credentials.expiry, "Issued upload credentials");
    Ok(Json(credentials))
}
