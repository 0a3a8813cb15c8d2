//! Health check handlers.

use std::sync::Arc;
use std::time::Duration;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use vodia_stream::VideoListQuery;

use crate::state::AppState;

/// Liveness probe - process is running.
pub async fn liveness_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({ "status": "alive" })),
    )
}

/// Readiness probe - the remote video library answers a minimal listing
/// request within the timeout.
pub async fn readiness_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    const TIMEOUT: Duration = Duration::from_secs(5);

    let probe = VideoListQuery {
        page: 1,
        items_per_page: 1,
        search: None,
        collection_id: None,
    };

    let upstream = match tokio::time::timeout(TIMEOUT, state.stream.list_videos(&probe)).await {
        Ok(Ok(_)) => "ready".to_string(),
        Ok(Err(e)) => {
            tracing::error!(error = %e, "Upstream readiness check failed");
            format!("not_ready: {}", e)
        }
        Err(_) => {
            tracing::error!("Upstream readiness check timed out");
            "timeout".to_string()
        }
    };

    let ready = upstream == "ready";
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(serde_json::json!({
            "status": if ready { "ready" } else { "not_ready" },
            "upstream": upstream,
        })),
    )
}
