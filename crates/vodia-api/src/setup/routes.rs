//! Route configuration and setup.

use std::sync::Arc;

use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use vodia_core::constants::API_PREFIX;
use vodia_core::Config;

use crate::api_doc::ApiDoc;
use crate::handlers::{health, playback, upload_credentials, videos};
use crate::state::AppState;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router, anyhow::Error> {
    let cors = setup_cors(config)?;

    let api_routes = Router::new()
        .route(
            &format!("{}/stream/videos", API_PREFIX),
            post(videos::create_video).get(videos::list_videos),
        )
        .route(
            &format!("{}/stream/videos/{{id}}", API_PREFIX),
            get(videos::get_video)
                .patch(videos::update_video)
                .delete(videos::delete_video),
        )
        .route(
            &format!("{}/stream/videos/{{id}}/upload-credentials", API_PREFIX),
            post(upload_credentials::issue_upload_credentials),
        )
        .route(
            &format!("{}/stream/videos/{{id}}/playback", API_PREFIX),
            get(playback::get_playback_urls),
        )
        .route("/health/live", get(health::liveness_check))
        .route("/health/ready", get(health::readiness_check))
        .route(
            "/api/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .with_state(state);

    let app = api_routes
        .nest(
            "/docs",
            utoipa_rapidoc::RapiDoc::new("/api/openapi.json")
                .path("/docs")
                .into(),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    Ok(app)
}

fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let origins = &config.server.cors_origins;

    let cors = if origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let parsed: Result<Vec<HeaderValue>, _> = origins
            .iter()
            .map(|origin| origin.parse::<HeaderValue>())
            .collect();
        CorsLayer::new()
            .allow_origin(parsed.map_err(|e| anyhow::anyhow!("Invalid CORS origin: {}", e))?)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PATCH,
                Method::DELETE,
            ])
            .allow_headers(Any)
    };

    Ok(cors)
}
