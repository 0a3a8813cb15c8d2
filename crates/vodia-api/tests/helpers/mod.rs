//! Test harness: in-memory stand-in for the remote video library, plus a
//! TestServer wired with the real routes.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test::TestServer;
use vodia_api::setup::setup_routes;
use vodia_api::state::AppState;
use vodia_core::config::{Config, ServerConfig, StreamConfig};
use vodia_core::constants::{DEFAULT_EMBED_HOSTNAME, STREAM_API_BASE_URL};
use vodia_core::models::{RemoteVideo, VideoListPage};
use vodia_core::AppError;
use vodia_stream::{StreamApi, VideoListQuery};

pub const TEST_LIBRARY_ID: &str = "585866";
pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_CDN_HOSTNAME: &str = "vz-907071cc-4fd.b-cdn.net";

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            port: 0,
            cors_origins: vec!["*".to_string()],
            environment: "test".to_string(),
        },
        stream: StreamConfig {
            api_key: TEST_API_KEY.to_string(),
            library_id: TEST_LIBRARY_ID.to_string(),
            cdn_hostname: TEST_CDN_HOSTNAME.to_string(),
            embed_hostname: DEFAULT_EMBED_HOSTNAME.to_string(),
            api_base_url: STREAM_API_BASE_URL.to_string(),
            upstream_timeout_secs: 5,
        },
    }
}

/// In-memory [StreamApi] implementation mimicking the remote library's
/// observable behavior (including 404 bodies for unknown videos).
#[derive(Default)]
pub struct MockLibrary {
    videos: Mutex<HashMap<String, RemoteVideo>>,
    next_id: Mutex<u64>,
}

impl MockLibrary {
    pub fn with_video(self, video: RemoteVideo) -> Self {
        self.videos
            .lock()
            .unwrap()
            .insert(video.guid.clone(), video);
        self
    }

    fn not_found() -> AppError {
        AppError::Upstream {
            status: 404,
            body: "Video not found".to_string(),
        }
    }
}

pub fn remote_video(guid: &str, title: &str, status: i64) -> RemoteVideo {
    RemoteVideo {
        guid: guid.to_string(),
        title: title.to_string(),
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

#[async_trait]
impl StreamApi for MockLibrary {
    async fn create_video(
        &self,
        title: &str,
        collection_id: Option<&str>,
    ) -> Result<RemoteVideo, AppError> {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let guid = format!("mock-video-{}", *next_id);

        let mut video = remote_video(&guid, title, 0);
        video.length = 0;
        video.storage_size = 0;
        video.width = 0;
        video.height = 0;
        video.thumbnail_file_name = None;
        video.available_resolutions = None;
        video.collection_id = collection_id.map(str::to_string);

        self.videos
            .lock()
            .unwrap()
            .insert(guid.clone(), video.clone());
        Ok(video)
    }

    async fn get_video(&self, video_id: &str) -> Result<RemoteVideo, AppError> {
        self.videos
            .lock()
            .unwrap()
            .get(video_id)
            .cloned()
            .ok_or_else(Self::not_found)
    }

    async fn list_videos(&self, query: &VideoListQuery) -> Result<VideoListPage, AppError> {
        let videos = self.videos.lock().unwrap();
        let mut items: Vec<RemoteVideo> = videos
            .values()
            .filter(|v| match &query.search {
                Some(term) => v.title.to_lowercase().contains(&term.to_lowercase()),
                None => true,
            })
            .cloned()
            .collect();
        items.sort_by(|a, b| a.guid.cmp(&b.guid));

        Ok(VideoListPage {
            total_items: items.len() as i64,
            current_page: query.page,
            items_per_page: query.items_per_page,
            items,
        })
    }

    async fn update_video(&self, video_id: &str, title: &str) -> Result<(), AppError> {
        let mut videos = self.videos.lock().unwrap();
        match videos.get_mut(video_id) {
            Some(video) => {
                video.title = title.to_string();
                Ok(())
            }
            None => Err(Self::not_found()),
        }
    }

    async fn delete_video(&self, video_id: &str) -> Result<(), AppError> {
        self.videos
            .lock()
            .unwrap()
            .remove(video_id)
            .map(|_| ())
            .ok_or_else(Self::not_found)
    }
}

pub fn setup_test_app(library: MockLibrary) -> TestServer {
    let config = test_config();
    let state = Arc::new(AppState::with_stream(config.clone(), Arc::new(library)));
    let router = setup_routes(&config, state).expect("Failed to build routes");
    TestServer::new(router).expect("Failed to start test server")
}
