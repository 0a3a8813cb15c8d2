use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use vodia_core::config::StreamConfig;
use vodia_core::models::{RemoteVideo, VideoListPage};
use vodia_core::AppError;

/// Listing parameters accepted by the remote library endpoint.
#[derive(Debug, Clone, Default)]
pub struct VideoListQuery {
    pub page: i64,
    pub items_per_page: i64,
    pub search: Option<String>,
    pub collection_id: Option<String>,
}

/// Management operations against the remote video library.
///
/// A trait seam so the API layer can be exercised without the network.
#[async_trait]
pub trait StreamApi: Send + Sync {
    /// Create a placeholder video resource. Content is uploaded separately
    /// via the TUS endpoint using generated credentials.
    async fn create_video(
        &self,
        title: &str,
        collection_id: Option<&str>,
    ) -> Result<RemoteVideo, AppError>;

    /// Fetch a single video by its identifier.
    async fn get_video(&self, video_id: &str) -> Result<RemoteVideo, AppError>;

    /// List videos in the library, paged, optionally filtered by a search
    /// term or a collection.
    async fn list_videos(&self, query: &VideoListQuery) -> Result<VideoListPage, AppError>;

    /// Update the title of a video.
    async fn update_video(&self, video_id: &str, title: &str) -> Result<(), AppError>;

    /// Delete a video and its stored renditions.
    async fn delete_video(&self, video_id: &str) -> Result<(), AppError>;
}

/// HTTP client for the Bunny Stream management API, authenticated with the
/// library's `AccessKey` header.
#[derive(Clone, Debug)]
pub struct StreamClient {
    client: Client,
    base_url: String,
    library_id: String,
    api_key: String,
}

impl StreamClient {
    pub fn new(config: &StreamConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            library_id: config.library_id.clone(),
            api_key: config.api_key.clone(),
        })
    }

    fn videos_url(&self) -> String {
        format!("{}/library/{}/videos", self.base_url, self.library_id)
    }

    fn video_url(&self, video_id: &str) -> String {
        format!("{}/{}", self.videos_url(), video_id)
    }

    /// Decode a successful response, or surface the remote status and error
    /// body verbatim.
    async fn read_json<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, AppError> {
        let response = Self::check_status(response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| AppError::Internal(format!("Failed to decode upstream response: {}", e)))
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, AppError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), body = %body, "Upstream request rejected");
        Err(AppError::Upstream {
            status: status.as_u16(),
            body,
        })
    }

    fn send_error(e: reqwest::Error) -> AppError {
        AppError::UpstreamUnreachable(e.to_string())
    }
}

#[async_trait]
impl StreamApi for StreamClient {
    #[tracing::instrument(skip(self))]
    async fn create_video(
        &self,
        title: &str,
        collection_id: Option<&str>,
    ) -> Result<RemoteVideo, AppError> {
        let mut body = serde_json::json!({ "title": title });
        if let Some(collection) = collection_id {
            body["collectionId"] = serde_json::json!(collection);
        }

        let response = self
            .client
            .post(self.videos_url())
            .header("AccessKey", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(Self::send_error)?;

        self.read_json(response).await
    }

    #[tracing::instrument(skip(self))]
    async fn get_video(&self, video_id: &str) -> Result<RemoteVideo, AppError> {
        let response = self
            .client
            .get(self.video_url(video_id))
            .header("AccessKey", &self.api_key)
            .send()
            .await
            .map_err(Self::send_error)?;

        self.read_json(response).await
    }

    #[tracing::instrument(skip(self, query), fields(page = query.page))]
    async fn list_videos(&self, query: &VideoListQuery) -> Result<VideoListPage, AppError> {
        let mut params: Vec<(&str, String)> = vec![
            ("page", query.page.to_string()),
            ("itemsPerPage", query.items_per_page.to_string()),
            ("orderBy", "date".to_string()),
        ];
        if let Some(search) = &query.search {
            params.push(("search", search.clone()));
        }
        if let Some(collection) = &query.collection_id {
            params.push(("collection", collection.clone()));
        }

        let response = self
            .client
            .get(self.videos_url())
            .header("AccessKey", &self.api_key)
            .query(&params)
            .send()
            .await
            .map_err(Self::send_error)?;

        self.read_json(response).await
    }

    #[tracing::instrument(skip(self))]
    async fn update_video(&self, video_id: &str, title: &str) -> Result<(), AppError> {
        let response = self
            .client
            .post(self.video_url(video_id))
            .header("AccessKey", &self.api_key)
            .json(&serde_json::json!({ "title": title }))
            .send()
            .await
            .map_err(Self::send_error)?;

        Self::check_status(response).await?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn delete_video(&self, video_id: &str) -> Result<(), AppError> {
        let response = self
            .client
            .delete(self.video_url(video_id))
            .header("AccessKey", &self.api_key)
            .send()
            .await
            .map_err(Self::send_error)?;

        Self::check_status(response).await?;
        Ok(())
    }
}
