//! Shared application state.

use std::sync::Arc;

use vodia_core::{Config, DeliveryUrlBuilder, UploadSigner};
use vodia_stream::{StreamApi, StreamClient};

/// State shared by all handlers. The configuration is immutable for the
/// process lifetime; the signer and URL builder are pure and carry no
/// mutable state, so every handler call is independent.
pub struct AppState {
    pub config: Config,
    pub stream: Arc<dyn StreamApi>,
    pub signer: UploadSigner,
    pub urls: DeliveryUrlBuilder,
}

impl AppState {
    /// Build the production state with a real management-API client.
    pub fn new(config: Config) -> Result<Self, anyhow::Error> {
        let stream = StreamClient::new(&config.stream)?;
        Ok(Self::with_stream(config, Arc::new(stream)))
    }

    /// Build state around any [StreamApi] implementation. Tests use this to
    /// stand in a mock for the remote library.
    pub fn with_stream(config: Config, stream: Arc<dyn StreamApi>) -> Self {
        let signer = UploadSigner::from_config(&config.stream);
        let urls = DeliveryUrlBuilder::from_config(&config.stream);
        Self {
            config,
            stream,
            signer,
            urls,
        }
    }
}
