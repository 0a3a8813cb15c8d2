//! Vodia Core Library
//!
//! This crate provides the domain logic shared across all Vodia components:
//! configuration, error types, data models, the upload-credential signer, and
//! the delivery-URL builder. It performs no I/O.

pub mod config;
pub mod constants;
pub mod delivery_url;
pub mod error;
pub mod models;
pub mod upload_signer;

// Re-export commonly used types
pub use config::{Config, ServerConfig, StreamConfig};
pub use delivery_url::DeliveryUrlBuilder;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use upload_signer::UploadSigner;
