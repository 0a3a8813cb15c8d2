//! Data models for the application
//!
//! Wire types for the Bunny Stream management API, API-facing response
//! shapes, and the upload credential contract.

mod status;
mod upload_credentials;
mod video;

// Re-export all models for convenient imports
pub use status::*;
pub use upload_credentials::*;
pub use video::*;
