//! Request handlers, grouped by domain.

pub mod health;
pub mod playback;
pub mod upload_credentials;
pub mod videos;
