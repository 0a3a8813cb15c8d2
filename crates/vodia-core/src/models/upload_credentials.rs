use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Authorization material for a resumable (TUS) upload directly to the video
/// host. Generated on demand, never persisted; the remote system enforces the
/// expiry when the credential is presented.
///
/// A client performs the upload by sending `AuthorizationSignature`,
/// `AuthorizationExpire`, `VideoId`, and `LibraryId` headers, built from
/// these fields, to `tus_endpoint`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UploadCredentials {
    /// Identifier of the placeholder video resource to upload into.
    pub video_id: String,
    /// Identifier of the target library.
    pub library_id: String,
    /// Fixed endpoint of the resumable upload protocol.
    pub tus_endpoint: String,
    /// Lowercase hex SHA-256 authorization signature (64 characters).
    pub signature: String,
    /// Unix timestamp (seconds) after which the credential is no longer
    /// accepted by the remote system.
    pub expiry: u64,
}
