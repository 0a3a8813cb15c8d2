//! Shared constants.

/// API route prefix for the current API version.
pub const API_PREFIX: &str = "/api/v0";

/// Fixed endpoint of Bunny Stream's resumable (TUS) upload protocol. Clients
/// present the generated credentials here; it is the same for every library.
pub const TUS_UPLOAD_ENDPOINT: &str = "https://video.bunnycdn.com/tusupload";

/// Default base URL of the Bunny Stream management API.
pub const STREAM_API_BASE_URL: &str = "https://video.bunnycdn.com";

/// Default hostname of the iframe-embeddable player (constant across
/// libraries).
pub const DEFAULT_EMBED_HOSTNAME: &str = "iframe.mediadelivery.net";

/// Validity window of an upload authorization, in seconds (24 hours). The
/// remote system enforces it when the credential is presented.
pub const UPLOAD_AUTH_TTL_SECS: u64 = 86_400;
