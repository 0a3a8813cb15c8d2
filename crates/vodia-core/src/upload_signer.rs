//! Upload authorization signing.
//!
//! Produces the material a client needs to perform a resumable (TUS) upload
//! directly to Bunny Stream without ever seeing the library's API key. The
//! signature is the provider's documented scheme: a plain SHA-256 over the
//! concatenation `library_id + api_key + expiry + video_id` - not an HMAC.
//! Preserved exactly for interoperability; do not emulate elsewhere.

use std::time::{SystemTime, UNIX_EPOCH};

use sha2::{Digest, Sha256};

use crate::config::StreamConfig;
use crate::constants::{TUS_UPLOAD_ENDPOINT, UPLOAD_AUTH_TTL_SECS};
use crate::models::UploadCredentials;

/// Signs upload authorizations for a configured library.
///
/// Stateless: every call is independent, credentials are never stored, and
/// the only inputs are the immutable configuration, the wall clock, and the
/// caller's video identifier.
#[derive(Clone, Debug)]
pub struct UploadSigner {
    library_id: String,
    api_key: String,
}

impl UploadSigner {
    pub fn new(library_id: String, api_key: String) -> Self {
        Self {
            library_id,
            api_key,
        }
    }

    pub fn from_config(config: &StreamConfig) -> Self {
        Self::new(config.library_id.clone(), config.api_key.clone())
    }

    /// Generate credentials for a resumable upload of `video_id`, valid for
    /// 24 hours from now. `video_id` is not validated; a credential for a
    /// nonexistent video is rejected by the remote system at upload time.
    pub fn credentials(&self, video_id: &str) -> UploadCredentials {
        let expiry = unix_now_secs() + UPLOAD_AUTH_TTL_SECS;
        self.credentials_expiring_at(video_id, expiry)
    }

    /// Generate credentials with an explicit expiry instant. The signature is
    /// a pure function of `(library_id, api_key, expiry, video_id)`.
    pub fn credentials_expiring_at(&self, video_id: &str, expiry: u64) -> UploadCredentials {
        UploadCredentials {
            video_id: video_id.to_string(),
            library_id: self.library_id.clone(),
            tus_endpoint: TUS_UPLOAD_ENDPOINT.to_string(),
            signature: self.signature(video_id, expiry),
            expiry,
        }
    }

    /// Lowercase hex SHA-256 over the concatenated signing payload, with the
    /// expiry rendered in base 10 and no separators between fields.
    fn signature(&self, video_id: &str, expiry: u64) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.library_id.as_bytes());
        hasher.update(self.api_key.as_bytes());
        hasher.update(expiry.to_string().as_bytes());
        hasher.update(video_id.as_bytes());
        hex::encode(hasher.finalize())
    }
}

fn unix_now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signer() -> UploadSigner {
        UploadSigner::new("585866".to_string(), "test-api-key".to_string())
    }

    fn is_lowercase_hex(s: &str) -> bool {
        s.chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
    }

    #[test]
    fn test_signature_is_deterministic() {
        let a = signer().credentials_expiring_at("video-1", 1_700_000_000);
        let b = signer().credentials_expiring_at("video-1", 1_700_000_000);
        assert_eq!(a.signature, b.signature);
    }

    #[test]
    fn test_distinct_video_ids_yield_distinct_signatures() {
        let a = signer().credentials_expiring_at("video-1", 1_700_000_000);
        let b = signer().credentials_expiring_at("video-2", 1_700_000_000);
        assert_ne!(a.signature, b.signature);
    }

    #[test]
    fn test_distinct_expiries_yield_distinct_signatures() {
        let a = signer().credentials_expiring_at("video-1", 1_700_000_000);
        let b = signer().credentials_expiring_at("video-1", 1_700_000_001);
        assert_ne!(a.signature, b.signature);
    }

    #[test]
    fn test_signature_format() {
        let creds = signer().credentials("video-1");
        assert_eq!(creds.signature.len(), 64);
        assert!(is_lowercase_hex(&creds.signature));
    }

    #[test]
    fn test_signature_matches_manual_sha256() {
        // Independent computation of the documented payload concatenation.
        let expiry: u64 = 1_700_000_000;
        let payload = format!("{}{}{}{}", "585866", "test-api-key", expiry, "video-1");
        let expected = hex::encode(Sha256::digest(payload.as_bytes()));

        let creds = signer().credentials_expiring_at("video-1", expiry);
        assert_eq!(creds.signature, expected);
    }

    #[test]
    fn test_expiry_window() {
        let before = unix_now_secs();
        let creds = signer().credentials("video-1");
        let after = unix_now_secs();

        assert!(creds.expiry >= before + UPLOAD_AUTH_TTL_SECS);
        assert!(creds.expiry <= after + UPLOAD_AUTH_TTL_SECS);
        assert!(creds.expiry > after);
    }

    #[test]
    fn test_credential_fields() {
        let creds = signer().credentials_expiring_at("video-1", 1_700_000_000);
        assert_eq!(creds.video_id, "video-1");
        assert_eq!(creds.library_id, "585866");
        assert_eq!(creds.tus_endpoint, TUS_UPLOAD_ENDPOINT);
        assert_eq!(creds.expiry, 1_700_000_000);
    }

    #[test]
    fn test_empty_video_id_is_accepted() {
        // Total over any string input; the remote system rejects the
        // credential at upload time.
        let creds = signer().credentials("");
        assert_eq!(creds.signature.len(), 64);
    }
}
