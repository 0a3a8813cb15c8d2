use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Processing state of a remote video, as reported by Bunny Stream.
///
/// The remote system is the authority over transitions
/// (`Created -> Uploaded -> Processing -> Transcoding -> Ready`, with `Error`
/// and `UploadFailed` as terminal failures); this type only labels the codes.
/// Unrecognized codes map to `Unknown` rather than failing, since the remote
/// code set may grow over time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum VideoStatus {
    Created,
    Uploaded,
    Processing,
    Transcoding,
    Ready,
    Error,
    UploadFailed,
    Unknown,
}

impl VideoStatus {
    /// Total lookup over any integer code; never fails.
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => VideoStatus::Created,
            1 => VideoStatus::Uploaded,
            2 => VideoStatus::Processing,
            3 => VideoStatus::Transcoding,
            4 => VideoStatus::Ready,
            5 => VideoStatus::Error,
            6 => VideoStatus::UploadFailed,
            _ => VideoStatus::Unknown,
        }
    }

    /// Human-readable label matching the provider's dashboard wording.
    pub fn label(&self) -> &'static str {
        match self {
            VideoStatus::Created => "Created",
            VideoStatus::Uploaded => "Uploaded",
            VideoStatus::Processing => "Processing",
            VideoStatus::Transcoding => "Transcoding",
            VideoStatus::Ready => "Ready",
            VideoStatus::Error => "Error",
            VideoStatus::UploadFailed => "Upload Failed",
            VideoStatus::Unknown => "Unknown",
        }
    }

    /// Whether the video is in a terminal failure state.
    pub fn is_failed(&self) -> bool {
        matches!(self, VideoStatus::Error | VideoStatus::UploadFailed)
    }

    /// Whether the video finished processing and can be played back.
    pub fn is_ready(&self) -> bool {
        matches!(self, VideoStatus::Ready)
    }
}

impl Display for VideoStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_in_order() {
        let expected = [
            "Created",
            "Uploaded",
            "Processing",
            "Transcoding",
            "Ready",
            "Error",
            "Upload Failed",
        ];
        for (code, label) in expected.iter().enumerate() {
            assert_eq!(VideoStatus::from_code(code as i64).label(), *label);
        }
    }

    #[test]
    fn test_unknown_codes() {
        assert_eq!(VideoStatus::from_code(99).label(), "Unknown");
        assert_eq!(VideoStatus::from_code(-1).label(), "Unknown");
        assert_eq!(VideoStatus::from_code(100).label(), "Unknown");
        assert_eq!(VideoStatus::from_code(7).label(), "Unknown");
    }

    #[test]
    fn test_failure_states() {
        assert!(VideoStatus::Error.is_failed());
        assert!(VideoStatus::UploadFailed.is_failed());
        assert!(!VideoStatus::Ready.is_failed());
        assert!(!VideoStatus::Unknown.is_failed());
    }

    #[test]
    fn test_ready_state() {
        assert!(VideoStatus::from_code(4).is_ready());
        assert!(!VideoStatus::from_code(3).is_ready());
    }
}
