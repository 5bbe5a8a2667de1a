//! Verification outcomes
//!
//! Every way a probe can end is captured here: either the link answered with
//! 200, or one of the [`ProbeError`] cases. Both collapse into a
//! [`VerificationResult`], so the verifier never reports failure through `Err`.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message attached to every successful verification
pub const ACCESSIBLE_MESSAGE: &str = "Link is valid and accessible";

/// Why a link failed verification
///
/// The `Display` text of each variant is the user-facing message stored in
/// [`VerificationResult::message`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    #[error("Link verification timed out")]
    Timeout,

    #[error("Could not connect to the link")]
    Connect,

    #[error("Link returned status code {status}")]
    UnexpectedStatus { status: u16, final_url: String },

    #[error("Error verifying link: {0}")]
    Unknown(String),
}

impl ProbeError {
    /// Builds the error for a response that arrived with a non-200 status
    pub fn status(status: StatusCode, final_url: impl Into<String>) -> Self {
        Self::UnexpectedStatus {
            status: status.as_u16(),
            final_url: final_url.into(),
        }
    }
}

impl From<reqwest::Error> for ProbeError {
    fn from(error: reqwest::Error) -> Self {
        // A connect timeout reports both flags; it counts as a timeout.
        if error.is_timeout() {
            Self::Timeout
        } else if error.is_connect() {
            Self::Connect
        } else {
            Self::Unknown(error.to_string())
        }
    }
}

/// Result of verifying a single link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResult {
    /// True only when the link answered 200 (directly or via the GET fallback)
    pub valid: bool,

    /// Final HTTP status, absent when no response was received
    pub status_code: Option<u16>,

    /// Human-readable outcome
    pub message: String,

    /// URL after redirects, or the input URL when no response was received
    pub final_url: String,
}

impl VerificationResult {
    /// A link that answered 200 at `final_url`
    pub fn accessible(status_code: u16, final_url: impl Into<String>) -> Self {
        Self {
            valid: true,
            status_code: Some(status_code),
            message: ACCESSIBLE_MESSAGE.to_string(),
            final_url: final_url.into(),
        }
    }

    /// A link that failed verification
    ///
    /// `url` is the address that was probed; it becomes the final URL unless
    /// the failure carries a response location of its own.
    pub fn failed(url: &str, error: &ProbeError) -> Self {
        let (status_code, final_url) = match error {
            ProbeError::UnexpectedStatus { status, final_url } => {
                (Some(*status), final_url.clone())
            }
            _ => (None, url.to_string()),
        };

        Self {
            valid: false,
            status_code,
            message: error.to_string(),
            final_url,
        }
    }
}

impl From<(&str, Result<String, ProbeError>)> for VerificationResult {
    fn from((url, outcome): (&str, Result<String, ProbeError>)) -> Self {
        match outcome {
            Ok(final_url) => Self::accessible(StatusCode::OK.as_u16(), final_url),
            Err(error) => Self::failed(url, &error),
        }
    }
}
