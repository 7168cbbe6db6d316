//! User-facing error taxonomy for one analysis attempt.

use thiserror::Error;

/// Message for requests that went out but got no answer.
pub const NO_RESPONSE: &str = "no response from server; check that the detector service is running";
/// Message for requests that could not be built or sent.
pub const SEND_FAILED: &str = "failed to send request";
/// Fallback when the detector returned an error status without an `error` field.
pub const ANALYZE_FAILED: &str = "failed to analyze URL";
/// A 2xx body that is not a detector response.
pub const MALFORMED_RESPONSE: &str = "detector returned a malformed response";

/// Terminal failure of an analysis attempt. `Display` is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyzeError {
    /// Empty or whitespace-only input, caught before dispatch.
    #[error("please enter a URL")]
    Validation,
    /// Detector answered with an error status (or an unusable body).
    #[error("{0}")]
    Server(String),
    /// Request was sent but no response arrived.
    #[error("{0}")]
    Network(String),
    /// Request could not be constructed or sent.
    #[error("{0}")]
    Client(String),
}

/// Variant tag of [`AnalyzeError`], for matching without the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Server,
    Network,
    Client,
}

impl AnalyzeError {
    pub fn no_response() -> Self {
        AnalyzeError::Network(NO_RESPONSE.to_string())
    }

    pub fn send_failed() -> Self {
        AnalyzeError::Client(SEND_FAILED.to_string())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AnalyzeError::Validation => ErrorKind::Validation,
            AnalyzeError::Server(_) => ErrorKind::Server,
            AnalyzeError::Network(_) => ErrorKind::Network,
            AnalyzeError::Client(_) => ErrorKind::Client,
        }
    }
}
