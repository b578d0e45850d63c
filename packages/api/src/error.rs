//! Errors returned by the backend client.

use store::FormFailure;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, CORS, connection reset).
    #[error("network error: {0}")]
    Network(String),

    /// Non-success status with a body that is not an `{"error": …}` envelope.
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// Non-success status with a structured error the UI can show.
    #[error("request rejected ({status}): {failure}")]
    Rejected { status: u16, failure: FormFailure },

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("no stored session token")]
    MissingToken,

    #[error("live feed: {0}")]
    Socket(String),
}

impl ApiError {
    pub(crate) fn network(err: impl std::fmt::Display) -> Self {
        ApiError::Network(err.to_string())
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } | ApiError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&FormFailure> {
        match self {
            ApiError::Rejected { failure, .. } => Some(failure),
            _ => None,
        }
    }
}
