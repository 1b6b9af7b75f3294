//! Service error types

use serde::Deserialize;
use thiserror::Error;

/// Errors talking to the Activity Directory Service
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// No response: unreachable, connection reset, timed out
    #[error("Network error: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status
    #[error("Request rejected ({status}): {}", .detail.as_deref().unwrap_or("no detail"))]
    Rejected { status: u16, detail: Option<String> },

    /// A 2xx response whose body is not what the endpoint promises
    #[error("Parse error: {0}")]
    Decode(String),
}

/// Error body of a rejected request. `detail` is usually a string but some
/// servers send structured validation errors, which carry no usable text.
#[derive(Debug, Deserialize)]
struct RejectionBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

impl ServiceError {
    /// Build a [`ServiceError::Rejected`] from a status and raw response body
    pub fn rejected(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<RejectionBody>(body)
            .ok()
            .and_then(|body| body.detail)
            .and_then(|detail| detail.as_str().map(str::to_string))
            .filter(|detail| !detail.is_empty());

        ServiceError::Rejected { status, detail }
    }

    /// Server-provided explanation, if any
    pub fn detail(&self) -> Option<&str> {
        match self {
            ServiceError::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    pub fn is_rejection(&self) -> bool {
        matches!(self, ServiceError::Rejected { .. })
    }
}

/// Result type alias for service calls
pub type ServiceResult<T> = Result<T, ServiceError>;
