//! Activity Directory Service
//!
//! The HTTP API the board talks to:
//!
//! - `GET /activities` - the full catalog
//! - `POST /activities/{name}/signup?email=...` - register a participant
//! - `DELETE /activities/{name}/participants?email=...` - remove a participant
//!
//! [`ActivityService`] is the seam between the board and a concrete HTTP
//! stack. The futures are not `Send` so browser fetch futures qualify.

pub mod endpoints;
mod error;
#[cfg(not(target_arch = "wasm32"))]
mod http;

pub use error::{ServiceError, ServiceResult};
#[cfg(not(target_arch = "wasm32"))]
pub use http::HttpActivityService;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::catalog::ActivityCatalog;

/// Body of a successful signup or unregister
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionReply {
    pub message: String,
}

impl ActionReply {
    pub fn from_json(body: &str) -> ServiceResult<Self> {
        serde_json::from_str(body).map_err(|e| ServiceError::Decode(e.to_string()))
    }
}

/// Parse a `GET /activities` body
pub fn catalog_from_json(body: &str) -> ServiceResult<ActivityCatalog> {
    ActivityCatalog::from_json(body).map_err(|e| ServiceError::Decode(e.to_string()))
}

/// Client for the Activity Directory Service
#[async_trait(?Send)]
pub trait ActivityService {
    /// Fetch the full catalog, bypassing any HTTP cache
    async fn fetch_activities(&self) -> ServiceResult<ActivityCatalog>;

    /// Register `email` for `activity`
    async fn signup(&self, activity: &str, email: &str) -> ServiceResult<ActionReply>;

    /// Remove `email` from `activity`
    async fn unregister(&self, activity: &str, email: &str) -> ServiceResult<ActionReply>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_reply_parse() {
        let reply = ActionReply::from_json(r#"{"message": "Signed up a@x.com for Chess Club"}"#).unwrap();
        assert_eq!(reply.message, "Signed up a@x.com for Chess Club");
    }

    #[test]
    fn test_action_reply_decode_error() {
        let err = ActionReply::from_json("<html>oops</html>").unwrap_err();
        assert!(matches!(err, ServiceError::Decode(_)));
    }

    #[test]
    fn test_catalog_decode_error() {
        let err = catalog_from_json(r#"{"Chess Club": {"description": 1}}"#).unwrap_err();
        assert!(matches!(err, ServiceError::Decode(_)));
    }
}
