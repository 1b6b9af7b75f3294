//! HTTP API Client
//!
//! [`ActivityService`] over the browser's fetch API.

use activity_board::service::endpoints;
use activity_board::service::{catalog_from_json, ActionReply, ActivityService, ServiceError, ServiceResult};
use activity_board::ActivityCatalog;
use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};
use web_sys::RequestCache;

/// Local storage key for a custom API base URL
pub const API_BASE_KEY: &str = "activity_board_api_url";

/// Default API base URL: the page's own origin
pub const DEFAULT_API_BASE: &str = "";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_BASE_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    endpoints::normalize_base(&url)
}

/// gloo-net backed [`ActivityService`]
pub struct GlooActivityService {
    base_url: String,
}

impl GlooActivityService {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: endpoints::normalize_base(base_url),
        }
    }

    /// Send a request and return the body of a 2xx response
    async fn execute(request: RequestBuilder) -> ServiceResult<String> {
        let response = request
            .send()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        if response.ok() {
            Ok(body)
        } else {
            Err(ServiceError::rejected(response.status(), &body))
        }
    }
}

#[async_trait(?Send)]
impl ActivityService for GlooActivityService {
    async fn fetch_activities(&self) -> ServiceResult<ActivityCatalog> {
        let request = Request::get(&endpoints::activities_url(&self.base_url))
            .cache(RequestCache::NoStore);

        let body = Self::execute(request).await?;
        catalog_from_json(&body)
    }

    async fn signup(&self, activity: &str, email: &str) -> ServiceResult<ActionReply> {
        let request = Request::post(&endpoints::signup_url(&self.base_url, activity, email));

        let body = Self::execute(request).await?;
        ActionReply::from_json(&body)
    }

    async fn unregister(&self, activity: &str, email: &str) -> ServiceResult<ActionReply> {
        let request = Request::delete(&endpoints::unregister_url(&self.base_url, activity, email));

        let body = Self::execute(request).await?;
        ActionReply::from_json(&body)
    }
}
