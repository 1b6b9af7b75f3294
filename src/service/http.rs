//! Native HTTP client for the Activity Directory Service

use async_trait::async_trait;
use reqwest::header::CACHE_CONTROL;
use reqwest::{Client, RequestBuilder};
use std::time::Duration;

use super::endpoints;
use super::{catalog_from_json, ActionReply, ActivityService, ServiceError, ServiceResult};
use crate::catalog::ActivityCatalog;
use crate::config::ServiceConfig;

/// reqwest-backed [`ActivityService`]
pub struct HttpActivityService {
    client: Client,
    base_url: String,
}

impl HttpActivityService {
    /// Create a client for the service at `config.base_url`
    pub fn new(config: &ServiceConfig) -> ServiceResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| ServiceError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: endpoints::normalize_base(&config.base_url),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a request and return the body of a 2xx response
    async fn execute(&self, request: RequestBuilder) -> ServiceResult<String> {
        let response = request.send().await.map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        if status.is_success() {
            Ok(body)
        } else {
            Err(ServiceError::rejected(status.as_u16(), &body))
        }
    }
}

fn transport_error(err: reqwest::Error) -> ServiceError {
    if err.is_timeout() {
        ServiceError::Transport(format!("request timed out: {}", err))
    } else if err.is_connect() {
        ServiceError::Transport(format!("service unavailable: {}", err))
    } else {
        ServiceError::Transport(err.to_string())
    }
}

#[async_trait(?Send)]
impl ActivityService for HttpActivityService {
    async fn fetch_activities(&self) -> ServiceResult<ActivityCatalog> {
        let request = self
            .client
            .get(endpoints::activities_url(&self.base_url))
            .header(CACHE_CONTROL, "no-store");

        let body = self.execute(request).await?;
        catalog_from_json(&body)
    }

    async fn signup(&self, activity: &str, email: &str) -> ServiceResult<ActionReply> {
        let request = self
            .client
            .post(endpoints::signup_url(&self.base_url, activity, email));

        let body = self.execute(request).await?;
        ActionReply::from_json(&body)
    }

    async fn unregister(&self, activity: &str, email: &str) -> ServiceResult<ActionReply> {
        let request = self
            .client
            .delete(endpoints::unregister_url(&self.base_url, activity, email));

        let body = self.execute(request).await?;
        ActionReply::from_json(&body)
    }
}
