//! Core HTTP transport
//!
//! One `ApiClient` per application; endpoint methods live in the sibling
//! files and share the request plumbing here. The bearer token is read from
//! the injected store on every outgoing request, so a logout in one place
//! is immediately visible to all in-flight callers.

use crate::auth::session::TokenStore;
use crate::config::ApiConfig;
use crate::utils::error::{ConsoleError, Result};
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

use super::types::ApiErrorBody;

/// Typed client for the remote administration API
pub struct ApiClient {
    pub(super) http: reqwest::Client,
    pub(super) base_url: Url,
    pub(super) store: Arc<dyn TokenStore>,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(config: &ApiConfig, store: Arc<dyn TokenStore>) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ConsoleError::Config(format!("Invalid API base URL: {}", e)))?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ConsoleError::Config(format!("Failed to build HTTP client: {}", e)))?;

        debug!("API client created for {}", base_url);
        Ok(Self {
            http,
            base_url,
            store,
        })
    }

    /// Resolve a path against the configured base URL
    pub(super) fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url.join(path).map_err(|e| {
            ConsoleError::internal(format!("Invalid endpoint path '{}': {}", path, e))
        })
    }

    /// Attach the stored bearer token, when one exists
    pub(super) fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.store.get() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Authenticated GET returning a JSON body
    pub(super) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path)?;
        self.execute(self.http.get(url)).await
    }

    /// Authenticated GET with query parameters
    pub(super) async fn get_json_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.endpoint(path)?;
        self.execute(self.http.get(url).query(query)).await
    }

    /// Authenticated POST with a JSON body, returning a JSON body
    pub(super) async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(path)?;
        self.execute(self.http.post(url).json(body)).await
    }

    /// Authenticated PATCH with a JSON body, returning a JSON body
    pub(super) async fn patch_json<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(path)?;
        self.execute(self.http.patch(url).json(body)).await
    }

    /// Authenticated POST whose response body is ignored
    pub(super) async fn post_empty(&self, path: &str) -> Result<()> {
        let url = self.endpoint(path)?;
        let response = self.authorize(self.http.post(url)).send().await?;
        Self::check(response).await
    }

    /// Authenticated DELETE whose response body is ignored
    pub(super) async fn delete_empty(&self, path: &str) -> Result<()> {
        let url = self.endpoint(path)?;
        let response = self.authorize(self.http.delete(url)).send().await?;
        Self::check(response).await
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = self.authorize(request).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }
        Err(Self::error_from(status, response).await)
    }

    async fn check(response: Response) -> Result<()> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        Err(Self::error_from(status, response).await)
    }

    /// Map a non-2xx response to the error taxonomy, extracting the API's
    /// message payload when present
    pub(super) async fn error_from(status: StatusCode, response: Response) -> ConsoleError {
        let message = response
            .json::<ApiErrorBody>()
            .await
            .ok()
            .and_then(ApiErrorBody::into_message)
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });

        warn!(%status, "API request failed: {}", message);

        match status {
            StatusCode::UNAUTHORIZED => ConsoleError::Unauthorized(message),
            StatusCode::FORBIDDEN => ConsoleError::Forbidden(message),
            StatusCode::NOT_FOUND => ConsoleError::NotFound(message),
            StatusCode::UNPROCESSABLE_ENTITY => ConsoleError::Validation(message),
            _ => ConsoleError::Api {
                status: status.as_u16(),
                message,
            },
        }
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}
