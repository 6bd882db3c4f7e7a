//! Authentication endpoints

use crate::utils::error::{ConsoleError, Result};
use tracing::debug;

use super::client::ApiClient;
use super::types::{ApiErrorBody, LoginRequest, LoginResponse, UserProfile};

impl ApiClient {
    /// Exchange credentials for a session token and user profile.
    ///
    /// Rejected credentials surface as an authentication error carrying the
    /// API's message when its payload has one.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let url = self.endpoint("/api/login")?;
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        debug!("Logging in as {}", email);
        let response = self.http.post(url).json(&body).send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.json().await?);
        }

        if status.is_client_error() {
            let message = response
                .json::<ApiErrorBody>()
                .await
                .ok()
                .and_then(ApiErrorBody::into_message)
                .unwrap_or_else(|| "Login failed".to_string());
            return Err(ConsoleError::Auth(message));
        }

        Err(Self::error_from(status, response).await)
    }

    /// Profile of the currently authenticated user
    pub async fn me(&self) -> Result<UserProfile> {
        self.get_json("/api/me").await
    }

    /// Invalidate the session server-side
    pub async fn logout(&self) -> Result<()> {
        self.post_empty("/auth/logout").await
    }
}
