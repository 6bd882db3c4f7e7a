//! User administration endpoints

use crate::utils::error::Result;

use super::client::ApiClient;
use super::types::{ListQuery, NewUser, UpdateUser, UserListResponse, UserProfile};

impl ApiClient {
    /// Fetch one user's profile
    pub async fn user(&self, user_id: &str) -> Result<UserProfile> {
        self.get_json(&format!("/api/auth/users/{}", user_id)).await
    }

    /// Register a new user
    pub async fn register_user(&self, user: &NewUser) -> Result<UserProfile> {
        self.post_json("/api/auth/register/", user).await
    }

    /// Partially update a user
    pub async fn update_user(&self, user_id: &str, update: &UpdateUser) -> Result<UserProfile> {
        self.patch_json(&format!("/api/auth/users/{}", user_id), update)
            .await
    }

    /// Paginated user listing
    pub async fn users(&self, query: &ListQuery) -> Result<UserListResponse> {
        self.get_json_with_query("/api/auth/users", query).await
    }

    /// Delete a user
    pub async fn delete_user(&self, user_id: &str) -> Result<()> {
        self.delete_empty(&format!("/api/auth/users/{}", user_id))
            .await
    }
}
