//! API client tests

#[cfg(test)]
mod tests {
    use crate::auth::rbac::PermissionRole;
    use crate::auth::session::{MemoryTokenStore, TokenStore};
    use crate::client::ApiClient;
    use crate::client::types::{CreateProject, ListQuery, RolePermissions};
    use crate::config::ApiConfig;
    use crate::utils::error::ConsoleError;
    use serde_json::json;
    use std::sync::Arc;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> (ApiClient, Arc<MemoryTokenStore>) {
        let store = Arc::new(MemoryTokenStore::new());
        let config = ApiConfig {
            base_url: server.uri(),
            timeout_secs: 5,
        };
        let client = ApiClient::new(&config, store.clone()).unwrap();
        (client, store)
    }

    fn user_body() -> serde_json::Value {
        json!({
            "id": "u-1",
            "email": "ada@example.com",
            "name": "Ada",
            "role": "manager"
        })
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        let config = ApiConfig {
            base_url: "not a url".to_string(),
            timeout_secs: 5,
        };
        let result = ApiClient::new(&config, Arc::new(MemoryTokenStore::new()));
        assert!(matches!(result, Err(ConsoleError::Config(_))));
    }

    #[tokio::test]
    async fn test_login_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "token": "tok-123",
                "user": user_body()
            })))
            .mount(&server)
            .await;

        let (client, _store) = test_client(&server);
        let response = client.login("ada@example.com", "hunter2").await.unwrap();

        assert_eq!(response.token, "tok-123");
        assert_eq!(response.user.email, "ada@example.com");
        assert_eq!(response.user.role.as_deref(), Some("manager"));
    }

    #[tokio::test]
    async fn test_login_rejection_extracts_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid credentials"})),
            )
            .mount(&server)
            .await;

        let (client, _store) = test_client(&server);
        let error = client.login("ada@example.com", "wrong").await.unwrap_err();

        match error {
            ConsoleError::Auth(message) => assert_eq!(message, "Invalid credentials"),
            other => panic!("expected Auth error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_login_rejection_without_payload_uses_default() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(ResponseTemplate::new(400))
            .mount(&server)
            .await;

        let (client, _store) = test_client(&server);
        let error = client.login("ada@example.com", "wrong").await.unwrap_err();

        match error {
            ConsoleError::Auth(message) => assert_eq!(message, "Login failed"),
            other => panic!("expected Auth error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_bearer_token_attached_when_present() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/me"))
            .and(header("authorization", "Bearer tok-123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(user_body()))
            .mount(&server)
            .await;

        let (client, store) = test_client(&server);
        store.set("tok-123");

        let user = client.me().await.unwrap();
        assert_eq!(user.id, "u-1");
    }

    #[tokio::test]
    async fn test_unauthorized_maps_to_dedicated_variant() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/me"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"message": "Token expired"})),
            )
            .mount(&server)
            .await;

        let (client, _store) = test_client(&server);
        let error = client.me().await.unwrap_err();
        assert!(error.is_unauthorized());
    }

    #[tokio::test]
    async fn test_permissions_fetch_and_update() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/auth/permissions/manager"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "role": "manager",
                "permissions": {"view_projects": true, "create_scan": false}
            })))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/auth/permissions/update/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "role": "manager",
                "permissions": {"view_projects": true, "create_scan": true}
            })))
            .mount(&server)
            .await;

        let (client, _store) = test_client(&server);

        let fetched = client
            .permissions_for_role(PermissionRole::Manager)
            .await
            .unwrap();
        assert_eq!(fetched.role, PermissionRole::Manager);
        assert_eq!(fetched.permissions.get("view_projects"), Some(&true));

        let update = RolePermissions {
            role: PermissionRole::Manager,
            permissions: [("create_scan".to_string(), true)].into_iter().collect(),
        };
        let updated = client.update_permissions(&update).await.unwrap();
        assert_eq!(updated.permissions.get("create_scan"), Some(&true));
    }

    #[tokio::test]
    async fn test_permissions_failures_map_to_screen_errors() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/auth/permissions/user"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/auth/permissions/update/"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let (client, _store) = test_client(&server);

        let fetch_error = client
            .permissions_for_role(PermissionRole::User)
            .await
            .unwrap_err();
        assert!(matches!(fetch_error, ConsoleError::PermissionFetch(_)));

        let update = RolePermissions {
            role: PermissionRole::User,
            permissions: Default::default(),
        };
        let update_error = client.update_permissions(&update).await.unwrap_err();
        assert!(matches!(update_error, ConsoleError::PermissionUpdate(_)));
    }

    #[tokio::test]
    async fn test_permissions_fetch_keeps_unauthorized_visible() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/auth/permissions/user"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let (client, _store) = test_client(&server);
        let error = client
            .permissions_for_role(PermissionRole::User)
            .await
            .unwrap_err();
        assert!(error.is_unauthorized());
    }

    #[tokio::test]
    async fn test_project_listing_passes_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/projects/"))
            .and(query_param("page", "2"))
            .and(query_param("search", "gateway"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "projects": [{
                    "id": "p-1",
                    "name": "gateway",
                    "preset": "deep",
                    "description": "edge service",
                    "created_at": "2024-03-01T09:00:00Z",
                    "updated_at": "2024-03-02T10:30:00Z"
                }],
                "pagination": {"total": 1, "page": 2, "limit": 10, "pages": 1}
            })))
            .mount(&server)
            .await;

        let (client, _store) = test_client(&server);
        let query = ListQuery {
            page: Some(2),
            limit: None,
            search: Some("gateway".to_string()),
        };
        let listing = client.projects(&query).await.unwrap();

        assert_eq!(listing.projects.len(), 1);
        assert_eq!(listing.projects[0].name, "gateway");
        assert_eq!(listing.pagination.page, 2);
    }

    #[tokio::test]
    async fn test_create_project_round_trip() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/projects/create/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "p-2",
                "name": "billing",
                "preset": "default",
                "description": "",
                "created_at": "2024-03-01T09:00:00Z",
                "updated_at": "2024-03-01T09:00:00Z"
            })))
            .mount(&server)
            .await;

        let (client, _store) = test_client(&server);
        let created = client
            .create_project(&CreateProject {
                name: "billing".to_string(),
                preset: "default".to_string(),
                description: String::new(),
            })
            .await
            .unwrap();
        assert_eq!(created.id, "p-2");
    }

    #[tokio::test]
    async fn test_dashboard_summary() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/dashboard/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "top_counts": {"users": 4, "projects": 7, "scans": 31, "findings": 204},
                "system_status": {"active_percentage": 12.5, "remaining_percentage": 87.5},
                "findings_trend": [{"week": "2024-W09", "count": 17}]
            })))
            .mount(&server)
            .await;

        let (client, _store) = test_client(&server);
        let summary = client.dashboard().await.unwrap();

        assert_eq!(summary.top_counts.findings, 204);
        assert_eq!(summary.system_status.active_percentage, 12.5);
        assert_eq!(summary.findings_trend.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_ignores_response_body() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/scans/delete/s-9/"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let (client, _store) = test_client(&server);
        client.delete_scan("s-9").await.unwrap();
    }
}
