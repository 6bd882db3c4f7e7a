//! Project endpoints

use crate::utils::error::Result;

use super::client::ApiClient;
use super::types::{
    CreateProject, ListQuery, ProjectDetails, ProjectListResponse, ProjectName, UpdateProject,
};

impl ApiClient {
    /// Fetch one project
    pub async fn project(&self, project_id: &str) -> Result<ProjectDetails> {
        self.get_json(&format!("/api/projects/{}", project_id))
            .await
    }

    /// Minimal id/name pairs for project pickers
    pub async fn project_names(&self) -> Result<Vec<ProjectName>> {
        self.get_json("/api/projects/names").await
    }

    /// Create a project
    pub async fn create_project(&self, project: &CreateProject) -> Result<ProjectDetails> {
        self.post_json("/api/projects/create/", project).await
    }

    /// Partially update a project
    pub async fn update_project(
        &self,
        project_id: &str,
        update: &UpdateProject,
    ) -> Result<ProjectDetails> {
        self.patch_json(&format!("/api/projects/{}/", project_id), update)
            .await
    }

    /// Paginated project listing
    pub async fn projects(&self, query: &ListQuery) -> Result<ProjectListResponse> {
        self.get_json_with_query("/api/projects/", query).await
    }

    /// Delete a project
    pub async fn delete_project(&self, project_id: &str) -> Result<()> {
        self.delete_empty(&format!("/api/projects/{}/", project_id))
            .await
    }
}
