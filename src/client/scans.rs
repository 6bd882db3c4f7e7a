//! Scan endpoints
//!
//! Triggering a scan submits its metadata only; archive upload travels
//! outside this client.

use crate::utils::error::Result;

use super::client::ApiClient;
use super::types::{ListQuery, ScanDetails, ScanListResponse, StartScan};

impl ApiClient {
    /// Fetch one scan
    pub async fn scan(&self, scan_id: &str) -> Result<ScanDetails> {
        self.get_json(&format!("/api/scans/{}", scan_id)).await
    }

    /// Trigger a new scan
    pub async fn start_scan(&self, scan: &StartScan) -> Result<ScanDetails> {
        self.post_json("/api/scans/create/", scan).await
    }

    /// Paginated scans of one project
    pub async fn scans_for_project(
        &self,
        project_id: &str,
        query: &ListQuery,
    ) -> Result<ScanListResponse> {
        self.get_json_with_query(&format!("/api/scans/project/{}/", project_id), query)
            .await
    }

    /// Delete a scan
    pub async fn delete_scan(&self, scan_id: &str) -> Result<()> {
        self.delete_empty(&format!("/api/scans/delete/{}/", scan_id))
            .await
    }
}
