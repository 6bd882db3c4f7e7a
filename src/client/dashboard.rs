//! Dashboard metrics endpoint

use crate::utils::error::Result;

use super::client::ApiClient;
use super::types::DashboardSummary;

impl ApiClient {
    /// Aggregate metrics for the landing dashboard
    pub async fn dashboard(&self) -> Result<DashboardSummary> {
        self.get_json("/api/dashboard/").await
    }
}
