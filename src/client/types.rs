//! API request and response models
//!
//! Shapes are dictated by the remote administration API; fields mirror its
//! JSON payloads.

use crate::auth::rbac::{PermissionRole, PermissionSet};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Login request body
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    /// Account email
    pub email: String,
    /// Account password
    pub password: String,
}

/// Successful login response
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for subsequent requests
    pub token: String,
    /// Profile of the authenticated user
    pub user: UserProfile,
}

/// Console user profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// User identifier
    pub id: String,
    /// Account email
    pub email: String,
    /// Display name
    pub name: String,
    /// Assigned role, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// New user registration payload
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    /// Display name
    pub name: String,
    /// Account email
    pub email: String,
    /// Initial password
    pub password: String,
    /// Assigned role
    pub role: String,
}

/// Partial user update payload
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateUser {
    /// New display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New account email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New role
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Paginated user listing
#[derive(Debug, Clone, Deserialize)]
pub struct UserListResponse {
    /// Users on this page
    pub users: Vec<UserProfile>,
    /// Paging envelope
    pub pagination: Pagination,
}

/// Paging envelope shared by all list endpoints
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Pagination {
    /// Total matching records
    pub total: u64,
    /// Current page, 1-based
    pub page: u32,
    /// Page size
    pub limit: u32,
    /// Total pages
    pub pages: u32,
}

/// Common list-endpoint query parameters
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListQuery {
    /// Page to fetch, 1-based
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Page size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Free-text search filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

/// Scan project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDetails {
    /// Project identifier
    pub id: String,
    /// Project name
    pub name: String,
    /// Scanner preset the project uses
    pub preset: String,
    /// Free-form description
    pub description: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// New project payload
#[derive(Debug, Clone, Serialize)]
pub struct CreateProject {
    /// Project name
    pub name: String,
    /// Scanner preset
    pub preset: String,
    /// Free-form description
    pub description: String,
}

/// Partial project update payload
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateProject {
    /// New project name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New scanner preset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
    /// New description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Paginated project listing
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectListResponse {
    /// Projects on this page
    pub projects: Vec<ProjectDetails>,
    /// Paging envelope
    pub pagination: Pagination,
}

/// Minimal project reference for pickers
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProjectName {
    /// Project identifier
    pub id: String,
    /// Project name
    pub name: String,
}

/// Code scan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanDetails {
    /// Scan identifier
    pub id: String,
    /// Owning project
    pub project_id: String,
    /// Human-readable scan name
    pub scan_name: String,
    /// Scanner-reported status
    pub status: String,
    /// Findings count so far
    pub findings: u64,
    /// Files in the scanned archive
    pub total_files: u64,
    /// Files processed so far
    pub files_scanned: u64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Completion timestamp, if finished
    pub end_time: Option<DateTime<Utc>>,
    /// User that triggered the scan
    pub triggered_by: String,
}

/// Scan trigger payload
#[derive(Debug, Clone, Serialize)]
pub struct StartScan {
    /// Project to scan
    pub project_id: String,
    /// Human-readable scan name
    pub scan_name: String,
}

/// Paginated scan listing
#[derive(Debug, Clone, Deserialize)]
pub struct ScanListResponse {
    /// Scans on this page
    pub scans: Vec<ScanDetails>,
    /// Paging envelope
    pub pagination: Pagination,
}

/// Permission set of one role, as fetched from or pushed to the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RolePermissions {
    /// The role the set belongs to
    pub role: PermissionRole,
    /// Permission flags
    pub permissions: PermissionSet,
}

/// Aggregate console metrics
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardSummary {
    /// Entity counts for the stat tiles
    pub top_counts: StatCounts,
    /// Scanner utilization
    pub system_status: SystemStatus,
    /// Findings-over-time series, shaped by the charting layer
    pub findings_trend: Vec<serde_json::Value>,
}

/// Entity counts for the stat tiles
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatCounts {
    /// Registered users
    pub users: u64,
    /// Projects
    pub projects: u64,
    /// Scans
    pub scans: u64,
    /// Findings
    pub findings: u64,
}

/// Scanner utilization percentages
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SystemStatus {
    /// Busy share, 0-100
    pub active_percentage: f64,
    /// Idle share, 0-100
    pub remaining_percentage: f64,
}

/// Error payload shape the API uses for non-2xx responses
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    /// Primary human-readable message
    #[serde(default)]
    pub message: Option<String>,
    /// Validation errors, when the API returns several
    #[serde(default)]
    pub errors: Option<Vec<String>>,
}

impl ApiErrorBody {
    /// Best human-readable message in the payload, if any
    pub fn into_message(self) -> Option<String> {
        if let Some(message) = self.message {
            return Some(message);
        }
        self.errors
            .filter(|errors| !errors.is_empty())
            .map(|errors| errors.join(", "))
    }
}
