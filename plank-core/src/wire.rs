//! REST request and response types.
//!
//! Everything the tracker API exchanges with this client. Wire names are
//! camelCase; all types round-trip through serde.

use crate::identity::{ColumnId, ProjectId, TaskId, UserId};
use serde::{Deserialize, Serialize};

/// Request to create a new issue in a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIssueRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Column the issue is born into.
    pub status: ColumnId,
    #[serde(default)]
    pub issue_type: Option<String>,
    #[serde(default)]
    pub assignee_id: Option<UserId>,
    #[serde(default)]
    pub reporter_id: Option<UserId>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub labels: Vec<String>,
    /// Ask the server to cut a branch named after the issue.
    pub create_branch: bool,
}

/// Response to an issue creation.
///
/// The created issue's server-generated fields are not consumed here; a full
/// refetch re-establishes ground truth right after creation. Only the
/// branch-creation side info is read, to tell the user what happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIssueResponse {
    #[serde(default)]
    pub branch_name: Option<String>,
    #[serde(default)]
    pub branch_error: Option<String>,
}

/// Column-scoped reorder payload.
///
/// `issue_ids` is the intended top-to-bottom order of every issue that
/// belongs to `target_column_id` after the move; the server re-statuses and
/// reorders exactly the named ids within that column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderRequest {
    pub issue_ids: Vec<TaskId>,
    pub target_column_id: ColumnId,
}

/// Project metadata, used for display only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    #[serde(default)]
    pub id: Option<ProjectId>,
    pub title: String,
}

/// The authenticated user, as returned by `GET /user/me`.
///
/// `id` and `username` are required; a response missing either fails the
/// call at the sync boundary instead of leaking absent fields into views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: UserId,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
}
