//! Issue (task) data model.

use crate::identity::{ColumnId, ProjectId, TaskId, UserId};
use serde::{Deserialize, Serialize};

/// A single trackable work item.
///
/// The wire format is camelCase. Everything beyond id, title and status is
/// optional: the tracker omits fields freely and the views render a `-`
/// fallback rather than failing the whole fetch. Dates are opaque display
/// strings, exactly as the server sends them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    #[serde(default)]
    pub project_id: Option<ProjectId>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Column membership. An unrecognized value leaves the task off the
    /// board but still visible in the flat issue list.
    #[serde(default)]
    pub status: ColumnId,
    #[serde(default)]
    pub assignee_id: Option<UserId>,
    #[serde(default)]
    pub reporter_id: Option<UserId>,
    #[serde(default)]
    pub issue_type: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub labels: Vec<String>,
}
