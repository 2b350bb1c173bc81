//! Server sync: fire-and-triggered calls feeding the event loop.
//!
//! Each function spawns the call onto the runtime and returns immediately,
//! so network latency never blocks input handling or drawing. Completions
//! come back through the event channel. Nothing here retries: user-initiated
//! actions report failure for a blocking acknowledgment, background calls
//! (refetch, order commit) are logged only and heal at the next refetch.

use crate::api_client::ApiClient;
use crate::events::TuiEvent;
use plank_core::{CreateIssueRequest, ProjectId, TaskId, UpdateOrderRequest};
use tokio::sync::mpsc;

/// Refetch the full issue set, re-establishing ground truth.
pub fn spawn_refresh(api: ApiClient, project: ProjectId, tx: mpsc::Sender<TuiEvent>) {
    tokio::spawn(async move {
        match api.list_issues(&project).await {
            Ok(issues) => {
                tracing::debug!(count = issues.len(), "issue refetch completed");
                let _ = tx.send(TuiEvent::IssuesLoaded(issues)).await;
            }
            Err(err) => tracing::error!(error = %err, "issue refetch failed"),
        }
    });
}

pub fn spawn_project_info(api: ApiClient, project: ProjectId, tx: mpsc::Sender<TuiEvent>) {
    tokio::spawn(async move {
        match api.get_project(&project).await {
            Ok(info) => {
                let _ = tx.send(TuiEvent::ProjectLoaded(info)).await;
            }
            Err(err) => tracing::error!(error = %err, "project metadata fetch failed"),
        }
    });
}

pub fn spawn_current_user(api: ApiClient, tx: mpsc::Sender<TuiEvent>) {
    tokio::spawn(async move {
        match api.current_user().await {
            Ok(user) => {
                let _ = tx.send(TuiEvent::UserLoaded(user)).await;
            }
            Err(err) => tracing::error!(error = %err, "current user fetch failed"),
        }
    });
}

/// Create an issue, then refetch for server-generated fields.
pub fn spawn_create(
    api: ApiClient,
    project: ProjectId,
    request: CreateIssueRequest,
    tx: mpsc::Sender<TuiEvent>,
) {
    tokio::spawn(async move {
        match api.create_issue(&project, &request).await {
            Ok(response) => {
                let _ = tx.send(TuiEvent::IssueCreated(response)).await;
                match api.list_issues(&project).await {
                    Ok(issues) => {
                        let _ = tx.send(TuiEvent::IssuesLoaded(issues)).await;
                    }
                    Err(err) => tracing::error!(error = %err, "refetch after create failed"),
                }
            }
            Err(err) => {
                tracing::error!(error = %err, "issue create failed");
                let _ = tx.send(TuiEvent::CreateFailed(err.to_string())).await;
            }
        }
    });
}

/// Delete an issue, then refetch. The caller has already removed the task
/// locally; this only reconciles the server side.
pub fn spawn_delete(
    api: ApiClient,
    project: ProjectId,
    id: TaskId,
    tx: mpsc::Sender<TuiEvent>,
) {
    tokio::spawn(async move {
        match api.delete_issue(&project, &id).await {
            Ok(()) => match api.list_issues(&project).await {
                Ok(issues) => {
                    let _ = tx.send(TuiEvent::IssuesLoaded(issues)).await;
                }
                Err(err) => tracing::error!(error = %err, "refetch after delete failed"),
            },
            Err(err) => {
                tracing::error!(error = %err, issue = %id, "issue delete failed");
                let _ = tx.send(TuiEvent::DeleteFailed(err.to_string())).await;
            }
        }
    });
}

/// Push a committed column order. Fire-and-forget: a failure is logged and
/// the optimistic local placement stands until the next full refetch.
pub fn spawn_update_order(api: ApiClient, project: ProjectId, request: UpdateOrderRequest) {
    tokio::spawn(async move {
        match api.update_order(&project, &request).await {
            Ok(()) => tracing::debug!(
                column = %request.target_column_id,
                count = request.issue_ids.len(),
                "order update acknowledged"
            ),
            Err(err) => tracing::error!(
                error = %err,
                column = %request.target_column_id,
                "order update failed; local state stands until next refetch"
            ),
        }
    });
}
