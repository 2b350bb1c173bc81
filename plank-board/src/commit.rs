//! Drop commit: authoritative placement and the order payload.
//!
//! Runs once per completed drag gesture, on the already-preview-adjusted
//! sequence. The local mutation is applied first; the returned payload is
//! what the caller pushes to the server afterwards (optimistically - local
//! state stands whether or not the write succeeds).

use crate::preview::{array_move, DropTarget};
use plank_core::{ColumnId, Task, TaskId, UpdateOrderRequest};

/// A completed drag gesture: the dragged task and where it was released.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropEvent {
    pub active: TaskId,
    pub over: DropTarget,
}

/// Apply the authoritative placement for a drop and build the column-scoped
/// order payload.
///
/// Same-column drops onto a task are a stable permutation adopting the
/// hovered task's position. Everything else - cross-column drops and drops
/// directly on a column - appends the task to the end of the target column's
/// run. Returns `None` (sequence untouched, no payload) for self-drops and
/// unknown ids.
pub fn resolve_drop(tasks: &mut Vec<Task>, event: &DropEvent) -> Option<UpdateOrderRequest> {
    let active_index = tasks.iter().position(|t| t.id == event.active)?;

    let target_column_id = match &event.over {
        DropTarget::Task(over_id) => {
            if *over_id == event.active {
                return None;
            }
            let over_index = tasks.iter().position(|t| t.id == *over_id)?;
            let target = tasks[over_index].status.clone();

            if tasks[active_index].status == target {
                // Pure intra-column permutation: adopt the hovered position.
                array_move(tasks, active_index, over_index);
                return Some(order_payload(tasks, target));
            }
            target
        }
        DropTarget::Column(column_id) => column_id.clone(),
    };

    // Cross-column move (or drop on a column): land at the end of the
    // target column's run, wherever inside the column the drop happened.
    let mut moved = tasks.remove(active_index);
    moved.status = target_column_id.clone();
    let insert_at = last_index_of_status(tasks, &target_column_id).map_or(0, |last| last + 1);
    tasks.insert(insert_at, moved);

    Some(order_payload(tasks, target_column_id))
}

/// Index of the last task carrying `status`, scanning the whole sequence.
fn last_index_of_status(tasks: &[Task], status: &ColumnId) -> Option<usize> {
    tasks
        .iter()
        .enumerate()
        .fold(None, |last, (index, task)| {
            if task.status == *status {
                Some(index)
            } else {
                last
            }
        })
}

/// The ordered id list of every task currently in `column` - the payload the
/// server expects for that column.
fn order_payload(tasks: &[Task], column: ColumnId) -> UpdateOrderRequest {
    let issue_ids = tasks
        .iter()
        .filter(|t| t.status == column)
        .map(|t| t.id.clone())
        .collect();
    UpdateOrderRequest {
        issue_ids,
        target_column_id: column,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plank_core::ColumnId;

    fn task(id: &str, status: &str) -> Task {
        Task {
            id: TaskId::from(id),
            project_id: None,
            title: format!("task {id}"),
            description: None,
            status: ColumnId::from(status),
            assignee_id: None,
            reporter_id: None,
            issue_type: None,
            start_date: None,
            due_date: None,
            tag: None,
            labels: Vec::new(),
        }
    }

    fn ids(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.id.as_str()).collect()
    }

    fn payload_ids(payload: &UpdateOrderRequest) -> Vec<&str> {
        payload.issue_ids.iter().map(|id| id.as_str()).collect()
    }

    #[test]
    fn intra_column_drop_adopts_hovered_position() {
        let mut tasks = vec![
            task("a", "TODO"),
            task("b", "TODO"),
            task("c", "TODO"),
            task("d", "DONE"),
        ];
        let payload = resolve_drop(
            &mut tasks,
            &DropEvent {
                active: TaskId::from("a"),
                over: DropTarget::Task(TaskId::from("c")),
            },
        )
        .unwrap();

        assert_eq!(ids(&tasks), ["b", "c", "a", "d"]);
        assert_eq!(payload.target_column_id, ColumnId::from("TODO"));
        assert_eq!(payload_ids(&payload), ["b", "c", "a"]);
    }

    #[test]
    fn cross_column_drop_on_task_appends_to_run() {
        let mut tasks = vec![
            task("a", "BACKLOG"),
            task("b", "TODO"),
            task("c", "TODO"),
        ];
        // Dropped on the *first* task of TODO, but still lands at the end.
        let payload = resolve_drop(
            &mut tasks,
            &DropEvent {
                active: TaskId::from("a"),
                over: DropTarget::Task(TaskId::from("b")),
            },
        )
        .unwrap();

        assert_eq!(ids(&tasks), ["b", "c", "a"]);
        assert_eq!(tasks[2].status, ColumnId::from("TODO"));
        assert_eq!(payload_ids(&payload), ["b", "c", "a"]);
    }

    #[test]
    fn drop_on_column_appends_and_updates_status() {
        // Two backlog tasks, one in TODO; drag the first onto column TODO.
        let mut tasks = vec![
            task("1", "BACKLOG"),
            task("2", "BACKLOG"),
            task("3", "TODO"),
        ];
        let payload = resolve_drop(
            &mut tasks,
            &DropEvent {
                active: TaskId::from("1"),
                over: DropTarget::Column(ColumnId::from("TODO")),
            },
        )
        .unwrap();

        assert_eq!(ids(&tasks), ["2", "3", "1"]);
        assert_eq!(tasks[0].status, ColumnId::from("BACKLOG"));
        assert_eq!(tasks[1].status, ColumnId::from("TODO"));
        assert_eq!(tasks[2].status, ColumnId::from("TODO"));
        assert_eq!(payload_ids(&payload), ["3", "1"]);
        assert_eq!(payload.target_column_id, ColumnId::from("TODO"));
    }

    #[test]
    fn drop_on_empty_column_becomes_its_only_member() {
        let mut tasks = vec![task("a", "BACKLOG"), task("b", "BACKLOG")];
        let payload = resolve_drop(
            &mut tasks,
            &DropEvent {
                active: TaskId::from("b"),
                over: DropTarget::Column(ColumnId::from("IN_REVIEW")),
            },
        )
        .unwrap();

        // No IN_REVIEW run existed, so the task lands before everything.
        assert_eq!(ids(&tasks), ["b", "a"]);
        assert_eq!(tasks[0].status, ColumnId::from("IN_REVIEW"));
        assert_eq!(payload_ids(&payload), ["b"]);
    }

    #[test]
    fn self_drop_changes_nothing_and_yields_no_payload() {
        let mut tasks = vec![task("a", "TODO"), task("b", "TODO")];
        let before = tasks.clone();
        let payload = resolve_drop(
            &mut tasks,
            &DropEvent {
                active: TaskId::from("a"),
                over: DropTarget::Task(TaskId::from("a")),
            },
        );

        assert!(payload.is_none());
        assert_eq!(tasks, before);
    }

    #[test]
    fn unknown_active_or_target_is_noop() {
        let mut tasks = vec![task("a", "TODO")];
        let before = tasks.clone();

        assert!(resolve_drop(
            &mut tasks,
            &DropEvent {
                active: TaskId::from("ghost"),
                over: DropTarget::Column(ColumnId::from("TODO")),
            },
        )
        .is_none());
        assert!(resolve_drop(
            &mut tasks,
            &DropEvent {
                active: TaskId::from("a"),
                over: DropTarget::Task(TaskId::from("ghost")),
            },
        )
        .is_none());
        assert_eq!(tasks, before);
    }

    #[test]
    fn payload_lists_exactly_the_target_columns_ids_in_order() {
        let mut tasks = vec![
            task("a", "TODO"),
            task("b", "DONE"),
            task("c", "TODO"),
            task("d", "BACKLOG"),
            task("e", "TODO"),
        ];
        let payload = resolve_drop(
            &mut tasks,
            &DropEvent {
                active: TaskId::from("d"),
                over: DropTarget::Task(TaskId::from("c")),
            },
        )
        .unwrap();

        let expected: Vec<&str> = tasks
            .iter()
            .filter(|t| t.status == payload.target_column_id)
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(payload_ids(&payload), expected);
        assert_eq!(payload_ids(&payload), ["a", "c", "e", "d"]);
    }

    #[test]
    fn uninvolved_tasks_keep_relative_order_across_commit() {
        let mut tasks = vec![
            task("a", "BACKLOG"),
            task("b", "TODO"),
            task("c", "BACKLOG"),
            task("d", "DONE"),
        ];
        resolve_drop(
            &mut tasks,
            &DropEvent {
                active: TaskId::from("a"),
                over: DropTarget::Column(ColumnId::from("DONE")),
            },
        )
        .unwrap();

        let positions: Vec<usize> = ["b", "c", "d"]
            .iter()
            .map(|id| tasks.iter().position(|t| t.id.as_str() == *id).unwrap())
            .collect();
        assert!(positions[0] < positions[1] && positions[1] < positions[2]);
    }
}
