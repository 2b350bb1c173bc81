//! Task/column store: the single source of truth for the board.

use crate::commit::{self, DropEvent};
use crate::preview::{self, PreviewMove};
use crate::search;
use plank_core::{Column, ColumnId, Task, TaskId, UpdateOrderRequest};

/// Every way the task sequence can change.
///
/// Preview, commit and refetch all arrive here, which keeps the
/// single-writer invariant explicit: one owner, one entry point, mutations
/// totally ordered by arrival.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    /// Wholesale replacement after a server refetch.
    Replace(Vec<Task>),
    /// Provisional drag feedback; visual only.
    Preview(PreviewMove),
    /// Authoritative placement for a completed gesture.
    Drop(DropEvent),
    /// Optimistic local delete, independent of the server response.
    Remove(TaskId),
    /// Local description edit.
    EditDescription(TaskId, String),
    /// Replace the working sequence with a title-filtered snapshot view.
    Search(String),
    /// Restore the working sequence from the snapshot.
    ClearSearch,
}

/// A server write the caller must fire after a mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncAction {
    /// PATCH the column-scoped order for the committed drop.
    PushOrder(UpdateOrderRequest),
}

/// Flat ordered task sequence plus the fixed column taxonomy.
///
/// `tasks` is the working sequence the views render; `snapshot` is the last
/// fetched full set, retained for the search filter. Consumers must not
/// assume index stability across mutations - only `status` plus relative
/// order within a status group is meaningful.
#[derive(Debug, Clone)]
pub struct BoardStore {
    columns: Vec<Column>,
    tasks: Vec<Task>,
    snapshot: Vec<Task>,
}

impl BoardStore {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            tasks: Vec::new(),
            snapshot: Vec::new(),
        }
    }

    /// A store over the fixed five-column workflow.
    pub fn with_workflow_columns() -> Self {
        Self::new(Column::workflow())
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// The working sequence, in display order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Tasks belonging to one column, in sequence order.
    pub fn tasks_in<'a>(&'a self, column: &'a ColumnId) -> impl Iterator<Item = &'a Task> {
        self.tasks.iter().filter(move |t| t.status == *column)
    }

    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == *id)
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Apply one mutation; the only write path into the store.
    ///
    /// Commits return the [`SyncAction`] carrying the server payload; every
    /// other mutation is purely local.
    pub fn apply(&mut self, mutation: Mutation) -> Option<SyncAction> {
        match mutation {
            Mutation::Replace(tasks) => {
                self.snapshot = tasks.clone();
                self.tasks = tasks;
                None
            }
            Mutation::Preview(mv) => {
                preview::apply_preview(&mut self.tasks, &mv);
                None
            }
            Mutation::Drop(event) => {
                commit::resolve_drop(&mut self.tasks, &event).map(SyncAction::PushOrder)
            }
            Mutation::Remove(id) => {
                self.tasks.retain(|t| t.id != id);
                None
            }
            Mutation::EditDescription(id, description) => {
                if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
                    task.description = Some(description);
                }
                None
            }
            Mutation::Search(term) => {
                self.tasks = search::filter_by_title(&self.snapshot, &term);
                None
            }
            Mutation::ClearSearch => {
                self.tasks = self.snapshot.clone();
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preview::DropTarget;

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

    fn seeded() -> BoardStore {
        let mut store = BoardStore::with_workflow_columns();
        store.apply(Mutation::Replace(vec![
            task("1", "BACKLOG"),
            task("2", "BACKLOG"),
            task("3", "TODO"),
        ]));
        store
    }

    #[test]
    fn replace_resets_working_sequence_and_snapshot() {
        let mut store = seeded();
        store.apply(Mutation::Search("nothing-matches".to_string()));
        assert!(store.tasks().is_empty());

        store.apply(Mutation::Replace(vec![task("9", "DONE")]));
        assert_eq!(store.tasks().len(), 1);
        store.apply(Mutation::ClearSearch);
        assert_eq!(store.tasks().len(), 1);
    }

    #[test]
    fn tasks_in_filters_by_column_in_order() {
        let store = seeded();
        let backlog_col = ColumnId::from("BACKLOG");
        let backlog: Vec<&str> = store
            .tasks_in(&backlog_col)
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(backlog, ["1", "2"]);
    }

    #[test]
    fn unknown_status_matches_no_column() {
        let mut store = seeded();
        store.apply(Mutation::Replace(vec![task("weird", "ARCHIVED")]));
        for column in store.columns().to_vec() {
            assert_eq!(store.tasks_in(&column.id).count(), 0);
        }
        // Still present in the flat sequence (the issue list shows it).
        assert_eq!(store.tasks().len(), 1);
    }

    #[test]
    fn drop_yields_the_order_payload() {
        let mut store = seeded();
        let action = store.apply(Mutation::Drop(DropEvent {
            active: TaskId::from("1"),
            over: DropTarget::Column(ColumnId::from("TODO")),
        }));

        let Some(SyncAction::PushOrder(payload)) = action else {
            panic!("expected a push-order action");
        };
        assert_eq!(payload.target_column_id, ColumnId::from("TODO"));
        let ids: Vec<&str> = payload.issue_ids.iter().map(|id| id.as_str()).collect();
        assert_eq!(ids, ["3", "1"]);
    }

    #[test]
    fn preview_and_local_edits_yield_no_sync_action() {
        let mut store = seeded();
        assert!(store
            .apply(Mutation::Preview(PreviewMove {
                active: TaskId::from("1"),
                over: DropTarget::Column(ColumnId::from("TODO")),
            }))
            .is_none());
        assert!(store
            .apply(Mutation::EditDescription(
                TaskId::from("1"),
                "rewritten".to_string(),
            ))
            .is_none());
        assert_eq!(
            store.task(&TaskId::from("1")).unwrap().description.as_deref(),
            Some("rewritten")
        );
    }

    #[test]
    fn remove_is_immediate_and_local() {
        let mut store = seeded();
        assert!(store.apply(Mutation::Remove(TaskId::from("2"))).is_none());
        assert!(store.task(&TaskId::from("2")).is_none());
        assert_eq!(store.tasks().len(), 2);
    }

    #[test]
    fn search_projects_the_snapshot_and_clear_restores_it() {
        let mut store = BoardStore::with_workflow_columns();
        store.apply(Mutation::Replace(vec![
            Task {
                title: "Bugfix".to_string(),
                ..task("1", "TODO")
            },
            Task {
                title: "Feature".to_string(),
                ..task("2", "TODO")
            },
        ]));

        store.apply(Mutation::Search("bug".to_string()));
        assert_eq!(store.tasks().len(), 1);
        assert_eq!(store.tasks()[0].id, TaskId::from("1"));

        store.apply(Mutation::ClearSearch);
        assert_eq!(store.tasks().len(), 2);
    }

    #[test]
    fn self_drop_produces_no_action() {
        let mut store = seeded();
        let before = store.tasks().to_vec();
        let action = store.apply(Mutation::Drop(DropEvent {
            active: TaskId::from("3"),
            over: DropTarget::Task(TaskId::from("3")),
        }));
        assert!(action.is_none());
        assert_eq!(store.tasks(), &before[..]);
    }
}
