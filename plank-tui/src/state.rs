//! Application state and view state definitions.

use crate::api_client::ApiClient;
use crate::config::TuiConfig;
use crate::nav::View;
use crate::notifications::{Notification, NotificationLevel};
use crate::theme::BoardTheme;
use crate::widgets::{DescriptionEditor, TaskForm};
use plank_board::{BoardStore, DropTarget, Mutation, PreviewSlot};
use plank_core::{ColumnId, ProjectId, Task, TaskId, UserResponse};
use ratatui::layout::Rect;

#[derive(Debug, Clone)]
pub struct ProjectContext {
    pub project_id: ProjectId,
    pub title: String,
}

pub struct App {
    pub config: TuiConfig,
    pub theme: BoardTheme,
    pub api: ApiClient,
    pub project: ProjectContext,
    pub current_user: Option<UserResponse>,
    pub store: BoardStore,
    pub active_view: View,

    pub board_view: BoardViewState,
    pub list_view: ListViewState,

    pub search: Option<SearchState>,
    pub form: Option<TaskForm>,
    pub editor: Option<DescriptionEditor>,
    pub modal: Option<Modal>,
    pub notifications: Vec<Notification>,
}

impl App {
    pub fn new(config: TuiConfig, api: ApiClient) -> Self {
        let project = ProjectContext {
            project_id: ProjectId::new(config.project_id.clone()),
            title: config.project_id.clone(),
        };
        Self {
            config,
            theme: BoardTheme::slate(),
            api,
            project,
            current_user: None,
            store: BoardStore::with_workflow_columns(),
            active_view: View::Board,
            board_view: BoardViewState::new(),
            list_view: ListViewState::new(),
            search: None,
            form: None,
            editor: None,
            modal: None,
            notifications: Vec::new(),
        }
    }

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.notifications.push(Notification::new(level, message));
    }

    /// Whether a periodic background refetch may replace the sequence right
    /// now. Never mid-gesture, under an open overlay, or while a search
    /// term is being typed.
    pub fn idle(&self) -> bool {
        self.board_view.drag.is_none()
            && self.form.is_none()
            && self.editor.is_none()
            && self.modal.is_none()
            && self.search.is_none()
    }

    /// Wholesale replacement after a refetch: supersedes any search filter
    /// and any in-flight gesture.
    pub fn load_issues(&mut self, issues: Vec<Task>) {
        self.store.apply(Mutation::Replace(issues));
        self.search = None;
        self.board_view.drag = None;
        self.board_view.pending_preview.clear();
        self.ensure_board_selection();
        self.clamp_list_selection();
    }

    pub fn current_column_id(&self) -> ColumnId {
        let columns = self.store.columns();
        let index = self.board_view.column_index.min(columns.len().saturating_sub(1));
        columns[index].id.clone()
    }

    /// The task the current view points at, if any.
    pub fn selected_task(&self) -> Option<&Task> {
        match self.active_view {
            View::Board => self
                .board_view
                .selected
                .as_ref()
                .and_then(|id| self.store.task(id)),
            View::IssueList => self.store.tasks().get(self.list_view.selected),
        }
    }

    pub fn select_next(&mut self) {
        match self.active_view {
            View::Board => self.move_board_selection(1),
            View::IssueList => {
                let len = self.store.tasks().len();
                if len > 0 {
                    self.list_view.selected = (self.list_view.selected + 1) % len;
                }
            }
        }
    }

    pub fn select_previous(&mut self) {
        match self.active_view {
            View::Board => self.move_board_selection(-1),
            View::IssueList => {
                let len = self.store.tasks().len();
                if len > 0 {
                    self.list_view.selected = if self.list_view.selected == 0 {
                        len - 1
                    } else {
                        self.list_view.selected - 1
                    };
                }
            }
        }
    }

    /// Switch the focused board column, selecting its first task.
    pub fn move_column(&mut self, delta: i64) {
        if self.active_view != View::Board {
            return;
        }
        let count = self.store.columns().len() as i64;
        if count == 0 {
            return;
        }
        let current = self.board_view.column_index as i64;
        let next = (current + delta).rem_euclid(count) as usize;
        self.board_view.column_index = next;
        let column = self.current_column_id();
        self.board_view.selected = self.store.tasks_in(&column).next().map(|t| t.id.clone());
    }

    /// Point the board selection at a specific task, following it into its
    /// column (used when a card is grabbed with the mouse).
    pub fn select_task(&mut self, id: TaskId) {
        if let Some(task) = self.store.task(&id) {
            let status = task.status.clone();
            if let Some(index) = self
                .store
                .columns()
                .iter()
                .position(|c| c.id == status)
            {
                self.board_view.column_index = index;
            }
            self.board_view.selected = Some(id);
        }
    }

    /// Drop a stale selection; fall back to the focused column's first task.
    pub fn ensure_board_selection(&mut self) {
        let column = self.current_column_id();
        let still_valid = self
            .board_view
            .selected
            .as_ref()
            .and_then(|id| self.store.task(id))
            .map(|t| t.status == column)
            .unwrap_or(false);
        if !still_valid {
            self.board_view.selected = self.store.tasks_in(&column).next().map(|t| t.id.clone());
        }
    }

    /// Re-validate both selections after the sequence changed under them.
    pub fn refresh_selection(&mut self) {
        self.ensure_board_selection();
        self.clamp_list_selection();
    }

    fn clamp_list_selection(&mut self) {
        let len = self.store.tasks().len();
        if len == 0 {
            self.list_view.selected = 0;
        } else if self.list_view.selected >= len {
            self.list_view.selected = len - 1;
        }
    }

    fn move_board_selection(&mut self, delta: i64) {
        let column = self.current_column_id();
        let ids: Vec<TaskId> = self.store.tasks_in(&column).map(|t| t.id.clone()).collect();
        if ids.is_empty() {
            self.board_view.selected = None;
            return;
        }
        let len = ids.len() as i64;
        let current = self
            .board_view
            .selected
            .as_ref()
            .and_then(|id| ids.iter().position(|i| i == id))
            .map(|i| i as i64);
        let next = match current {
            Some(index) => (index + delta).rem_euclid(len) as usize,
            None => 0,
        };
        self.board_view.selected = Some(ids[next].clone());
    }
}

/// A drag gesture in progress: the grabbed card and the last hover target.
#[derive(Debug, Clone)]
pub struct DragGesture {
    pub active: TaskId,
    pub last_target: Option<DropTarget>,
}

pub struct BoardViewState {
    pub column_index: usize,
    pub selected: Option<TaskId>,
    pub drag: Option<DragGesture>,
    /// Latest-pending hover, drained once per turn before drawing.
    pub pending_preview: PreviewSlot,
    /// Body area of the last frame, for mouse hit-testing.
    pub last_area: Option<Rect>,
}

impl BoardViewState {
    pub fn new() -> Self {
        Self {
            column_index: 0,
            selected: None,
            drag: None,
            pending_preview: PreviewSlot::new(),
            last_area: None,
        }
    }
}

pub struct ListViewState {
    pub selected: usize,
}

impl ListViewState {
    pub fn new() -> Self {
        Self { selected: 0 }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub query: String,
}

#[derive(Debug, Clone)]
pub struct Modal {
    pub title: String,
    pub message: String,
}

impl Default for BoardViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for ListViewState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plank_core::ColumnId;
    use std::path::PathBuf;

    fn base_config() -> TuiConfig {
        TuiConfig {
            api_base_url: "http://localhost:3001".to_string(),
            project_id: "p-1".to_string(),
            session_cookie: None,
            request_timeout_ms: 5_000,
            refresh_interval_ms: 10_000,
            log_path: PathBuf::from("tmp/plank.log"),
        }
    }

    fn sample_task(id: &str, status: &str) -> Task {
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

    fn app() -> App {
        let config = base_config();
        let api = ApiClient::new(&config).unwrap();
        let mut app = App::new(config, api);
        app.load_issues(vec![
            sample_task("1", "BACKLOG"),
            sample_task("2", "BACKLOG"),
            sample_task("3", "TODO"),
        ]);
        app
    }

    #[test]
    fn load_selects_first_task_of_focused_column() {
        let app = app();
        assert_eq!(app.board_view.column_index, 0);
        assert_eq!(app.board_view.selected, Some(TaskId::from("1")));
    }

    #[test]
    fn board_selection_wraps_within_column() {
        let mut app = app();
        app.select_next();
        assert_eq!(app.board_view.selected, Some(TaskId::from("2")));
        app.select_next();
        assert_eq!(app.board_view.selected, Some(TaskId::from("1")));
    }

    #[test]
    fn moving_column_selects_its_first_task() {
        let mut app = app();
        app.move_column(1);
        assert_eq!(app.board_view.column_index, 1);
        assert_eq!(app.board_view.selected, Some(TaskId::from("3")));
    }

    #[test]
    fn select_task_follows_into_its_column() {
        let mut app = app();
        app.select_task(TaskId::from("3"));
        assert_eq!(app.board_view.column_index, 1);
        assert_eq!(app.board_view.selected, Some(TaskId::from("3")));
    }

    #[test]
    fn load_issues_supersedes_search_and_gesture() {
        let mut app = app();
        app.search = Some(SearchState {
            query: "bug".to_string(),
        });
        app.store.apply(Mutation::Search("bug".to_string()));
        app.board_view.drag = Some(DragGesture {
            active: TaskId::from("1"),
            last_target: None,
        });

        app.load_issues(vec![sample_task("9", "DONE")]);
        assert!(app.search.is_none());
        assert!(app.board_view.drag.is_none());
        assert!(app.board_view.pending_preview.is_empty());
        assert_eq!(app.store.tasks().len(), 1);
    }

    #[test]
    fn list_selection_is_clamped_on_load() {
        let mut app = app();
        app.list_view.selected = 2;
        app.load_issues(vec![sample_task("9", "DONE")]);
        assert_eq!(app.list_view.selected, 0);
    }

    #[test]
    fn selected_task_follows_the_active_view() {
        let mut app = app();
        assert_eq!(app.selected_task().unwrap().id, TaskId::from("1"));
        app.active_view = View::IssueList;
        app.list_view.selected = 2;
        assert_eq!(app.selected_task().unwrap().id, TaskId::from("3"));
    }
}
