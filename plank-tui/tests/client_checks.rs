use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use plank_board::{BoardStore, DropTarget, Mutation};
use plank_core::{ColumnId, Task, TaskId};
use plank_tui::config::TuiConfig;
use plank_tui::keys::{map_key, Action};
use plank_tui::nav::View;
use plank_tui::views::board::compute_layout;
use proptest::prelude::*;
use ratatui::layout::Rect;
use std::path::PathBuf;

fn base_config() -> TuiConfig {
    TuiConfig {
        api_base_url: "http://localhost:3001".to_string(),
        project_id: "p-1".to_string(),
        session_cookie: Some("session=abc123".to_string()),
        request_timeout_ms: 5_000,
        refresh_interval_ms: 10_000,
        log_path: PathBuf::from("tmp/plank.log"),
    }
}

#[test]
fn config_accepts_the_baseline() {
    assert!(base_config().validate().is_ok());
}

#[test]
fn config_requires_api_base_url() {
    let mut config = base_config();
    config.api_base_url = "  ".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn config_requires_project_id() {
    let mut config = base_config();
    config.project_id = String::new();
    assert!(config.validate().is_err());
}

#[test]
fn config_rejects_empty_session_cookie() {
    let mut config = base_config();
    config.session_cookie = Some(String::new());
    assert!(config.validate().is_err());
}

#[test]
fn config_allows_absent_session_cookie() {
    let mut config = base_config();
    config.session_cookie = None;
    assert!(config.validate().is_ok());
}

#[test]
fn config_rejects_zero_intervals() {
    let mut config = base_config();
    config.request_timeout_ms = 0;
    assert!(config.validate().is_err());

    let mut config = base_config();
    config.refresh_interval_ms = 0;
    assert!(config.validate().is_err());
}

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn keymap_covers_the_core_actions() {
    assert_eq!(map_key(press(KeyCode::Char('q'))), Some(Action::Quit));
    assert_eq!(map_key(press(KeyCode::Char('/'))), Some(Action::OpenSearch));
    assert_eq!(map_key(press(KeyCode::Char('n'))), Some(Action::NewItem));
    assert_eq!(map_key(press(KeyCode::Char('d'))), Some(Action::DeleteItem));
    assert_eq!(map_key(press(KeyCode::Tab)), Some(Action::NextView));
    assert_eq!(map_key(press(KeyCode::Char('1'))), Some(Action::SwitchView(0)));
    assert_eq!(
        map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        Some(Action::Quit)
    );
    assert_eq!(map_key(press(KeyCode::F(5))), None);
}

fn sample_task(index: usize, status: &str) -> Task {
    Task {
        id: TaskId::new(format!("t{index}")),
        project_id: None,
        title: format!("Task {index}"),
        description: None,
        status: ColumnId::new(status),
        assignee_id: None,
        reporter_id: None,
        issue_type: None,
        start_date: None,
        due_date: None,
        tag: None,
        labels: Vec::new(),
    }
}

const STATUSES: [&str; 5] = ["BACKLOG", "TODO", "IN_PROGRESS", "IN_REVIEW", "DONE"];

fn seeded_store(statuses: &[usize]) -> BoardStore {
    let tasks = statuses
        .iter()
        .enumerate()
        .map(|(index, status)| sample_task(index, STATUSES[status % STATUSES.len()]))
        .collect();
    let mut store = BoardStore::with_workflow_columns();
    store.apply(Mutation::Replace(tasks));
    store
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// View navigation is cyclic in both directions.
    #[test]
    fn view_navigation_cycles(start in 0usize..2, steps in 0usize..8) {
        let view = View::from_index(start).unwrap();
        let mut forward = view;
        let mut backward = view;
        for _ in 0..steps {
            forward = forward.next();
            backward = backward.previous();
        }
        for _ in 0..steps {
            forward = forward.previous();
            backward = backward.next();
        }
        prop_assert_eq!(forward, view);
        prop_assert_eq!(backward, view);
    }

    /// Layout never panics and every card rectangle stays inside its
    /// column rectangle.
    #[test]
    fn layout_cards_stay_inside_their_columns(
        statuses in prop::collection::vec(0usize..5, 0..20),
        width in 10u16..300,
        height in 3u16..80,
    ) {
        let store = seeded_store(&statuses);
        let layout = compute_layout(Rect::new(0, 0, width, height), &store);

        for column in &layout.columns {
            for card in &column.cards {
                prop_assert!(card.area.x >= column.area.x);
                prop_assert!(card.area.bottom() <= column.area.bottom());
                prop_assert!(card.area.right() <= column.area.right());
            }
        }
    }

    /// A hit on a card resolves to a task that belongs to the hit column.
    #[test]
    fn card_hits_resolve_to_tasks_of_that_column(
        statuses in prop::collection::vec(0usize..5, 1..20),
    ) {
        let store = seeded_store(&statuses);
        let layout = compute_layout(Rect::new(0, 0, 200, 40), &store);

        for column in &layout.columns {
            for card in &column.cards {
                let target = layout.hit(card.area.x, card.area.y);
                match target {
                    Some(DropTarget::Task(id)) => {
                        let task = store.task(&id).unwrap();
                        prop_assert_eq!(&task.status, &column.column);
                    }
                    other => prop_assert!(false, "expected a task hit, got {:?}", other),
                }
            }
        }
    }

    /// Hits outside the board area resolve to nothing.
    #[test]
    fn out_of_area_hits_are_none(
        statuses in prop::collection::vec(0usize..5, 0..10),
        x in 0u16..400,
    ) {
        let store = seeded_store(&statuses);
        let layout = compute_layout(Rect::new(0, 0, 200, 40), &store);
        prop_assert_eq!(layout.hit(x, 300), None);
    }
}
