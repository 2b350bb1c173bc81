//! Plank TUI entry point.

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent, KeyCode, KeyEvent,
        KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use plank_board::{DropEvent, DropTarget, Mutation, PreviewMove, SyncAction};
use plank_tui::api_client::ApiClient;
use plank_tui::config::TuiConfig;
use plank_tui::error::TuiError;
use plank_tui::events::TuiEvent;
use plank_tui::keys::{map_key, Action};
use plank_tui::nav::View;
use plank_tui::notifications::NotificationLevel;
use plank_tui::state::{App, DragGesture, Modal, SearchState};
use plank_tui::sync;
use plank_tui::views;
use plank_tui::widgets::{DescriptionEditor, EditorOutcome, FormOutcome, TaskForm};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::path::Path;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), TuiError> {
    let config = TuiConfig::load()?;
    init_logging(&config.log_path)?;
    let api = ApiClient::new(&config)?;
    let mut app = App::new(config, api);

    let mut terminal = setup_terminal()?;
    let _guard = TerminalGuard;

    let (event_tx, mut event_rx) = mpsc::channel::<TuiEvent>(256);

    spawn_input_reader(event_tx.clone());
    sync::spawn_refresh(
        app.api.clone(),
        app.project.project_id.clone(),
        event_tx.clone(),
    );
    sync::spawn_project_info(
        app.api.clone(),
        app.project.project_id.clone(),
        event_tx.clone(),
    );
    sync::spawn_current_user(app.api.clone(), event_tx.clone());

    let tick_rate = Duration::from_millis(app.config.refresh_interval_ms);
    let mut ticker = tokio::time::interval(tick_rate);

    loop {
        // One scheduling turn: record the frame geometry for mouse
        // hit-testing, flush at most one coalesced preview, draw.
        let frame_area = terminal.size()?;
        app.board_view.last_area = Some(views::body_area(frame_area));
        if let Some(mv) = app.board_view.pending_preview.take() {
            app.store.apply(Mutation::Preview(mv));
        }
        terminal.draw(|f| views::render_view(f, &app))?;

        let mut quit = false;
        tokio::select! {
            _ = ticker.tick() => {
                let _ = event_tx.send(TuiEvent::Tick).await;
                if app.idle() {
                    sync::spawn_refresh(
                        app.api.clone(),
                        app.project.project_id.clone(),
                        event_tx.clone(),
                    );
                }
            }
            Some(event) = event_rx.recv() => {
                quit = handle_event(&mut app, &event_tx, event)?;
                // Drain whatever else arrived this turn so rapid hover
                // events collapse into the preview slot before the next
                // draw.
                while !quit {
                    match event_rx.try_recv() {
                        Ok(event) => quit = handle_event(&mut app, &event_tx, event)?,
                        Err(_) => break,
                    }
                }
            }
        }
        if quit {
            break;
        }
    }

    Ok(())
}

fn init_logging(path: &Path) -> Result<(), TuiError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    let filter =
        EnvFilter::try_from_env("PLANK_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture);
    }
}

fn spawn_input_reader(sender: mpsc::Sender<TuiEvent>) {
    std::thread::spawn(move || loop {
        if let Ok(true) = event::poll(Duration::from_millis(200)) {
            if let Ok(evt) = event::read() {
                match evt {
                    CrosstermEvent::Key(key) => {
                        if key.kind == KeyEventKind::Press {
                            let _ = sender.blocking_send(TuiEvent::Input(key));
                        }
                    }
                    CrosstermEvent::Mouse(mouse) => {
                        let _ = sender.blocking_send(TuiEvent::Mouse(mouse));
                    }
                    CrosstermEvent::Resize(width, height) => {
                        let _ = sender.blocking_send(TuiEvent::Resize { width, height });
                    }
                    _ => {}
                }
            }
        }
    });
}

fn handle_event(
    app: &mut App,
    tx: &mpsc::Sender<TuiEvent>,
    event: TuiEvent,
) -> Result<bool, TuiError> {
    match event {
        TuiEvent::Input(key) => return Ok(handle_key(app, tx, key)),
        TuiEvent::Mouse(mouse) => {
            let overlay_open =
                app.form.is_some() || app.editor.is_some() || app.modal.is_some();
            if app.active_view == View::Board && !overlay_open {
                handle_mouse(app, mouse);
            }
        }
        TuiEvent::IssuesLoaded(issues) => app.load_issues(issues),
        TuiEvent::ProjectLoaded(project) => app.project.title = project.title,
        TuiEvent::UserLoaded(user) => app.current_user = Some(user),
        TuiEvent::IssueCreated(response) => {
            let message = match (&response.branch_name, &response.branch_error) {
                (Some(name), _) => {
                    format!("Issue registered. Branch '{name}' was created from the issue title.")
                }
                (None, Some(error)) => {
                    format!("Issue registered, but branch creation failed: {error}")
                }
                (None, None) => "Issue registered.".to_string(),
            };
            app.modal = Some(Modal {
                title: "Issue created".to_string(),
                message,
            });
        }
        TuiEvent::CreateFailed(message) => {
            app.modal = Some(Modal {
                title: "Create failed".to_string(),
                message,
            });
        }
        TuiEvent::DeleteFailed(message) => {
            app.modal = Some(Modal {
                title: "Delete failed".to_string(),
                message,
            });
        }
        TuiEvent::Tick | TuiEvent::Resize { .. } => {}
    }
    Ok(false)
}

fn handle_key(app: &mut App, tx: &mpsc::Sender<TuiEvent>, key: KeyEvent) -> bool {
    // Blocking acknowledgment: a modal swallows everything until dismissed.
    if app.modal.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.modal = None;
        }
        return false;
    }

    if app.form.is_some() {
        let outcome = app
            .form
            .as_mut()
            .map(|form| form.handle_key(key))
            .unwrap_or(FormOutcome::Pending);
        match outcome {
            FormOutcome::Submitted => {
                if let Some(form) = app.form.take() {
                    let reporter = app.current_user.as_ref().map(|u| u.id.clone());
                    let request = form.into_request(reporter);
                    sync::spawn_create(
                        app.api.clone(),
                        app.project.project_id.clone(),
                        request,
                        tx.clone(),
                    );
                    app.notify(NotificationLevel::Info, "Creating issue");
                }
            }
            FormOutcome::Cancelled => app.form = None,
            FormOutcome::Pending => {}
        }
        return false;
    }

    if app.editor.is_some() {
        let outcome = app
            .editor
            .as_mut()
            .map(|editor| editor.handle_key(key))
            .unwrap_or(EditorOutcome::Pending);
        match outcome {
            EditorOutcome::Saved(text) => {
                if let Some(editor) = app.editor.take() {
                    app.store.apply(Mutation::EditDescription(editor.task, text));
                }
            }
            EditorOutcome::Cancelled => app.editor = None,
            EditorOutcome::Pending => {}
        }
        return false;
    }

    if app.search.is_some() {
        match key.code {
            KeyCode::Esc => {
                app.search = None;
                app.store.apply(Mutation::ClearSearch);
                app.refresh_selection();
            }
            KeyCode::Enter => app.search = None,
            KeyCode::Backspace => {
                if let Some(search) = app.search.as_mut() {
                    search.query.pop();
                    let query = search.query.clone();
                    app.store.apply(Mutation::Search(query));
                }
                app.refresh_selection();
            }
            KeyCode::Char(c) => {
                if let Some(search) = app.search.as_mut() {
                    search.query.push(c);
                    let query = search.query.clone();
                    app.store.apply(Mutation::Search(query));
                }
                app.refresh_selection();
            }
            _ => {}
        }
        return false;
    }

    if let Some(action) = map_key(key) {
        return handle_action(app, tx, action);
    }
    false
}

fn handle_action(app: &mut App, tx: &mpsc::Sender<TuiEvent>, action: Action) -> bool {
    match action {
        Action::Quit => return true,
        Action::NextView => app.active_view = app.active_view.next(),
        Action::PrevView => app.active_view = app.active_view.previous(),
        Action::SwitchView(index) => {
            if let Some(view) = View::from_index(index) {
                app.active_view = view;
            }
        }
        Action::MoveDown => app.select_next(),
        Action::MoveUp => app.select_previous(),
        Action::MoveLeft => app.move_column(-1),
        Action::MoveRight => app.move_column(1),
        Action::NewItem => {
            if app.active_view == View::Board {
                app.form = Some(TaskForm::new(app.current_column_id()));
            }
        }
        Action::EditItem => {
            let target = app
                .selected_task()
                .map(|task| (task.id.clone(), task.description.clone()));
            if let Some((id, description)) = target {
                app.editor = Some(DescriptionEditor::new(id, description.as_deref()));
            }
        }
        Action::DeleteItem => {
            let target = app.selected_task().map(|task| task.id.clone());
            if let Some(id) = target {
                // Optimistic: the local sequence drops the task now,
                // whatever the server ends up answering.
                app.store.apply(Mutation::Remove(id.clone()));
                app.refresh_selection();
                sync::spawn_delete(
                    app.api.clone(),
                    app.project.project_id.clone(),
                    id.clone(),
                    tx.clone(),
                );
                app.notify(NotificationLevel::Info, format!("Deleted issue {id}"));
            }
        }
        Action::OpenSearch => app.search = Some(SearchState::default()),
        Action::Refresh => {
            sync::spawn_refresh(
                app.api.clone(),
                app.project.project_id.clone(),
                tx.clone(),
            );
            sync::spawn_project_info(
                app.api.clone(),
                app.project.project_id.clone(),
                tx.clone(),
            );
        }
        Action::Cancel => {
            app.store.apply(Mutation::ClearSearch);
            app.refresh_selection();
        }
        Action::Confirm => {}
    }
    false
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    let Some(area) = app.board_view.last_area else {
        return;
    };
    let layout = views::board::compute_layout(area, &app.store);
    let hit = layout.hit(mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => match hit {
            Some(DropTarget::Task(id)) => {
                app.select_task(id.clone());
                app.board_view.drag = Some(DragGesture {
                    active: id,
                    last_target: None,
                });
            }
            Some(DropTarget::Column(column)) => {
                if let Some(index) = app
                    .store
                    .columns()
                    .iter()
                    .position(|c| c.id == column)
                {
                    app.board_view.column_index = index;
                    app.refresh_selection();
                }
            }
            None => {}
        },
        MouseEventKind::Drag(MouseButton::Left) => {
            if let Some(drag) = app.board_view.drag.as_mut() {
                if let Some(target) = hit {
                    // Hovering the dragged card itself is a no-op.
                    if matches!(&target, DropTarget::Task(id) if *id == drag.active) {
                        return;
                    }
                    drag.last_target = Some(target.clone());
                    app.board_view.pending_preview.set(PreviewMove {
                        active: drag.active.clone(),
                        over: target,
                    });
                }
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if let Some(drag) = app.board_view.drag.take() {
                // The commit runs on the preview-adjusted sequence, so any
                // coalesced hover still pending is applied first.
                if let Some(mv) = app.board_view.pending_preview.take() {
                    app.store.apply(Mutation::Preview(mv));
                }
                if let Some(target) = hit {
                    let action = app.store.apply(Mutation::Drop(DropEvent {
                        active: drag.active,
                        over: target,
                    }));
                    if let Some(SyncAction::PushOrder(request)) = action {
                        sync::spawn_update_order(
                            app.api.clone(),
                            app.project.project_id.clone(),
                            request,
                        );
                    }
                }
                app.refresh_selection();
            }
        }
        _ => {}
    }
}
