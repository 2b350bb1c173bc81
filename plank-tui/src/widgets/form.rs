//! Task creation form and description editor.

use crate::theme::BoardTheme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use plank_core::{ColumnId, CreateIssueRequest, TaskId, UserId};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use tui_textarea::TextArea;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Title,
    IssueType,
    CreateBranch,
    Description,
}

impl FormFocus {
    fn next(self) -> Self {
        match self {
            FormFocus::Title => FormFocus::IssueType,
            FormFocus::IssueType => FormFocus::CreateBranch,
            FormFocus::CreateBranch => FormFocus::Description,
            FormFocus::Description => FormFocus::Title,
        }
    }

    fn previous(self) -> Self {
        match self {
            FormFocus::Title => FormFocus::Description,
            FormFocus::IssueType => FormFocus::Title,
            FormFocus::CreateBranch => FormFocus::IssueType,
            FormFocus::Description => FormFocus::CreateBranch,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormOutcome {
    Pending,
    Submitted,
    Cancelled,
}

/// Modal form for creating an issue in a column.
pub struct TaskForm {
    pub column: ColumnId,
    pub title: String,
    pub issue_type: String,
    pub create_branch: bool,
    pub description: TextArea<'static>,
    pub focus: FormFocus,
}

impl TaskForm {
    pub fn new(column: ColumnId) -> Self {
        Self {
            column,
            title: String::new(),
            issue_type: String::new(),
            create_branch: true,
            description: TextArea::default(),
            focus: FormFocus::Title,
        }
    }

    /// Route one key press. Esc cancels, Ctrl-s submits (once a title
    /// exists), Tab/BackTab cycle focus; everything else edits the focused
    /// field.
    pub fn handle_key(&mut self, key: KeyEvent) -> FormOutcome {
        if key.code == KeyCode::Esc {
            return FormOutcome::Cancelled;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s') {
            if self.title.trim().is_empty() {
                return FormOutcome::Pending;
            }
            return FormOutcome::Submitted;
        }
        match key.code {
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return FormOutcome::Pending;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.previous();
                return FormOutcome::Pending;
            }
            _ => {}
        }

        match self.focus {
            FormFocus::Title => edit_line(&mut self.title, key),
            FormFocus::IssueType => edit_line(&mut self.issue_type, key),
            FormFocus::CreateBranch => {
                if matches!(key.code, KeyCode::Char(' ') | KeyCode::Enter) {
                    self.create_branch = !self.create_branch;
                }
            }
            FormFocus::Description => {
                self.description.input(key);
            }
        }
        FormOutcome::Pending
    }

    pub fn into_request(self, reporter: Option<UserId>) -> CreateIssueRequest {
        let description = self.description.lines().join("\n");
        let issue_type = self.issue_type.trim();
        CreateIssueRequest {
            title: self.title.trim().to_string(),
            description: if description.trim().is_empty() {
                None
            } else {
                Some(description)
            },
            status: self.column,
            issue_type: if issue_type.is_empty() {
                None
            } else {
                Some(issue_type.to_string())
            },
            assignee_id: None,
            reporter_id: reporter,
            start_date: None,
            due_date: None,
            tag: None,
            labels: Vec::new(),
            create_branch: self.create_branch,
        }
    }

    pub fn render(&self, f: &mut Frame<'_>, theme: &BoardTheme, area: Rect) {
        f.render_widget(Clear, area);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_focus))
            .title(format!("New issue in {}", self.column));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(inner);

        render_field(f, theme, rows[0], "Title", &self.title, self.focus == FormFocus::Title);
        render_field(
            f,
            theme,
            rows[1],
            "Type",
            &self.issue_type,
            self.focus == FormFocus::IssueType,
        );

        let checkbox = format!(
            "[{}] create branch from title",
            if self.create_branch { "x" } else { " " }
        );
        let checkbox_style = if self.focus == FormFocus::CreateBranch {
            Style::default().fg(theme.border_focus)
        } else {
            Style::default().fg(theme.text)
        };
        f.render_widget(Paragraph::new(checkbox).style(checkbox_style), rows[2]);

        let description_style = if self.focus == FormFocus::Description {
            Style::default().fg(theme.border_focus)
        } else {
            Style::default().fg(theme.border)
        };
        let mut description = self.description.clone();
        description.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(description_style)
                .title("Description"),
        );
        f.render_widget(&description, rows[3]);

        let hint = Line::from(Span::styled(
            "Tab next field  Ctrl-s submit  Esc cancel",
            Style::default().fg(theme.text_dim),
        ));
        f.render_widget(Paragraph::new(hint), rows[4]);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorOutcome {
    Pending,
    Saved(String),
    Cancelled,
}

/// Inline editor for a task's description. Edits are local only; the
/// tracker is never written on save.
pub struct DescriptionEditor {
    pub task: TaskId,
    pub textarea: TextArea<'static>,
}

impl DescriptionEditor {
    pub fn new(task: TaskId, current: Option<&str>) -> Self {
        let lines: Vec<String> = current
            .map(|text| text.lines().map(str::to_string).collect())
            .unwrap_or_default();
        Self {
            task,
            textarea: TextArea::new(lines),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> EditorOutcome {
        if key.code == KeyCode::Esc {
            return EditorOutcome::Cancelled;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s') {
            return EditorOutcome::Saved(self.textarea.lines().join("\n"));
        }
        self.textarea.input(key);
        EditorOutcome::Pending
    }

    pub fn render(&self, f: &mut Frame<'_>, theme: &BoardTheme, area: Rect) {
        f.render_widget(Clear, area);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(area);

        let mut textarea = self.textarea.clone();
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border_focus))
                .title(format!("Description for {}", self.task)),
        );
        f.render_widget(&textarea, rows[0]);

        let hint = Line::from(Span::styled(
            "Ctrl-s save  Esc cancel",
            Style::default().fg(theme.text_dim),
        ));
        f.render_widget(Paragraph::new(hint), rows[1]);
    }
}

fn edit_line(value: &mut String, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) => value.push(c),
        KeyCode::Backspace => {
            value.pop();
        }
        _ => {}
    }
}
