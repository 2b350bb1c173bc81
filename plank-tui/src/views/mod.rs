//! View rendering dispatch.

pub mod board;
pub mod helpers;
pub mod list;

pub use helpers::centered_rect;

use crate::nav::View;
use crate::notifications::NotificationLevel;
use crate::state::App;
use crate::widgets::MessageModal;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// The region occupied by the active view, given the whole frame.
///
/// Mouse hit-testing recomputes this between frames, so it must stay in
/// lockstep with [`render_view`].
pub fn body_area(frame_area: Rect) -> Rect {
    frame_chunks(frame_area)[1]
}

fn frame_chunks(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

pub fn render_view(f: &mut Frame<'_>, app: &App) {
    let [header, body, footer] = frame_chunks(f.size());

    render_header(f, app, header);

    match app.active_view {
        View::Board => board::render(f, app, body),
        View::IssueList => list::render(f, app, body),
    }

    render_footer(f, app, footer);

    if let Some(form) = &app.form {
        form.render(f, &app.theme, centered_rect(70, 80, f.size()));
    }
    if let Some(editor) = &app.editor {
        editor.render(f, &app.theme, centered_rect(60, 60, f.size()));
    }
    if let Some(modal) = &app.modal {
        MessageModal {
            title: &modal.title,
            message: &modal.message,
            text_style: Style::default().fg(app.theme.text),
            border_style: Style::default().fg(app.theme.border_focus),
            hint_style: Style::default().fg(app.theme.text_dim),
        }
        .render(f, centered_rect(50, 40, f.size()));
    }
}

fn render_header(f: &mut Frame<'_>, app: &App, area: Rect) {
    let user = app
        .current_user
        .as_ref()
        .map(|u| u.username.as_str())
        .unwrap_or("-");

    let mut spans = vec![
        Span::styled(
            format!("Plank | {} ", app.project.title),
            Style::default().fg(app.theme.primary),
        ),
        Span::styled(format!("| {} | ", user), Style::default().fg(app.theme.text_dim)),
    ];
    for (index, view) in View::all().iter().enumerate() {
        let style = if *view == app.active_view {
            Style::default()
                .fg(app.theme.border_focus)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text_dim)
        };
        spans.push(Span::styled(
            format!(" {}:{} ", index + 1, view.title()),
            style,
        ));
    }

    let block = Block::default().borders(Borders::ALL);
    let widget = Paragraph::new(Line::from(spans)).block(block);
    f.render_widget(widget, area);
}

fn render_footer(f: &mut Frame<'_>, app: &App, area: Rect) {
    let (text, style) = if let Some(search) = &app.search {
        (
            format!("Search: {}_  (Enter keep, Esc clear)", search.query),
            Style::default().fg(app.theme.primary),
        )
    } else if let Some(note) = app.notifications.last() {
        let (label, color) = match note.level {
            NotificationLevel::Info => ("INFO", app.theme.info),
            NotificationLevel::Warning => ("WARN", app.theme.warning),
            NotificationLevel::Error => ("ERROR", app.theme.error),
            NotificationLevel::Success => ("OK", app.theme.success),
        };
        (
            format!("{}: {}", label, note.message),
            Style::default().fg(color),
        )
    } else {
        (
            "h/j/k/l move | drag cards with the mouse | n new | e edit | d delete | / search | r refresh | q quit"
                .to_string(),
            Style::default().fg(app.theme.text_dim),
        )
    };

    let footer = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .style(style);
    f.render_widget(footer, area);
}
