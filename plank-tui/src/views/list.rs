//! Flat read-only issue list view.

use crate::state::App;
use crate::theme::column_accent;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let theme = &app.theme;
    let tasks = app.store.tasks();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title(format!("Issues ({})", tasks.len()));

    if tasks.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No issues registered.",
            Style::default().fg(theme.text_dim),
        ))
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = tasks
        .iter()
        .map(|task| {
            let header = Line::from(vec![
                Span::styled(task.title.clone(), Style::default().fg(theme.text)),
                Span::raw("  "),
                Span::styled(
                    task.status.to_string(),
                    Style::default().fg(column_accent(&task.status, theme)),
                ),
            ]);
            let description = Line::from(Span::styled(
                task.description
                    .clone()
                    .unwrap_or_else(|| "No description provided".to_string()),
                Style::default().fg(theme.text_dim),
            ));
            let people = Line::from(Span::styled(
                format!(
                    "assignee: {} | reporter: {} | start: {} | due: {}",
                    or_dash(task.assignee_id.as_ref().map(|id| id.as_str())),
                    or_dash(task.reporter_id.as_ref().map(|id| id.as_str())),
                    or_dash(task.start_date.as_deref()),
                    or_dash(task.due_date.as_deref()),
                ),
                Style::default().fg(theme.text_dim),
            ));
            ListItem::new(vec![header, description, people, Line::raw("")])
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .fg(theme.border_focus)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.list_view.selected.min(tasks.len() - 1)));
    f.render_stateful_widget(list, area, &mut state);
}

fn or_dash(value: Option<&str>) -> &str {
    match value {
        Some(text) if !text.is_empty() => text,
        _ => "-",
    }
}
