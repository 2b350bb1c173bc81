//! Kanban board view: column layout, cards, and drag hit-testing.
//!
//! Layout is computed by a pure function so that rendering and mouse
//! handling always agree on where columns and cards are.

use crate::state::App;
use crate::theme::column_accent;
use plank_board::{BoardStore, DropTarget};
use plank_core::TaskId;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Height of one task card, borders included.
pub const CARD_HEIGHT: u16 = 4;

/// Rows reserved at the top of a column (border plus count line).
const COLUMN_HEADER_HEIGHT: u16 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLayout {
    pub task: TaskId,
    pub area: Rect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    pub column: plank_core::ColumnId,
    pub area: Rect,
    pub cards: Vec<CardLayout>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardLayout {
    pub columns: Vec<ColumnLayout>,
}

impl BoardLayout {
    /// Resolve a terminal cell to a drop target: the card under the pointer
    /// if any, otherwise the column under it.
    pub fn hit(&self, x: u16, y: u16) -> Option<DropTarget> {
        for column in &self.columns {
            for card in &column.cards {
                if contains(card.area, x, y) {
                    return Some(DropTarget::Task(card.task.clone()));
                }
            }
        }
        self.columns
            .iter()
            .find(|column| contains(column.area, x, y))
            .map(|column| DropTarget::Column(column.column.clone()))
    }
}

/// Column and card rectangles for the current store contents.
///
/// Cards that do not fit the column height are simply not laid out; they
/// become visible again as the sequence changes or the terminal grows.
pub fn compute_layout(area: Rect, store: &BoardStore) -> BoardLayout {
    let count = store.columns().len().max(1) as u32;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, count); count as usize])
        .split(area);

    let mut columns = Vec::new();
    for (column, chunk) in store.columns().iter().zip(chunks.iter()) {
        let inner_x = chunk.x.saturating_add(1);
        let inner_width = chunk.width.saturating_sub(2);
        let bottom = chunk.bottom().saturating_sub(1);
        let mut y = chunk.y.saturating_add(COLUMN_HEADER_HEIGHT);

        let mut cards = Vec::new();
        for task in store.tasks_in(&column.id) {
            if y.saturating_add(CARD_HEIGHT) > bottom || inner_width == 0 {
                break;
            }
            cards.push(CardLayout {
                task: task.id.clone(),
                area: Rect::new(inner_x, y, inner_width, CARD_HEIGHT),
            });
            y += CARD_HEIGHT;
        }

        columns.push(ColumnLayout {
            column: column.id.clone(),
            area: *chunk,
            cards,
        });
    }
    BoardLayout { columns }
}

fn contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.x.saturating_add(area.width) && y >= area.y && y < area.bottom()
}

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let layout = compute_layout(area, &app.store);
    let theme = &app.theme;
    let drag = app.board_view.drag.as_ref();
    let hover_target = drag.and_then(|d| d.last_target.clone());

    for (column, column_layout) in app.store.columns().iter().zip(layout.columns.iter()) {
        let total = app.store.tasks_in(&column.id).count();
        let is_hover_column =
            matches!(&hover_target, Some(DropTarget::Column(id)) if *id == column.id);
        let is_focused = app.board_view.column_index
            == app
                .store
                .columns()
                .iter()
                .position(|c| c.id == column.id)
                .unwrap_or(usize::MAX);

        let border_style = if is_hover_column {
            Style::default().fg(theme.drag)
        } else if is_focused {
            Style::default().fg(theme.border_focus)
        } else {
            Style::default().fg(theme.border)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(
                format!("{} ({})", column.title, total),
                Style::default().fg(column_accent(&column.id, theme)),
            ));
        f.render_widget(block, column_layout.area);

        for card in &column_layout.cards {
            let Some(task) = app.store.task(&card.task) else {
                continue;
            };
            let is_dragged = drag.map(|d| d.active == task.id).unwrap_or(false);
            let is_hovered =
                matches!(&hover_target, Some(DropTarget::Task(id)) if *id == task.id);
            let is_selected = app.board_view.selected.as_ref() == Some(&task.id);

            let card_border = if is_dragged {
                Style::default().fg(theme.drag)
            } else if is_hovered {
                Style::default().fg(theme.secondary)
            } else if is_selected {
                Style::default().fg(theme.border_focus)
            } else {
                Style::default().fg(theme.border)
            };
            let title_style = if is_dragged {
                Style::default().fg(theme.drag).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            };

            let meta = format!(
                "{} | {}",
                task.issue_type.as_deref().unwrap_or("-"),
                task.assignee_id
                    .as_ref()
                    .map(|id| id.as_str())
                    .unwrap_or("-"),
            );
            let body = vec![
                Line::from(Span::styled(task.title.clone(), title_style)),
                Line::from(Span::styled(meta, Style::default().fg(theme.text_dim))),
            ];
            let widget = Paragraph::new(body)
                .block(Block::default().borders(Borders::ALL).border_style(card_border));
            f.render_widget(widget, card.area);
        }

        let hidden = total.saturating_sub(column_layout.cards.len());
        if hidden > 0 {
            let note_y = column_layout.area.bottom().saturating_sub(1);
            let note = Rect::new(
                column_layout.area.x.saturating_add(1),
                note_y.saturating_sub(1),
                column_layout.area.width.saturating_sub(2),
                1,
            );
            f.render_widget(
                Paragraph::new(Span::styled(
                    format!("+{hidden} more"),
                    Style::default().fg(theme.text_dim),
                )),
                note,
            );
        }
    }
}
