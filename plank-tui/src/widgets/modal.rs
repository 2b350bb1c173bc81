//! Blocking message modal.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// A blocking acknowledgment box; the event loop swallows input until the
/// user dismisses it.
pub struct MessageModal<'a> {
    pub title: &'a str,
    pub message: &'a str,
    pub text_style: Style,
    pub border_style: Style,
    pub hint_style: Style,
}

impl<'a> MessageModal<'a> {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        f.render_widget(Clear, area);
        let mut lines: Vec<Line> = self
            .message
            .lines()
            .map(|line| Line::from(Span::styled(line.to_string(), self.text_style)))
            .collect();
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled("Press Enter to dismiss", self.hint_style)));

        let widget = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.border_style)
                    .title(self.title.to_string()),
            )
            .wrap(Wrap { trim: true });
        f.render_widget(widget, area);
    }
}
