//! Slate theme and color utilities.

use plank_core::ColumnId;
use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct BoardTheme {
    pub primary: Color,
    pub secondary: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub text: Color,
    pub text_dim: Color,
    pub border: Color,
    pub border_focus: Color,
    /// Accent for the card currently being dragged.
    pub drag: Color,
}

impl BoardTheme {
    pub fn slate() -> Self {
        Self {
            primary: Color::Rgb(96, 165, 250),
            secondary: Color::Rgb(192, 132, 252),
            success: Color::Rgb(74, 222, 128),
            warning: Color::Rgb(250, 204, 21),
            error: Color::Rgb(248, 113, 113),
            info: Color::Rgb(103, 232, 249),
            text: Color::Rgb(226, 232, 240),
            text_dim: Color::Rgb(148, 163, 184),
            border: Color::Rgb(71, 85, 105),
            border_focus: Color::Rgb(96, 165, 250),
            drag: Color::Rgb(250, 204, 21),
        }
    }
}

/// Accent color for a workflow column.
pub fn column_accent(column: &ColumnId, theme: &BoardTheme) -> Color {
    match column.as_str() {
        "BACKLOG" => theme.text_dim,
        "TODO" => theme.primary,
        "IN_PROGRESS" => theme.warning,
        "IN_REVIEW" => theme.secondary,
        "DONE" => theme.success,
        _ => theme.text_dim,
    }
}
