//! Workflow columns.

use crate::identity::ColumnId;
use serde::{Deserialize, Serialize};

/// A fixed workflow stage that partitions tasks on the board.
///
/// Columns mirror a finite workflow-state enum on the server; they are a
/// client-side taxonomy established at startup and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
}

impl Column {
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }

    /// The fixed workflow taxonomy, in board order.
    pub fn workflow() -> Vec<Column> {
        vec![
            Column::new("BACKLOG", "Backlog"),
            Column::new("TODO", "To Do"),
            Column::new("IN_PROGRESS", "In Progress"),
            Column::new("IN_REVIEW", "In Review"),
            Column::new("DONE", "Done"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workflow_has_five_fixed_columns() {
        let columns = Column::workflow();
        let ids: Vec<&str> = columns.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["BACKLOG", "TODO", "IN_PROGRESS", "IN_REVIEW", "DONE"]);
    }

    #[test]
    fn workflow_titles_are_display_names() {
        let columns = Column::workflow();
        assert_eq!(columns[0].title, "Backlog");
        assert_eq!(columns[2].title, "In Progress");
    }
}
