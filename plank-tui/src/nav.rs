//! Navigation and view switching utilities.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Board,
    IssueList,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            View::Board => "Board",
            View::IssueList => "Issues",
        }
    }

    pub fn all() -> &'static [View] {
        &[View::Board, View::IssueList]
    }

    pub fn index(&self) -> usize {
        Self::all().iter().position(|v| v == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<View> {
        Self::all().get(index).copied()
    }

    pub fn next(&self) -> View {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    pub fn previous(&self) -> View {
        let all = Self::all();
        let index = self.index();
        all[if index == 0 { all.len() - 1 } else { index - 1 }]
    }
}
