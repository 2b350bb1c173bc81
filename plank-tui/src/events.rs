//! Event types for the TUI event loop.

use crossterm::event::{KeyEvent, MouseEvent};
use plank_core::{CreateIssueResponse, ProjectResponse, Task, UserResponse};

#[derive(Debug, Clone)]
pub enum TuiEvent {
    Input(KeyEvent),
    Mouse(MouseEvent),
    Tick,
    Resize { width: u16, height: u16 },
    /// Full refetch completed; replaces the local sequence wholesale.
    IssuesLoaded(Vec<Task>),
    ProjectLoaded(ProjectResponse),
    UserLoaded(UserResponse),
    /// Create succeeded; carries the branch-creation side info.
    IssueCreated(CreateIssueResponse),
    /// User-initiated create failed; surfaced as a blocking modal.
    CreateFailed(String),
    /// User-initiated delete failed; surfaced as a blocking modal.
    DeleteFailed(String),
}
