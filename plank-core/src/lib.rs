//! Plank Core - Entity Types
//!
//! Pure data structures with no behavior. All other crates depend on this.
//! This crate contains ONLY data types - no business logic.

pub mod column;
pub mod identity;
pub mod task;
pub mod wire;

pub use column::Column;
pub use identity::{ColumnId, ProjectId, TaskId, Timestamp, UserId};
pub use task::Task;
pub use wire::{
    CreateIssueRequest, CreateIssueResponse, ProjectResponse, UpdateOrderRequest, UserResponse,
};
