//! Plank Board - reorder/reconciliation engine
//!
//! The ordered task collection behind the kanban board: a flat sequence of
//! tasks partitioned into fixed columns by their `status` field. Intra-column
//! display order is the relative order within the flat sequence, so every
//! move is a stable permutation of that sequence.
//!
//! Three mutation sources exist and all of them funnel through
//! [`BoardStore::apply`]: server refetch (wholesale replacement), drag
//! preview (provisional, visual only), and drop commit (authoritative, paired
//! with a column-scoped order payload for the server). Nothing in this crate
//! performs I/O.

pub mod commit;
pub mod preview;
pub mod search;
pub mod store;

pub use commit::DropEvent;
pub use preview::{DropTarget, PreviewMove, PreviewSlot};
pub use store::{BoardStore, Mutation, SyncAction};
