//! Drag preview: provisional reordering for live visual feedback.
//!
//! While a pointer drags a task around, every hover target produces a
//! [`PreviewMove`]. Applying one mutates the flat sequence just enough for
//! the board to show "where will this land" - it never talks to the network
//! and may be superseded by the next hover or discarded by a refetch.

use plank_core::{ColumnId, Task, TaskId};

/// What the pointer is currently over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    Task(TaskId),
    Column(ColumnId),
}

/// A single hover step of an active drag gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewMove {
    pub active: TaskId,
    pub over: DropTarget,
}

/// Single-slot buffer coalescing hover events.
///
/// Hovers arrive faster than frames are drawn; only the latest one within a
/// scheduling turn matters. Each `set` overwrites the slot and the event loop
/// drains it with `take` at most once per turn, immediately before drawing.
#[derive(Debug, Default)]
pub struct PreviewSlot {
    pending: Option<PreviewMove>,
}

impl PreviewSlot {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Replace whatever is pending with the newest hover.
    pub fn set(&mut self, mv: PreviewMove) {
        self.pending = Some(mv);
    }

    /// Drain the slot, returning the last hover seen since the previous take.
    pub fn take(&mut self) -> Option<PreviewMove> {
        self.pending.take()
    }

    /// Drop a stale pending hover without applying it.
    pub fn clear(&mut self) {
        self.pending = None;
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_none()
    }
}

/// Apply one provisional hover step to the flat sequence.
///
/// Hovering over a task adopts that task's column and moves the active task
/// to the hovered task's index; hovering over a column changes the column
/// only, leaving the position to be fixed at commit time. Self-hovers and
/// unknown ids are no-ops.
pub fn apply_preview(tasks: &mut Vec<Task>, mv: &PreviewMove) {
    let Some(active_index) = tasks.iter().position(|t| t.id == mv.active) else {
        return;
    };

    match &mv.over {
        DropTarget::Task(over_id) => {
            if *over_id == mv.active {
                return;
            }
            let Some(over_index) = tasks.iter().position(|t| t.id == *over_id) else {
                return;
            };
            tasks[active_index].status = tasks[over_index].status.clone();
            array_move(tasks, active_index, over_index);
        }
        DropTarget::Column(column_id) => {
            tasks[active_index].status = column_id.clone();
        }
    }
}

/// Move the element at `from` so it lands at `to`, shifting the intervening
/// run by one and preserving every other relative order.
pub fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from == to || from >= items.len() {
        return;
    }
    let item = items.remove(from);
    let to = to.min(items.len());
    items.insert(to, item);
}
