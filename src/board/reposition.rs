//! Reposition engine: moving tasks within and across columns, and
//! reordering columns within a board.
//!
//! Every command runs in three phases against an immutable snapshot:
//!
//! 1. **Resolve** the ids in the command to positions in the snapshot.
//! 2. **Plan** the destination index, applying the no-op guard.
//! 3. **Apply** the plan to a copy of the snapshot.
//!
//! A command that references an id missing from the snapshot, or whose
//! destination equals the current position, yields `None`. The caller then
//! keeps its current snapshot and skips persistence entirely.

use crate::board::models::Board;
use tracing::debug;

/// Where a dragged item should land inside its destination sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    /// Take the slot of the element currently at this index.
    ///
    /// Across columns this inserts before the hovered element. Within one
    /// column the moved item ends up at exactly this index. Indexes past
    /// the end behave like [`DropTarget::End`].
    Index(usize),
    /// Append after the last element (empty-column placeholder drops).
    End,
}

/// Move one task to a position in the same or another column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskMove {
    /// The task being moved.
    pub task_id: String,
    /// The column currently holding the task.
    pub source_column_id: String,
    /// The column receiving the task.
    pub target_column_id: String,
    /// Destination inside the target column.
    pub target: DropTarget,
}

impl TaskMove {
    /// Create a task move command.
    #[must_use]
    pub fn new(
        task_id: impl Into<String>,
        source_column_id: impl Into<String>,
        target_column_id: impl Into<String>,
        target: DropTarget,
    ) -> Self {
        Self {
            task_id: task_id.into(),
            source_column_id: source_column_id.into(),
            target_column_id: target_column_id.into(),
            target,
        }
    }

    /// Reorder a task inside the column that holds it.
    #[must_use]
    pub fn within(
        task_id: impl Into<String>,
        column_id: impl Into<String>,
        target: DropTarget,
    ) -> Self {
        let column_id = column_id.into();
        Self::new(task_id, column_id.clone(), column_id, target)
    }
}

/// Move one column to another position on its board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMove {
    /// The column being moved.
    pub column_id: String,
    /// Destination among the board's columns.
    pub target: DropTarget,
}

impl ColumnMove {
    /// Create a column move command.
    #[must_use]
    pub fn new(column_id: impl Into<String>, target: DropTarget) -> Self {
        Self { column_id: column_id.into(), target }
    }
}

/// Relocate one element: remove it at `from`, insert it at `to`.
///
/// Both indexes refer to positions in `items`; the moved element ends up at
/// index `to` of the result.
///
/// # Panics
///
/// Panics if `from` or `to` is out of bounds.
#[must_use]
pub fn array_move<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut moved = items.to_vec();
    let item = moved.remove(from);
    moved.insert(to, item);
    moved
}

/// Positions of a task move, resolved against a snapshot.
#[derive(Debug, Clone, Copy)]
struct ResolvedTaskMove {
    source: usize,
    from: usize,
    target: usize,
}

/// A planned task mutation. Built only when the move changes something.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TaskPlacement {
    Within { column: usize, from: usize, to: usize },
    Across { source: usize, from: usize, target: usize, at: usize },
}

fn resolve_task_move(board: &Board, command: &TaskMove) -> Option<ResolvedTaskMove> {
    let Some(source) = board.column_index(&command.source_column_id) else {
        debug!(column_id = %command.source_column_id, "source column not found, ignoring move");
        return None;
    };
    let Some(from) = board.columns[source].task_index(&command.task_id) else {
        debug!(task_id = %command.task_id, "task not in source column, ignoring move");
        return None;
    };
    let Some(target) = board.column_index(&command.target_column_id) else {
        debug!(column_id = %command.target_column_id, "target column not found, ignoring move");
        return None;
    };
    Some(ResolvedTaskMove { source, from, target })
}

fn plan_task_move(board: &Board, resolved: ResolvedTaskMove, drop: DropTarget) -> Option<TaskPlacement> {
    let ResolvedTaskMove { source, from, target } = resolved;

    if source == target {
        let to = within_index(board.columns[source].tasks.len(), drop);
        if to == from {
            debug!(from, "task dropped on its own position, ignoring move");
            return None;
        }
        return Some(TaskPlacement::Within { column: source, from, to });
    }

    let task_id = &board.columns[source].tasks[from].id;
    if board.columns[target].task(task_id).is_some() {
        debug!(task_id = %task_id, "target column already holds this task id, ignoring move");
        return None;
    }

    let at = insert_index(board.columns[target].tasks.len(), drop);
    Some(TaskPlacement::Across { source, from, target, at })
}

fn apply_task_placement(board: &Board, placement: TaskPlacement) -> Board {
    let mut next = board.clone();
    match placement {
        TaskPlacement::Within { column, from, to } => {
            next.columns[column].tasks = array_move(&board.columns[column].tasks, from, to);
        }
        TaskPlacement::Across { source, from, target, at } => {
            let task = next.columns[source].tasks.remove(from);
            next.columns[target].tasks.insert(at, task);
        }
    }
    next
}

/// Destination index when relocating inside a sequence of `len` elements.
fn within_index(len: usize, drop: DropTarget) -> usize {
    let last = len.saturating_sub(1);
    match drop {
        DropTarget::Index(index) => index.min(last),
        DropTarget::End => last,
    }
}

/// Insertion index when adding to a sequence of `len` elements.
fn insert_index(len: usize, drop: DropTarget) -> usize {
    match drop {
        DropTarget::Index(index) => index.min(len),
        DropTarget::End => len,
    }
}

/// Apply a task move to a board snapshot.
///
/// Returns the new board, or `None` when the command is a no-op: an id is
/// missing from the snapshot, the task would land where it already is, or
/// the target column already holds a task with the same id.
#[must_use]
pub fn move_task(board: &Board, command: &TaskMove) -> Option<Board> {
    let resolved = resolve_task_move(board, command)?;
    let placement = plan_task_move(board, resolved, command.target)?;
    Some(apply_task_placement(board, placement))
}

/// Apply a column move to a board snapshot.
///
/// Returns the new board, or `None` when the column is unknown or already
/// in place.
#[must_use]
pub fn move_column(board: &Board, command: &ColumnMove) -> Option<Board> {
    let Some(from) = board.column_index(&command.column_id) else {
        debug!(column_id = %command.column_id, "column not found, ignoring move");
        return None;
    };
    let to = within_index(board.columns.len(), command.target);
    if to == from {
        debug!(from, "column dropped on its own position, ignoring move");
        return None;
    }

    let mut next = board.clone();
    next.columns = array_move(&board.columns, from, to);
    Some(next)
}
