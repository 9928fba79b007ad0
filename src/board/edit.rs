//! Column and task edits as snapshot transformations.
//!
//! Each function returns the edited board (plus the created entity where
//! there is one), or `None` when the edit does not apply: a required title
//! is blank, an id is unknown, or nothing would change.

use crate::board::id::generate_unique_id;
use crate::board::models::{Board, Column, Task, TaskFields};

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Append a new empty column.
#[must_use]
pub fn add_column(board: &Board, title: &str) -> Option<(Board, Column)> {
    if is_blank(title) {
        return None;
    }
    let id = generate_unique_id(title, "column", |id| board.column(id).is_some());
    let column = Column::new(id, title);

    let mut next = board.clone();
    next.columns.push(column.clone());
    Some((next, column))
}

/// Change a column's title.
#[must_use]
pub fn rename_column(board: &Board, column_id: &str, title: &str) -> Option<Board> {
    if is_blank(title) {
        return None;
    }
    let index = board.column_index(column_id)?;
    if board.columns[index].title == title {
        return None;
    }

    let mut next = board.clone();
    next.columns[index].title = title.to_string();
    Some(next)
}

/// Remove a column together with all of its tasks.
#[must_use]
pub fn remove_column(board: &Board, column_id: &str) -> Option<Board> {
    let index = board.column_index(column_id)?;

    let mut next = board.clone();
    next.columns.remove(index);
    Some(next)
}

/// Append a new task to a column.
///
/// The new task's ID is not used by any task on the board.
#[must_use]
pub fn add_task(board: &Board, column_id: &str, fields: TaskFields) -> Option<(Board, Task)> {
    if !fields.is_valid() {
        return None;
    }
    let index = board.column_index(column_id)?;
    // Unique across the board, not just within this column
    let id = generate_unique_id(&fields.title, "task", |id| board.column_of_task(id).is_some());
    let task = Task::from_fields(id, fields);

    let mut next = board.clone();
    next.columns[index].tasks.push(task.clone());
    Some((next, task))
}

/// Replace a task in place, keeping its position.
#[must_use]
pub fn replace_task(board: &Board, column_id: &str, task: Task) -> Option<Board> {
    if is_blank(&task.title) {
        return None;
    }
    let column_index = board.column_index(column_id)?;
    let task_index = board.columns[column_index].task_index(&task.id)?;
    if board.columns[column_index].tasks[task_index] == task {
        return None;
    }

    let mut next = board.clone();
    next.columns[column_index].tasks[task_index] = task;
    Some(next)
}

/// Remove a task from a column.
#[must_use]
pub fn remove_task(board: &Board, column_id: &str, task_id: &str) -> Option<Board> {
    let column_index = board.column_index(column_id)?;
    let task_index = board.columns[column_index].task_index(task_id)?;

    let mut next = board.clone();
    next.columns[column_index].tasks.remove(task_index);
    Some(next)
}
