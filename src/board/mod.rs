//! Board domain: data model, filter/sort pipeline and reposition engine.
//!
//! This module provides:
//! - Boards holding ordered columns, columns holding ordered tasks
//! - Pure reposition functions for moving tasks and columns
//! - A filter/sort pipeline computing what a column should show
//! - Column and task edits (create, rename, replace, delete)
//! - Gesture-end resolution from drop zones to move commands
//!
//! All functions take an immutable snapshot and return a new value. The
//! [`BoardRepository`](crate::repository::BoardRepository) commits those
//! values and persists them.
//!
//! # Example
//!
//! ```
//! use taskboard::board::{move_task, Board, Column, DropTarget, Task, TaskFields, TaskMove};
//!
//! let mut todo = Column::new("todo", "To Do");
//! todo.tasks.push(Task::from_fields("t1", TaskFields::titled("Write docs")));
//! let board = Board { id: "b".into(), title: "Sprint".into(), columns: vec![todo, Column::new("done", "Done")] };
//!
//! let moved = move_task(&board, &TaskMove::new("t1", "todo", "done", DropTarget::End)).unwrap();
//! assert!(moved.column("todo").unwrap().tasks.is_empty());
//! assert_eq!(moved.column("done").unwrap().tasks[0].id, "t1");
//! ```

pub mod edit;
pub mod filter;
pub mod gesture;
pub mod id;
pub mod models;
pub mod reposition;

pub use filter::{
    column_views, compare_titles, visible_tasks, CaseSensitivity, ColumnView, InvalidCriteria,
    InvalidSortKey, SearchCriteria, SortKey,
};
pub use gesture::{resolve_column_drop, resolve_task_drop, DragEnd, DragItem, DropZone};
pub use models::{Board, Column, InvalidPriority, Priority, Task, TaskFields};
pub use reposition::{array_move, move_column, move_task, ColumnMove, DropTarget, TaskMove};
