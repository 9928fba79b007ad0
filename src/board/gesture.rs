//! Translating a finished drag gesture into a reposition command.
//!
//! Only gesture-end reaches the engine. Which item is lifted and which
//! column is hovered while the pointer moves is presentation state and
//! never touches the model.

use crate::board::models::Board;
use crate::board::reposition::{ColumnMove, DropTarget, TaskMove};

/// The item picked up when the gesture started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragItem {
    /// ID of the dragged task or column.
    pub id: String,
    /// Column holding the dragged task; `None` for column drags.
    pub column_id: Option<String>,
}

impl DragItem {
    /// A dragged task and the column it was lifted from.
    #[must_use]
    pub fn task(id: impl Into<String>, column_id: impl Into<String>) -> Self {
        Self { id: id.into(), column_id: Some(column_id.into()) }
    }

    /// A dragged column.
    #[must_use]
    pub fn column(id: impl Into<String>) -> Self {
        Self { id: id.into(), column_id: None }
    }
}

/// The drop zone under the pointer when the gesture ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropZone {
    /// ID of the hovered task, or of the column for placeholders and column headers.
    pub id: String,
    /// Column the zone belongs to, when known.
    pub column_id: Option<String>,
}

impl DropZone {
    /// A task card inside a column.
    #[must_use]
    pub fn task(id: impl Into<String>, column_id: impl Into<String>) -> Self {
        Self { id: id.into(), column_id: Some(column_id.into()) }
    }

    /// A column itself: its empty-state placeholder or its header.
    #[must_use]
    pub fn column(column_id: impl Into<String>) -> Self {
        let column_id = column_id.into();
        Self { id: column_id.clone(), column_id: Some(column_id) }
    }

    fn column_id(&self) -> &str {
        self.column_id.as_deref().unwrap_or(&self.id)
    }
}

/// A finished drag gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragEnd {
    /// What was dragged.
    pub active: DragItem,
    /// Where it was released; `None` when released outside every drop zone.
    pub over: Option<DropZone>,
}

impl DragEnd {
    /// Create a gesture-end event.
    #[must_use]
    pub const fn new(active: DragItem, over: Option<DropZone>) -> Self {
        Self { active, over }
    }

    /// A gesture released outside any drop zone.
    #[must_use]
    pub const fn cancelled(active: DragItem) -> Self {
        Self { active, over: None }
    }

    fn drop_zone(&self) -> Option<&DropZone> {
        self.over.as_ref().filter(|over| !self.is_over_itself(over))
    }

    /// A same-id zone in another column is a different card, not the dragged one.
    fn is_over_itself(&self, over: &DropZone) -> bool {
        over.id == self.active.id
            && self.active.column_id.as_deref().map_or(true, |column| over.column_id() == column)
    }
}

/// Turn a task drag into a move command.
///
/// Returns `None` for cancelled gestures and for drops onto the dragged
/// task itself. A hovered id that is not a task of the target column
/// (a placeholder or a stale card) resolves to the end of that column.
#[must_use]
pub fn resolve_task_drop(board: &Board, gesture: &DragEnd) -> Option<TaskMove> {
    let over = gesture.drop_zone()?;
    let source_column_id = match &gesture.active.column_id {
        Some(id) => id.clone(),
        None => board.column_of_task(&gesture.active.id)?.id.clone(),
    };
    let target_column_id = over.column_id();

    let target = board
        .column(target_column_id)
        .and_then(|column| column.task_index(&over.id))
        .map_or(DropTarget::End, DropTarget::Index);

    Some(TaskMove::new(gesture.active.id.clone(), source_column_id, target_column_id, target))
}

/// Turn a column drag into a move command.
///
/// The hovered zone may be another column or anything inside one; an
/// unknown zone resolves to `None`.
#[must_use]
pub fn resolve_column_drop(board: &Board, gesture: &DragEnd) -> Option<ColumnMove> {
    let over = gesture.drop_zone()?;
    let index = board.column_index(&over.id).or_else(|| board.column_index(over.column_id()))?;
    Some(ColumnMove::new(gesture.active.id.clone(), DropTarget::Index(index)))
}
