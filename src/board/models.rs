//! Board, column and task model types.
//!
//! Field names serialize in camelCase (`createdBy`, `dueDate`) so state
//! written by earlier versions of the board loads unchanged.

use serde::{Deserialize, Serialize};

/// Task priority levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Low priority (default for new tasks).
    #[default]
    Low,
    /// Medium priority.
    Medium,
    /// High priority.
    High,
}

impl Priority {
    /// All priorities, in the order the filter bar offers them.
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Get the string representation of the priority.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Priority {
    type Err = InvalidPriority;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(InvalidPriority(s.to_string())),
        }
    }
}

/// Error when an invalid priority string is provided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidPriority(pub String);

impl std::fmt::Display for InvalidPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid priority: '{}' (must be one of: low, medium, high)", self.0)
    }
}

impl std::error::Error for InvalidPriority {}

/// A task on a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier within the owning column.
    pub id: String,
    /// Short title; never empty after trimming.
    pub title: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Name of whoever created the task.
    #[serde(default)]
    pub created_by: String,
    /// Priority level.
    #[serde(default)]
    pub priority: Priority,
    /// Due date as ISO calendar date text (`YYYY-MM-DD`).
    #[serde(default)]
    pub due_date: String,
}

impl Task {
    /// Build a task from submitted form fields and an ID.
    #[must_use]
    pub fn from_fields(id: impl Into<String>, fields: TaskFields) -> Self {
        Self {
            id: id.into(),
            title: fields.title,
            description: fields.description,
            created_by: fields.created_by,
            priority: fields.priority,
            due_date: fields.due_date,
        }
    }

    /// The editable fields of this task.
    #[must_use]
    pub fn fields(&self) -> TaskFields {
        TaskFields {
            title: self.title.clone(),
            description: self.description.clone(),
            created_by: self.created_by.clone(),
            priority: self.priority,
            due_date: self.due_date.clone(),
        }
    }
}

/// The user-editable fields of a task, as submitted by the task form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskFields {
    /// Task title (required).
    pub title: String,
    /// Task description.
    #[serde(default)]
    pub description: String,
    /// Creator name.
    #[serde(default)]
    pub created_by: String,
    /// Priority level.
    #[serde(default)]
    pub priority: Priority,
    /// Due date as ISO calendar date text.
    #[serde(default)]
    pub due_date: String,
}

impl TaskFields {
    /// Create fields with just a title; everything else takes its default.
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self { title: title.into(), ..Self::default() }
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the creator name.
    #[must_use]
    pub fn with_created_by(mut self, created_by: impl Into<String>) -> Self {
        self.created_by = created_by.into();
        self
    }

    /// Set the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the due date.
    #[must_use]
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = due_date.into();
        self
    }

    /// Whether all required fields are present. Only the title is required.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.title.trim().is_empty()
    }
}

/// A named, ordered lane of tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Unique identifier within the owning board.
    pub id: String,
    /// Column title; never empty after trimming.
    pub title: String,
    /// Tasks in board order.
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Column {
    /// Create an empty column.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self { id: id.into(), title: title.into(), tasks: Vec::new() }
    }

    /// Find a task by ID.
    #[must_use]
    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Position of a task by ID.
    #[must_use]
    pub fn task_index(&self, id: &str) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }
}

/// The top-level container a user opens to work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Unique identifier within the repository.
    pub id: String,
    /// Board title; never empty after trimming.
    pub title: String,
    /// Columns in board order.
    #[serde(default)]
    pub columns: Vec<Column>,
}

impl Board {
    /// Create a board with no columns.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self { id: id.into(), title: title.into(), columns: Vec::new() }
    }

    /// Find a column by ID.
    #[must_use]
    pub fn column(&self, id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == id)
    }

    /// Position of a column by ID.
    #[must_use]
    pub fn column_index(&self, id: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.id == id)
    }

    /// Total number of tasks across all columns.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|c| c.tasks.len()).sum()
    }

    /// Find the column currently holding a task.
    #[must_use]
    pub fn column_of_task(&self, task_id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.task_index(task_id).is_some())
    }
}
