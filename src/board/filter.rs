//! Read-side filter and sort pipeline.
//!
//! Everything here is a pure function over borrowed tasks: inputs are never
//! mutated and every call returns a fresh sequence.

use crate::board::models::{Board, InvalidPriority, Priority, Task};
use chrono::NaiveDate;
use std::cmp::{Ordering, Reverse};

/// Date format of `Task::due_date`.
const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// How search text is compared against task text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseSensitivity {
    /// Match the stored casing of both operands exactly.
    #[default]
    Sensitive,
    /// Lower-case both operands before matching.
    Insensitive,
}

/// Sort order applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Title, A to Z.
    TitleAsc,
    /// Title, Z to A.
    TitleDesc,
    /// Due date, earliest first.
    DueDateAsc,
    /// Due date, latest first.
    DueDateDesc,
}

impl SortKey {
    /// Get the form-value name of the sort key.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TitleAsc => "title-asc",
            Self::TitleDesc => "title-desc",
            Self::DueDateAsc => "dueDate-asc",
            Self::DueDateDesc => "dueDate-desc",
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SortKey {
    type Err = InvalidSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "title-asc" => Ok(Self::TitleAsc),
            "title-desc" => Ok(Self::TitleDesc),
            "duedate-asc" | "due-date-asc" => Ok(Self::DueDateAsc),
            "duedate-desc" | "due-date-desc" => Ok(Self::DueDateDesc),
            _ => Err(InvalidSortKey(s.to_string())),
        }
    }
}

/// Error when an unknown sort key is provided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidSortKey(pub String);

impl std::fmt::Display for InvalidSortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid sort key: '{}' (must be one of: title-asc, title-desc, dueDate-asc, dueDate-desc)",
            self.0
        )
    }
}

impl std::error::Error for InvalidSortKey {}

/// Error when raw filter-bar values cannot be turned into criteria.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidCriteria {
    /// The priority select held an unknown value.
    #[error(transparent)]
    Priority(#[from] InvalidPriority),
    /// The sort select held an unknown value.
    #[error(transparent)]
    SortKey(#[from] InvalidSortKey),
}

/// What the user asked to see.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    /// Substring to look for in title or description; empty matches everything.
    pub search_text: String,
    /// Only tasks with this priority, if set.
    pub priority: Option<Priority>,
    /// Only tasks due exactly on this date (string match), if set.
    pub due_date: Option<String>,
    /// Sort order, if set; otherwise column order is kept.
    pub sort_key: Option<SortKey>,
    /// Search case handling.
    pub case_sensitivity: CaseSensitivity,
}

impl SearchCriteria {
    /// Criteria that match every task and keep column order.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build criteria from raw filter-bar values, where an empty string means unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the priority or sort value is not recognised.
    pub fn from_form(
        search: &str,
        priority: &str,
        due_date: &str,
        sort: &str,
    ) -> Result<Self, InvalidCriteria> {
        let priority = non_empty(priority).map(str::parse::<Priority>).transpose()?;
        let sort_key = non_empty(sort).map(str::parse::<SortKey>).transpose()?;
        Ok(Self {
            search_text: search.to_string(),
            priority,
            due_date: non_empty(due_date).map(str::to_string),
            sort_key,
            case_sensitivity: CaseSensitivity::default(),
        })
    }

    /// Set the search text.
    #[must_use]
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    /// Set the priority filter.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Set the due-date filter.
    #[must_use]
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    /// Set the sort key.
    #[must_use]
    pub const fn with_sort(mut self, sort_key: SortKey) -> Self {
        self.sort_key = Some(sort_key);
        self
    }

    /// Set the search case handling.
    #[must_use]
    pub const fn with_case_sensitivity(mut self, case_sensitivity: CaseSensitivity) -> Self {
        self.case_sensitivity = case_sensitivity;
        self
    }

    /// Whether a task passes every filter in these criteria.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.matches_search(task)
            && self.priority.map_or(true, |p| task.priority == p)
            && self.due_date.as_deref().map_or(true, |d| task.due_date == d)
    }

    fn matches_search(&self, task: &Task) -> bool {
        if self.search_text.is_empty() {
            return true;
        }
        match self.case_sensitivity {
            CaseSensitivity::Sensitive => {
                task.title.contains(&self.search_text)
                    || task.description.contains(&self.search_text)
            }
            CaseSensitivity::Insensitive => {
                let needle = self.search_text.to_lowercase();
                task.title.to_lowercase().contains(&needle)
                    || task.description.to_lowercase().contains(&needle)
            }
        }
    }
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Compute the visible, ordered tasks of a column.
///
/// Filtering keeps column order. Sorting is stable, so tasks that compare
/// equal keep their relative input order.
#[must_use]
pub fn visible_tasks(tasks: &[Task], criteria: &SearchCriteria) -> Vec<Task> {
    let mut visible: Vec<Task> = tasks.iter().filter(|t| criteria.matches(t)).cloned().collect();

    match criteria.sort_key {
        None => {}
        Some(SortKey::TitleAsc) => visible.sort_by(|a, b| compare_titles(&a.title, &b.title)),
        Some(SortKey::TitleDesc) => visible.sort_by(|a, b| compare_titles(&b.title, &a.title)),
        // Undated tasks sort after dated ones in both directions
        Some(SortKey::DueDateAsc) => visible.sort_by_cached_key(|t| {
            let due = parse_due_date(&t.due_date);
            (due.is_none(), due)
        }),
        Some(SortKey::DueDateDesc) => visible.sort_by_cached_key(|t| {
            let due = parse_due_date(&t.due_date);
            (due.is_none(), due.map(Reverse))
        }),
    }

    visible
}

/// Locale-aware title comparison: case-folded first, raw text as tie-break.
#[must_use]
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}

/// Parse a due date; `None` if the text is not an ISO calendar date.
#[must_use]
pub fn parse_due_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DUE_DATE_FORMAT).ok()
}

/// One column as the Presentation Layer should render it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnView {
    /// Column ID.
    pub column_id: String,
    /// Column title.
    pub title: String,
    /// Tasks that pass the criteria, in display order.
    pub tasks: Vec<Task>,
    /// Number of tasks in the column before filtering.
    pub total_tasks: usize,
    /// Whether to render the empty-column drop placeholder.
    pub show_drop_placeholder: bool,
}

/// Compute the render model for every column of a board.
#[must_use]
pub fn column_views(board: &Board, criteria: &SearchCriteria) -> Vec<ColumnView> {
    board
        .columns
        .iter()
        .map(|column| ColumnView {
            column_id: column.id.clone(),
            title: column.title.clone(),
            tasks: visible_tasks(&column.tasks, criteria),
            total_tasks: column.tasks.len(),
            show_drop_placeholder: column.tasks.is_empty(),
        })
        .collect()
}
