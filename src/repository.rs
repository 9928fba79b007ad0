//! The board repository: owner of all board state.
//!
//! The repository loads every board from a [`KeyValueStore`] when opened
//! and writes the whole collection back after each committed mutation.
//! Mutations are computed by the pure functions in [`crate::board`] and
//! committed as one snapshot, so subscribers never observe a half-applied
//! change.
//!
//! Commands that fail validation or reference unknown ids are no-ops: they
//! return `Ok(None)` / `Ok(false)`, write nothing and notify nobody.

use crate::board::edit;
use crate::board::gesture::{resolve_column_drop, resolve_task_drop, DragEnd};
use crate::board::id::generate_unique_id;
use crate::board::models::{Board, Column, Task, TaskFields};
use crate::board::reposition::{move_column, move_task, ColumnMove, TaskMove};
use crate::error::Result;
use crate::event_log::MutationLog;
use crate::traits::KeyValueStore;
use serde_json::json;
use tracing::{debug, info, warn};

/// The single key holding the serialized board collection.
pub const BOARDS_KEY: &str = "boards";

/// Callback invoked with the new state after every committed mutation.
pub type Listener = Box<dyn Fn(&[Board])>;

/// Handle returned by [`BoardRepository::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Read the persisted boards from a store.
///
/// Absent, unreadable or unparseable content yields an empty collection.
/// Ids are taken as stored; see [`BoardRepository::replace_all`] for how
/// duplicates behave.
#[must_use]
pub fn load_boards(store: &impl KeyValueStore) -> Vec<Board> {
    let raw = match store.get(BOARDS_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!(error = %e, "could not read persisted boards, starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(boards) => boards,
        Err(e) => {
            warn!(error = %e, "persisted boards are corrupt, starting empty");
            Vec::new()
        }
    }
}

/// Owns the board collection and persists it on every mutation.
pub struct BoardRepository<S: KeyValueStore> {
    store: S,
    boards: Vec<Board>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
    mutation_log: Option<MutationLog>,
}

impl<S: KeyValueStore + std::fmt::Debug> std::fmt::Debug for BoardRepository<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoardRepository")
            .field("store", &self.store)
            .field("boards", &self.boards)
            .field("listeners", &self.listeners.len())
            .field("mutation_log", &self.mutation_log)
            .finish()
    }
}

impl<S: KeyValueStore> BoardRepository<S> {
    /// Open a repository, loading whatever the store holds.
    pub fn open(store: S) -> Self {
        let boards = load_boards(&store);
        debug!(boards = boards.len(), "loaded boards");
        Self { store, boards, listeners: Vec::new(), next_subscription: 0, mutation_log: None }
    }

    /// Record every committed mutation in a JSONL log.
    #[must_use]
    pub fn with_mutation_log(mut self, log: MutationLog) -> Self {
        self.mutation_log = Some(log);
        self
    }

    /// Reload state from the store, discarding the in-memory collection.
    ///
    /// Subscribers are notified of the reloaded state.
    pub fn load(&mut self) -> &[Board] {
        self.boards = load_boards(&self.store);
        self.notify();
        &self.boards
    }

    /// The backing store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// All boards, in creation order.
    #[must_use]
    pub fn get_all(&self) -> &[Board] {
        &self.boards
    }

    /// Find a board by ID.
    #[must_use]
    pub fn get_board(&self, id: &str) -> Option<&Board> {
        self.boards.iter().find(|b| b.id == id)
    }

    /// Replace the whole collection.
    ///
    /// The new state is written to the store first; on success it becomes
    /// the current state and subscribers are notified.
    ///
    /// Ids are not checked for uniqueness. When two boards (or two columns
    /// of a board, or two tasks of a column) share an id, lookups and
    /// commands by that id act on the first one and leave the others as
    /// they are.
    ///
    /// # Errors
    ///
    /// Returns an error if the store write fails. The current state is then
    /// left unchanged.
    pub fn replace_all(&mut self, boards: Vec<Board>) -> Result<()> {
        let count = boards.len();
        self.commit(boards, "replace_all", None, &json!({ "boards": count }))
    }

    /// Create a board with no columns.
    ///
    /// Returns `None` without writing if the title is blank.
    ///
    /// # Errors
    ///
    /// Returns an error if the store write fails.
    pub fn create_board(&mut self, title: &str) -> Result<Option<Board>> {
        if title.trim().is_empty() {
            debug!("blank board title, ignoring create");
            return Ok(None);
        }

        let id = generate_unique_id(title, "board", |id| self.get_board(id).is_some());
        let board = Board::new(id, title);

        let mut boards = self.boards.clone();
        boards.push(board.clone());
        self.commit(boards, "create_board", Some(board.id.as_str()), &json!({ "title": title }))?;
        Ok(Some(board))
    }

    /// Append an empty column to a board.
    ///
    /// # Errors
    ///
    /// Returns an error if the store write fails.
    pub fn create_column(&mut self, board_id: &str, title: &str) -> Result<Option<Column>> {
        self.edit_board(board_id, "create_column", &json!({ "title": title }), |board| {
            edit::add_column(board, title)
        })
    }

    /// Rename a column.
    ///
    /// # Errors
    ///
    /// Returns an error if the store write fails.
    pub fn rename_column(&mut self, board_id: &str, column_id: &str, title: &str) -> Result<bool> {
        let details = json!({ "column_id": column_id, "title": title });
        self.edit_board_unit(board_id, "rename_column", &details, |board| {
            edit::rename_column(board, column_id, title)
        })
    }

    /// Delete a column and every task in it.
    ///
    /// # Errors
    ///
    /// Returns an error if the store write fails.
    pub fn delete_column(&mut self, board_id: &str, column_id: &str) -> Result<bool> {
        let details = json!({ "column_id": column_id });
        self.edit_board_unit(board_id, "delete_column", &details, |board| {
            edit::remove_column(board, column_id)
        })
    }

    /// Append a new task with a fresh ID to a column.
    ///
    /// # Errors
    ///
    /// Returns an error if the store write fails.
    pub fn create_task(
        &mut self,
        board_id: &str,
        column_id: &str,
        fields: TaskFields,
    ) -> Result<Option<Task>> {
        let details = json!({ "column_id": column_id, "title": fields.title });
        self.edit_board(board_id, "create_task", &details, |board| {
            edit::add_task(board, column_id, fields)
        })
    }

    /// Replace the task with the same ID, keeping its position.
    ///
    /// # Errors
    ///
    /// Returns an error if the store write fails.
    pub fn update_task(&mut self, board_id: &str, column_id: &str, task: Task) -> Result<bool> {
        let details = json!({ "column_id": column_id, "task_id": task.id });
        self.edit_board_unit(board_id, "update_task", &details, |board| {
            edit::replace_task(board, column_id, task)
        })
    }

    /// Delete a task.
    ///
    /// # Errors
    ///
    /// Returns an error if the store write fails.
    pub fn delete_task(&mut self, board_id: &str, column_id: &str, task_id: &str) -> Result<bool> {
        let details = json!({ "column_id": column_id, "task_id": task_id });
        self.edit_board_unit(board_id, "delete_task", &details, |board| {
            edit::remove_task(board, column_id, task_id)
        })
    }

    /// Submit the task form.
    ///
    /// With `existing_id` the task keeps that ID and is updated in place;
    /// without it a new task is created. Returns the saved task, or `None`
    /// if nothing was saved.
    ///
    /// # Errors
    ///
    /// Returns an error if the store write fails.
    pub fn save_task(
        &mut self,
        board_id: &str,
        column_id: &str,
        fields: TaskFields,
        existing_id: Option<&str>,
    ) -> Result<Option<Task>> {
        let Some(id) = existing_id else {
            return self.create_task(board_id, column_id, fields);
        };

        let task = Task::from_fields(id, fields);
        let saved = self.update_task(board_id, column_id, task.clone())?;
        Ok(saved.then_some(task))
    }

    /// Apply a task move.
    ///
    /// Returns `false` without writing when the move is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the store write fails.
    pub fn reposition(&mut self, board_id: &str, command: &TaskMove) -> Result<bool> {
        let details = json!({
            "task_id": command.task_id,
            "source_column_id": command.source_column_id,
            "target_column_id": command.target_column_id,
            "target": format!("{:?}", command.target),
        });
        self.edit_board_unit(board_id, "reposition", &details, |board| move_task(board, command))
    }

    /// Apply a column move.
    ///
    /// # Errors
    ///
    /// Returns an error if the store write fails.
    pub fn reorder_columns(&mut self, board_id: &str, command: &ColumnMove) -> Result<bool> {
        let details = json!({
            "column_id": command.column_id,
            "target": format!("{:?}", command.target),
        });
        self.edit_board_unit(board_id, "reorder_columns", &details, |board| {
            move_column(board, command)
        })
    }

    /// Handle the end of a task drag gesture.
    ///
    /// # Errors
    ///
    /// Returns an error if the store write fails.
    pub fn drop_task(&mut self, board_id: &str, gesture: &DragEnd) -> Result<bool> {
        let Some(command) = self.get_board(board_id).and_then(|b| resolve_task_drop(b, gesture))
        else {
            return Ok(false);
        };
        self.reposition(board_id, &command)
    }

    /// Handle the end of a column drag gesture.
    ///
    /// # Errors
    ///
    /// Returns an error if the store write fails.
    pub fn drop_column(&mut self, board_id: &str, gesture: &DragEnd) -> Result<bool> {
        let Some(command) = self.get_board(board_id).and_then(|b| resolve_column_drop(b, gesture))
        else {
            return Ok(false);
        };
        self.reorder_columns(board_id, &command)
    }

    /// Register a listener called with the new state after every commit.
    pub fn subscribe(&mut self, listener: impl Fn(&[Board]) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn edit_board_unit(
        &mut self,
        board_id: &str,
        operation: &str,
        details: &serde_json::Value,
        apply: impl FnOnce(&Board) -> Option<Board>,
    ) -> Result<bool> {
        let saved =
            self.edit_board(board_id, operation, details, |board| apply(board).map(|b| (b, ())))?;
        Ok(saved.is_some())
    }

    /// Run a snapshot edit against one board and commit the result.
    fn edit_board<T>(
        &mut self,
        board_id: &str,
        operation: &str,
        details: &serde_json::Value,
        apply: impl FnOnce(&Board) -> Option<(Board, T)>,
    ) -> Result<Option<T>> {
        let Some(index) = self.boards.iter().position(|b| b.id == board_id) else {
            debug!(board_id, operation, "board not found, ignoring");
            return Ok(None);
        };
        let Some((board, created)) = apply(&self.boards[index]) else {
            debug!(board_id, operation, "no change, ignoring");
            return Ok(None);
        };

        let mut boards = self.boards.clone();
        boards[index] = board;
        self.commit(boards, operation, Some(board_id), details)?;
        Ok(Some(created))
    }

    /// Persist a new state, then make it current and notify subscribers.
    fn commit(
        &mut self,
        boards: Vec<Board>,
        operation: &str,
        board_id: Option<&str>,
        details: &serde_json::Value,
    ) -> Result<()> {
        let serialized = serde_json::to_string(&boards)?;
        self.store.set(BOARDS_KEY, &serialized)?;
        self.boards = boards;

        info!(operation, board_id, "committed board mutation");
        if let Some(log) = &self.mutation_log {
            log.record(operation, board_id, details);
        }
        self.notify();
        Ok(())
    }

    fn notify(&self) {
        for (_, listener) in &self.listeners {
            listener(&self.boards);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::gesture::{DragItem, DropZone};
    use crate::board::models::Priority;
    use crate::board::reposition::DropTarget;
    use crate::testing::MemoryStore;
    use std::cell::RefCell;
    use std::rc::Rc;
    use tempfile::TempDir;

    fn repo() -> BoardRepository<MemoryStore> {
        BoardRepository::open(MemoryStore::new())
    }

    /// A repository with one board holding columns A=[T1(low), T2(high)] and B=[].
    fn sprint() -> (BoardRepository<MemoryStore>, String, String, String) {
        let mut repo = repo();
        let board = repo.create_board("Sprint").unwrap().unwrap();
        let a = repo.create_column(&board.id, "A").unwrap().unwrap();
        let b = repo.create_column(&board.id, "B").unwrap().unwrap();
        repo.create_task(&board.id, &a.id, TaskFields::titled("T1")).unwrap().unwrap();
        repo.create_task(&board.id, &a.id, TaskFields::titled("T2").with_priority(Priority::High))
            .unwrap()
            .unwrap();
        (repo, board.id, a.id, b.id)
    }

    fn titles(repo: &BoardRepository<MemoryStore>, board_id: &str, column_id: &str) -> Vec<String> {
        repo.get_board(board_id)
            .and_then(|b| b.column(column_id))
            .map(|c| c.tasks.iter().map(|t| t.title.clone()).collect())
            .unwrap_or_default()
    }

    fn task_id(repo: &BoardRepository<MemoryStore>, board_id: &str, title: &str) -> String {
        repo.get_board(board_id)
            .unwrap()
            .columns
            .iter()
            .flat_map(|c| &c.tasks)
            .find(|t| t.title == title)
            .unwrap()
            .id
            .clone()
    }

    #[test]
    fn test_open_empty_store() {
        let repo = repo();
        assert!(repo.get_all().is_empty());
        assert_eq!(repo.store().write_count(), 0);
    }

    #[test]
    fn test_open_corrupt_store_is_empty() {
        let repo = BoardRepository::open(MemoryStore::with_value(BOARDS_KEY, "{not json"));
        assert!(repo.get_all().is_empty());
    }

    #[test]
    fn test_open_wrong_shape_is_empty() {
        let repo = BoardRepository::open(MemoryStore::with_value(BOARDS_KEY, r#"{"id": 1}"#));
        assert!(repo.get_all().is_empty());
    }

    #[test]
    fn test_create_board() {
        let mut repo = repo();
        let board = repo.create_board("Sprint").unwrap().unwrap();
        assert_eq!(board.title, "Sprint");
        assert!(board.columns.is_empty());
        assert_eq!(repo.get_all(), [board.clone()]);
        assert_eq!(repo.get_board(&board.id), Some(&board));
        assert_eq!(repo.store().write_count(), 1);
    }

    #[test]
    fn test_create_board_blank_title_is_noop() {
        let mut repo = repo();
        assert!(repo.create_board("").unwrap().is_none());
        assert!(repo.create_board("  \t").unwrap().is_none());
        assert!(repo.get_all().is_empty());
        assert_eq!(repo.store().write_count(), 0);
    }

    #[test]
    fn test_boards_keep_creation_order_and_unique_ids() {
        let mut repo = repo();
        let first = repo.create_board("Same").unwrap().unwrap();
        let second = repo.create_board("Same").unwrap().unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(repo.get_all()[0].id, first.id);
        assert_eq!(repo.get_all()[1].id, second.id);
    }

    #[test]
    fn test_get_board_not_found() {
        assert!(repo().get_board("missing").is_none());
    }

    #[test]
    fn test_state_survives_reopen() {
        let (repo, board_id, a, _) = sprint();
        let reopened = BoardRepository::open(repo.store);
        assert_eq!(titles(&reopened, &board_id, &a), ["T1", "T2"]);
    }

    #[test]
    fn test_move_to_empty_column() {
        let (mut repo, board_id, a, b) = sprint();
        let t1 = task_id(&repo, &board_id, "T1");

        let moved = repo.reposition(&board_id, &TaskMove::new(t1, &a, &b, DropTarget::End)).unwrap();
        assert!(moved);
        assert_eq!(titles(&repo, &board_id, &a), ["T2"]);
        assert_eq!(titles(&repo, &board_id, &b), ["T1"]);
    }

    #[test]
    fn test_noop_reposition_does_not_write() {
        let (mut repo, board_id, a, _) = sprint();
        let t1 = task_id(&repo, &board_id, "T1");
        let writes = repo.store().write_count();
        let before = repo.get_all().to_vec();

        let moved =
            repo.reposition(&board_id, &TaskMove::within(t1, &a, DropTarget::Index(0))).unwrap();
        assert!(!moved);
        assert_eq!(repo.store().write_count(), writes);
        assert_eq!(repo.get_all(), before);
    }

    #[test]
    fn test_stale_ids_do_not_write() {
        let (mut repo, board_id, a, b) = sprint();
        let writes = repo.store().write_count();

        assert!(!repo.reposition(&board_id, &TaskMove::new("gone", &a, &b, DropTarget::End)).unwrap());
        assert!(!repo.reposition("no-board", &TaskMove::new("gone", &a, &b, DropTarget::End)).unwrap());
        assert!(!repo.delete_task(&board_id, &a, "gone").unwrap());
        assert!(!repo.delete_column(&board_id, "gone").unwrap());
        assert!(repo.create_column("no-board", "X").unwrap().is_none());
        assert_eq!(repo.store().write_count(), writes);
    }

    #[test]
    fn test_column_crud() {
        let (mut repo, board_id, a, b) = sprint();

        assert!(repo.rename_column(&board_id, &b, "Done").unwrap());
        assert_eq!(repo.get_board(&board_id).unwrap().column(&b).unwrap().title, "Done");
        assert!(!repo.rename_column(&board_id, &b, "   ").unwrap());

        assert!(repo.create_column(&board_id, "").unwrap().is_none());

        assert!(repo.delete_column(&board_id, &a).unwrap());
        let board = repo.get_board(&board_id).unwrap();
        assert!(board.column(&a).is_none());
        assert_eq!(board.task_count(), 0);
    }

    #[test]
    fn test_task_crud() {
        let (mut repo, board_id, a, _) = sprint();
        let t1 = task_id(&repo, &board_id, "T1");

        let mut edited = repo.get_board(&board_id).unwrap().column(&a).unwrap().tasks[0].clone();
        edited.description = "details".to_string();
        assert!(repo.update_task(&board_id, &a, edited.clone()).unwrap());
        assert_eq!(repo.get_board(&board_id).unwrap().column(&a).unwrap().tasks[0], edited);

        assert!(repo.delete_task(&board_id, &a, &t1).unwrap());
        assert_eq!(titles(&repo, &board_id, &a), ["T2"]);

        assert!(repo.create_task(&board_id, &a, TaskFields::titled(" ")).unwrap().is_none());
    }

    #[test]
    fn test_save_task_creates_then_updates() {
        let (mut repo, board_id, _, b) = sprint();

        let created = repo.save_task(&board_id, &b, TaskFields::titled("New"), None).unwrap().unwrap();
        let fields = TaskFields::titled("Renamed").with_created_by("kim");
        let updated =
            repo.save_task(&board_id, &b, fields, Some(&created.id)).unwrap().unwrap();

        assert_eq!(updated.id, created.id);
        let column = repo.get_board(&board_id).unwrap().column(&b).unwrap().clone();
        assert_eq!(column.tasks.len(), 1);
        assert_eq!(column.tasks[0].title, "Renamed");
        assert_eq!(column.tasks[0].created_by, "kim");
    }

    #[test]
    fn test_save_task_unknown_existing_id_is_noop() {
        let (mut repo, board_id, _, b) = sprint();
        let saved = repo.save_task(&board_id, &b, TaskFields::titled("X"), Some("gone")).unwrap();
        assert!(saved.is_none());
        assert!(titles(&repo, &board_id, &b).is_empty());
    }

    #[test]
    fn test_drop_task_gesture() {
        let (mut repo, board_id, a, b) = sprint();
        let t2 = task_id(&repo, &board_id, "T2");

        let gesture = DragEnd::new(DragItem::task(&t2, &a), Some(DropZone::column(&b)));
        assert!(repo.drop_task(&board_id, &gesture).unwrap());
        assert_eq!(titles(&repo, &board_id, &b), ["T2"]);

        let writes = repo.store().write_count();
        let cancelled = DragEnd::cancelled(DragItem::task(&t2, &b));
        assert!(!repo.drop_task(&board_id, &cancelled).unwrap());
        assert_eq!(repo.store().write_count(), writes);
    }

    #[test]
    fn test_drop_column_gesture() {
        let (mut repo, board_id, a, b) = sprint();
        let gesture = DragEnd::new(DragItem::column(&b), Some(DropZone::column(&a)));
        assert!(repo.drop_column(&board_id, &gesture).unwrap());

        let order: Vec<String> =
            repo.get_board(&board_id).unwrap().columns.iter().map(|c| c.id.clone()).collect();
        assert_eq!(order, [b, a]);
    }

    #[test]
    fn test_reorder_columns_noop() {
        let (mut repo, board_id, a, _) = sprint();
        let writes = repo.store().write_count();
        assert!(!repo.reorder_columns(&board_id, &ColumnMove::new(a, DropTarget::Index(0))).unwrap());
        assert_eq!(repo.store().write_count(), writes);
    }

    #[test]
    fn test_write_failure_leaves_state_unchanged() {
        let (mut repo, board_id, a, b) = sprint();
        let t1 = task_id(&repo, &board_id, "T1");
        let before = repo.get_all().to_vec();

        repo.store().set_fail_writes(true);
        let result = repo.reposition(&board_id, &TaskMove::new(t1, &a, &b, DropTarget::End));
        assert!(result.is_err());
        assert_eq!(repo.get_all(), before);
    }

    #[test]
    fn test_replace_all() {
        let mut repo = repo();
        let boards = vec![Board::new("b1", "One"), Board::new("b2", "Two")];
        repo.replace_all(boards.clone()).unwrap();
        assert_eq!(repo.get_all(), boards);
        assert_eq!(load_boards(repo.store()), boards);
    }

    #[test]
    fn test_duplicate_board_ids_resolve_to_first() {
        let mut repo = repo();
        repo.replace_all(vec![Board::new("dup", "First"), Board::new("dup", "Second")]).unwrap();

        assert_eq!(repo.get_board("dup").unwrap().title, "First");
        repo.create_column("dup", "Todo").unwrap().unwrap();

        assert_eq!(repo.get_all()[0].columns.len(), 1);
        assert!(repo.get_all()[1].columns.is_empty());
        assert_eq!(repo.get_all()[1].title, "Second");
    }

    #[test]
    fn test_load_rereads_store() {
        let store = MemoryStore::new();
        let mut repo = BoardRepository::open(&store);
        assert!(repo.get_all().is_empty());

        let boards = vec![Board::new("b1", "One")];
        store.set(BOARDS_KEY, &serde_json::to_string(&boards).unwrap()).unwrap();
        assert_eq!(repo.load(), boards);
    }

    #[test]
    fn test_subscribers_notified_on_commit_only() {
        let mut repo = repo();
        let seen: Rc<RefCell<Vec<usize>>> = Rc::default();
        let sink = Rc::clone(&seen);
        let id = repo.subscribe(move |boards| sink.borrow_mut().push(boards.len()));

        repo.create_board("One").unwrap();
        repo.create_board("").unwrap();
        repo.create_board("Two").unwrap();
        assert_eq!(*seen.borrow(), [1, 2]);

        assert!(repo.unsubscribe(id));
        assert!(!repo.unsubscribe(id));
        repo.create_board("Three").unwrap();
        assert_eq!(*seen.borrow(), [1, 2]);
    }

    #[test]
    fn test_subscriber_sees_task_in_exactly_one_column() {
        let (mut repo, board_id, a, b) = sprint();
        let t1 = task_id(&repo, &board_id, "T1");
        let observed: Rc<RefCell<Vec<usize>>> = Rc::default();
        let sink = Rc::clone(&observed);
        let watched = t1.clone();
        repo.subscribe(move |boards| {
            let holders = boards
                .iter()
                .flat_map(|board| &board.columns)
                .filter(|column| column.task(&watched).is_some())
                .count();
            sink.borrow_mut().push(holders);
        });

        repo.reposition(&board_id, &TaskMove::new(t1, a, b, DropTarget::End)).unwrap();
        assert_eq!(*observed.borrow(), [1]);
    }

    #[test]
    fn test_mutation_log_records_commits() {
        let dir = TempDir::new().unwrap();
        let log = MutationLog::new(dir.path().join("mutations.jsonl"));
        let mut repo = repo().with_mutation_log(log.clone());

        let board = repo.create_board("Logged").unwrap().unwrap();
        repo.create_column(&board.id, "").unwrap();
        repo.create_column(&board.id, "Todo").unwrap();

        let content = std::fs::read_to_string(log.path()).unwrap();
        let operations: Vec<String> = content
            .lines()
            .map(|l| serde_json::from_str::<serde_json::Value>(l).unwrap())
            .map(|v| v["operation"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(operations, ["create_board", "create_column"]);
    }
}
