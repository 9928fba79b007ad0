//! # `taskboard`
//!
//! A personal task board: boards of ordered columns holding ordered tasks,
//! with search/filter/sort views and drag-and-drop repositioning.
//!
//! State lives in a [`BoardRepository`], which persists the whole board
//! collection to a [`KeyValueStore`] (SQLite by default) after every
//! committed change.

pub mod board;
pub mod config;
pub mod error;
pub mod event_log;
pub mod paths;
pub mod repository;
pub mod storage;
pub mod testing;
pub mod traits;

pub use board::{Board, Column, Priority, SearchCriteria, SortKey, Task, TaskFields};
pub use config::BoardConfig;
pub use error::{Error, Result};
pub use repository::{BoardRepository, SubscriptionId};
pub use storage::SqliteStore;
pub use traits::KeyValueStore;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
