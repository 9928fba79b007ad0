//! Path utilities for determining data storage locations.
//!
//! Board data lives in `~/.taskboard/` unless the config overrides the
//! database location.

use std::path::{Path, PathBuf};

/// The base directory name for taskboard data.
const DATA_DIR_NAME: &str = ".taskboard";

/// The database filename.
pub const DATABASE_FILENAME: &str = "boards.sqlite3";

/// The mutation event log filename.
pub const MUTATION_LOG_FILENAME: &str = "mutations.jsonl";

/// Get the base data directory for taskboard.
///
/// Returns `~/.taskboard/` or `None` if the home directory
/// cannot be determined.
#[must_use]
pub fn data_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| data_dir_in(&home))
}

/// Get the data directory under an explicit base directory.
#[must_use]
pub fn data_dir_in(base_dir: &Path) -> PathBuf {
    base_dir.join(DATA_DIR_NAME)
}

/// Get the default database path, `~/.taskboard/boards.sqlite3`.
#[must_use]
pub fn default_db_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join(DATABASE_FILENAME))
}

/// Get the mutation log path inside a data directory.
#[must_use]
pub fn mutation_log_path(data_dir: &Path) -> PathBuf {
    data_dir.join(MUTATION_LOG_FILENAME)
}
