//! Debug mutation event logging.
//!
//! When `debug_logging` is enabled in the config, every committed board
//! mutation is appended as a JSONL line to `mutations.jsonl` in the data
//! directory. This allows debugging board behavior by inspecting exactly
//! which commands changed the state.

use crate::config::BoardConfig;
use crate::paths;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Appends mutation events to a JSONL file.
#[derive(Debug, Clone)]
pub struct MutationLog {
    path: PathBuf,
}

impl MutationLog {
    /// Log to an explicit file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a log in `data_dir` if the config enables debug logging.
    #[must_use]
    pub fn from_config(config: &BoardConfig, data_dir: &Path) -> Option<Self> {
        config.debug_logging.then(|| Self::new(paths::mutation_log_path(data_dir)))
    }

    /// Path of the log file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one mutation event.
    ///
    /// Errors are silently ignored: logging must never break a mutation
    /// that has already been committed.
    pub fn record(&self, operation: &str, board_id: Option<&str>, details: &serde_json::Value) {
        if let Some(parent) = self.path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return;
            }
        }

        let entry = serde_json::json!({
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "operation": operation,
            "board_id": board_id,
            "details": details,
        });

        let Ok(mut file) = OpenOptions::new().create(true).append(true).open(&self.path) else {
            return;
        };

        let _ = writeln!(file, "{entry}");
    }
}
