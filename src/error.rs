//! Error types for `taskboard`.

/// Errors that can occur while persisting boards or loading configuration.
///
/// Validation failures and stale ids are not errors: the board operations
/// treat them as no-ops. Only I/O and storage problems surface here.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON serialization error occurred.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A YAML parsing error occurred.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A `SQLite` database error occurred.
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// The home directory could not be determined for the default data location.
    #[error("Cannot determine data directory: no home directory")]
    NoDataDir,

    /// The backing store refused a write.
    #[error("Store error: {0}")]
    Store(String),
}

/// A specialized Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
