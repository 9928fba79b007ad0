//! Core traits for testability and abstraction.

use crate::error::Result;

/// Trait for the key-value store that backs the board repository.
///
/// The repository keeps its entire state under one fixed key and overwrites
/// it wholesale on every committed mutation. The production implementation
/// uses `SQLite`, while tests use an in-memory mock.
pub trait KeyValueStore {
    /// Read the value stored under `key`, or `None` if nothing was written yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}
