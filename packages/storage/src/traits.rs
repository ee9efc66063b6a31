//! The file storage contract.

use std::io::Read;

use chrono::{DateTime, Utc};
use inmemfs_tree::{File, Listing, OpenMode};

use crate::error::StorageError;

/// A named-file storage backend.
///
/// Names are `/`-delimited paths. This is the surface a hosting framework
/// talks to: it opens and saves byte streams by name and never sees the
/// structure behind them.
///
/// # Object Safety
///
/// This trait is object-safe: you can use `Box<dyn Storage>`.
pub trait Storage {
    /// Open the file called `name`.
    ///
    /// [`OpenMode::Write`] creates missing files; [`OpenMode::Read`] fails
    /// if `name` does not exist. The cursor starts at zero either way.
    fn open(&mut self, name: &str, mode: OpenMode) -> Result<&mut File, StorageError>;

    /// Drain `content` into the file called `name` and return `name`.
    fn save(&mut self, name: &str, content: &mut dyn Read) -> Result<String, StorageError>;

    /// Remove `name`, along with everything below it for a directory.
    fn delete(&mut self, name: &str) -> Result<(), StorageError>;

    fn exists(&self, name: &str) -> bool;

    /// Size in bytes of the file called `name`.
    fn size(&mut self, name: &str) -> Result<u64, StorageError>;

    /// Subdirectories and files directly inside `name`.
    fn listdir(&self, name: &str) -> Result<Listing, StorageError>;

    /// Public URL for `name`, absolute or relative depending on the base.
    fn url(&self, name: &str) -> Result<String, StorageError>;

    fn created_time(&self, name: &str) -> Result<DateTime<Utc>, StorageError>;

    fn modified_time(&self, name: &str) -> Result<DateTime<Utc>, StorageError>;

    fn accessed_time(&self, name: &str) -> Result<DateTime<Utc>, StorageError>;

    /// Save an in-memory byte slice.
    fn save_bytes(&mut self, name: &str, content: &[u8]) -> Result<String, StorageError> {
        let mut reader = content;
        self.save(name, &mut reader)
    }
}
