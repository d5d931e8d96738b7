//! Storage engine trait definition.
//!
//! The `JournalStorage` trait defines the interface the entry store talks
//! to. The abstraction keeps the store logic independent of the backing
//! database, and lets tests substitute a failing backend to exercise the
//! error-absorption policy.

use std::path::Path;
use uuid::Uuid;

use super::types::{JournalEntry, NewEntry};
use crate::error::Result;

/// Storage engine interface for the journal database.
///
/// All implementations must ensure:
/// - At most one entry per day key (`NewEntry::day`)
/// - `created_at` and `day` are immutable once written
/// - Entries are never deleted in normal operation
pub trait JournalStorage {
    /// Create a new journal database at the specified path.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Storage` if the file already exists or the path
    /// cannot be written.
    fn create(path: &Path) -> Result<Self>
    where
        Self: Sized;

    /// Open an existing journal database.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Storage` if the file is missing or unreadable.
    fn open(path: &Path) -> Result<Self>
    where
        Self: Sized;

    /// Insert a new entry.
    ///
    /// # Returns
    ///
    /// Returns the UUID of the created entry.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidInput` if an entry already exists for
    /// `entry.day`.
    fn insert_entry(&mut self, entry: &NewEntry) -> Result<Uuid>;

    /// Overwrite an entry's content and word count in place.
    ///
    /// `created_at` and `day` are left untouched.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no entry has the given id.
    fn update_entry_content(&mut self, id: &Uuid, content: &str, word_count: i64) -> Result<()>;

    /// Get an entry by exact id.
    ///
    /// # Returns
    ///
    /// Returns `Ok(Some(entry))` if found, `Ok(None)` if not found.
    fn get_entry(&self, id: &Uuid) -> Result<Option<JournalEntry>>;

    /// List all entries, most recent `created_at` first.
    fn list_entries(&self) -> Result<Vec<JournalEntry>>;

    /// Check database integrity.
    ///
    /// Verifies the metadata keys are present, day keys are unique, and each
    /// stored day matches its entry's creation date.
    fn check_integrity(&self) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_usable_as_bound() {
        fn _accepts_journal_storage<S: JournalStorage>(_storage: S) {}
    }
}
