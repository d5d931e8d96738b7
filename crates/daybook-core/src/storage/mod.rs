//! Storage layer: the engine trait, data types, and the SQLite backend.

pub mod sqlite;
pub mod traits;
pub mod types;

pub use sqlite::SqliteStorage;
pub use traits::JournalStorage;
pub use types::{DayCount, JournalEntry, NewEntry};
