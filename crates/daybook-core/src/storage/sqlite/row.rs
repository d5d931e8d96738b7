//! Entry row type for database queries.

use std::str::FromStr;

use chrono::{DateTime, Local, NaiveDate};
use uuid::Uuid;

use crate::error::{Result, StoreError};
use crate::storage::types::JournalEntry;

/// Raw row data from the entries table, before parsing into domain types.
#[derive(Debug)]
pub struct EntryRow {
    pub id: String,
    pub content: String,
    pub created_at: String,
    pub day: String,
    pub word_count: i64,
}

impl TryFrom<EntryRow> for JournalEntry {
    type Error = StoreError;

    fn try_from(row: EntryRow) -> Result<Self> {
        let id = Uuid::parse_str(&row.id)
            .map_err(|e| StoreError::Storage(format!("Invalid entry UUID: {}", e)))?;
        let created_at = DateTime::parse_from_rfc3339(&row.created_at)
            .map_err(|e| StoreError::Storage(format!("Invalid timestamp: {}", e)))?
            .with_timezone(&Local);
        let day = NaiveDate::from_str(&row.day)
            .map_err(|e| StoreError::Storage(format!("Invalid day key: {}", e)))?;

        Ok(JournalEntry {
            id,
            content: row.content,
            created_at,
            day,
            word_count: row.word_count,
        })
    }
}
