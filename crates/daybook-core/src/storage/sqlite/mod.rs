//! SQLite storage backend.
//!
//! One on-disk database file per journal, one row per entry. Creation goes
//! through a temp file plus atomic rename so a crash mid-init never leaves a
//! half-built database behind.

mod row;

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::Local;
use rusqlite::{Connection, OptionalExtension, Transaction};
use uuid::Uuid;

use crate::error::{Result, StoreError};
use crate::fs::TempFileGuard;
use crate::storage::traits::JournalStorage;
use crate::storage::types::{JournalEntry, NewEntry};

use row::EntryRow;

const FORMAT_VERSION: &str = "1";

/// SQLite storage engine for the journal database.
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    fn init_schema(conn: &Connection) -> Result<()> {
        conn.execute_batch(
            r#"
            CREATE TABLE meta (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );

            CREATE TABLE entries (
                id TEXT PRIMARY KEY,
                content TEXT NOT NULL,
                created_at TEXT NOT NULL,
                day TEXT NOT NULL UNIQUE,
                word_count INTEGER NOT NULL
            );

            CREATE INDEX entries_created_at ON entries(created_at);
            "#,
        )?;

        let created_at = Local::now().to_rfc3339();
        conn.execute(
            "INSERT INTO meta (key, value) VALUES (?, ?)",
            ["format_version", FORMAT_VERSION],
        )?;
        conn.execute(
            "INSERT INTO meta (key, value) VALUES (?, ?)",
            ["created_at", &created_at],
        )?;
        conn.execute(
            "INSERT INTO meta (key, value) VALUES (?, ?)",
            ["last_modified", &created_at],
        )?;

        Ok(())
    }

    fn touch_last_modified(tx: &Transaction<'_>) -> Result<()> {
        tx.execute(
            "UPDATE meta SET value = ? WHERE key = 'last_modified'",
            [Local::now().to_rfc3339()],
        )?;
        Ok(())
    }

    fn temp_path(path: &Path) -> Result<PathBuf> {
        let parent = path
            .parent()
            .ok_or_else(|| StoreError::Storage("Invalid journal path".to_string()))?;
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| StoreError::Storage("Invalid journal filename".to_string()))?;
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| StoreError::Storage(format!("System time error: {}", e)))?
            .as_nanos();
        Ok(parent.join(format!("{}.{}.tmp", filename, nanos)))
    }
}

impl JournalStorage for SqliteStorage {
    fn create(path: &Path) -> Result<Self> {
        if path.exists() {
            return Err(StoreError::Storage(
                "Journal database already exists".to_string(),
            ));
        }

        let temp_path = Self::temp_path(path)?;
        // Reserve the temp path so concurrent create attempts cannot collide.
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_path)
            .map_err(|e| StoreError::Storage(format!("Temp file create failed: {}", e)))?;
        // Any early return below must not strand the reserved temp file.
        let guard = TempFileGuard::new(temp_path.clone());

        let conn = Connection::open(&temp_path)?;
        Self::init_schema(&conn)?;
        conn.close()
            .map_err(|(_, e)| StoreError::Storage(format!("Close failed: {}", e)))?;

        crate::fs::rename_or_replace(&temp_path, path)
            .map_err(|e| StoreError::Storage(format!("Atomic rename failed: {}", e)))?;
        guard.keep();

        Self::open(path)
    }

    fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(StoreError::Storage(format!(
                "Journal database not found: {}",
                path.display()
            )));
        }

        let conn = Connection::open(path)?;

        // Sanity-check that this is actually a journal database.
        let format_version: String = conn
            .query_row(
                "SELECT value FROM meta WHERE key = 'format_version'",
                [],
                |row| row.get(0),
            )
            .map_err(|e| StoreError::Storage(format!("Not a journal database: {}", e)))?;
        if format_version != FORMAT_VERSION {
            return Err(StoreError::Storage(format!(
                "Unsupported journal format version: {}",
                format_version
            )));
        }

        Ok(Self { conn })
    }

    fn insert_entry(&mut self, entry: &NewEntry) -> Result<Uuid> {
        let tx = self.conn.transaction()?;

        let existing: Option<String> = tx
            .query_row(
                "SELECT id FROM entries WHERE day = ?",
                [entry.day.to_string()],
                |row| row.get(0),
            )
            .optional()?;
        if existing.is_some() {
            return Err(StoreError::InvalidInput(format!(
                "An entry already exists for {}",
                entry.day
            )));
        }

        let id = Uuid::new_v4();
        tx.execute(
            r#"
            INSERT INTO entries (id, content, created_at, day, word_count)
            VALUES (?, ?, ?, ?, ?)
            "#,
            (
                id.to_string(),
                &entry.content,
                entry.created_at.to_rfc3339(),
                entry.day.to_string(),
                entry.word_count,
            ),
        )?;

        Self::touch_last_modified(&tx)?;
        tx.commit()?;

        Ok(id)
    }

    fn update_entry_content(&mut self, id: &Uuid, content: &str, word_count: i64) -> Result<()> {
        let tx = self.conn.transaction()?;

        let updated = tx.execute(
            "UPDATE entries SET content = ?, word_count = ? WHERE id = ?",
            (content, word_count, id.to_string()),
        )?;
        if updated == 0 {
            return Err(StoreError::NotFound(format!("Entry {} not found", id)));
        }

        Self::touch_last_modified(&tx)?;
        tx.commit()?;

        Ok(())
    }

    fn get_entry(&self, id: &Uuid) -> Result<Option<JournalEntry>> {
        let result = self.conn.query_row(
            r#"
            SELECT id, content, created_at, day, word_count
            FROM entries
            WHERE id = ?
            "#,
            [id.to_string()],
            |row| {
                Ok(EntryRow {
                    id: row.get(0)?,
                    content: row.get(1)?,
                    created_at: row.get(2)?,
                    day: row.get(3)?,
                    word_count: row.get(4)?,
                })
            },
        );

        match result {
            Ok(row) => Ok(Some(row.try_into()?)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn list_entries(&self) -> Result<Vec<JournalEntry>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, content, created_at, day, word_count
            FROM entries
            ORDER BY created_at DESC
            "#,
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(EntryRow {
                id: row.get(0)?,
                content: row.get(1)?,
                created_at: row.get(2)?,
                day: row.get(3)?,
                word_count: row.get(4)?,
            })
        })?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?.try_into()?);
        }

        Ok(entries)
    }

    fn check_integrity(&self) -> Result<()> {
        let metadata_count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM meta WHERE key IN ('format_version', 'created_at', 'last_modified')",
            [],
            |row| row.get(0),
        )?;
        if metadata_count < 3 {
            return Err(StoreError::Storage(
                "Metadata table missing required keys".to_string(),
            ));
        }

        let duplicate_days: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM (SELECT day FROM entries GROUP BY day HAVING COUNT(*) > 1)",
            [],
            |row| row.get(0),
        )?;
        if duplicate_days > 0 {
            return Err(StoreError::Storage(
                "Multiple entries share a day key".to_string(),
            ));
        }

        // created_at is RFC 3339 in the local offset of creation, so its
        // first ten characters are the creation date.
        let mismatched_days: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM entries WHERE substr(created_at, 1, 10) != day",
            [],
            |row| row.get(0),
        )?;
        if mismatched_days > 0 {
            return Err(StoreError::Storage(
                "Entry day keys disagree with creation timestamps".to_string(),
            ));
        }

        Ok(())
    }
}
