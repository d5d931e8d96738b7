//! Core data types for the storage layer.

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::words;

/// One persisted journal record. At most one exists per calendar day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Unique identifier, assigned at creation
    pub id: Uuid,

    /// Entry text, replaced wholesale on edit
    pub content: String,

    /// Instant of first creation for that day; never changes afterwards
    pub created_at: DateTime<Local>,

    /// The calendar day this entry represents. Stored explicitly rather than
    /// re-derived from `created_at`, so day identity survives timezone and
    /// midnight drift.
    pub day: NaiveDate,

    /// Count of whitespace-separated tokens in `content`
    pub word_count: i64,
}

/// Builder for creating new entries.
#[derive(Debug, Clone)]
pub struct NewEntry {
    /// Entry text (already trimmed by the caller)
    pub content: String,

    /// Creation instant; the full instant, not start-of-day
    pub created_at: DateTime<Local>,

    /// Day key, derived from `created_at` at construction time
    pub day: NaiveDate,

    /// Word count derived from `content`
    pub word_count: i64,
}

impl NewEntry {
    pub fn new(content: impl Into<String>, created_at: DateTime<Local>) -> Self {
        let content = content.into();
        let word_count = words::count(&content) as i64;
        Self {
            day: created_at.date_naive(),
            content,
            created_at,
            word_count,
        }
    }
}

/// Total words written on one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCount {
    pub day: NaiveDate,
    pub words: i64,
}
