//! The entry store: draft lifecycle, upsert-by-day, and aggregation.
//!
//! One `EntryStore` owns the durable entry list and the in-progress draft
//! for today. It is constructed explicitly and passed by reference to
//! whatever consumes it; there is no process-wide instance.
//!
//! The store is also the error-absorption boundary. Storage failures are
//! logged and swallowed here: reads degrade to an empty list, and a failed
//! write leaves the draft untouched so unsaved text is never discarded.
//! Callers that need visibility (tests, diagnostics) can register a hook
//! with [`EntryStore::on_failure`].
//!
//! Single-threaded by construction: every operation runs synchronously from
//! a user-interaction or lifecycle callback, so there is no locking.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::warn;

use crate::clock::Clock;
use crate::error::StoreError;
use crate::stats::WritingStats;
use crate::storage::traits::JournalStorage;
use crate::storage::types::{DayCount, JournalEntry, NewEntry};
use crate::words;

/// A change to the store's published state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreChange {
    /// The entry list was refreshed from storage.
    EntriesReloaded,
}

/// Listener invoked after the store's published state changes.
pub type ChangeListener = Box<dyn Fn(StoreChange)>;

/// Observer for storage failures the store absorbs.
pub type FailureHook = Box<dyn Fn(&StoreError)>;

/// Owns the journal entries and the in-memory draft for today.
pub struct EntryStore<S: JournalStorage> {
    backend: Option<S>,
    entries: Vec<JournalEntry>,
    draft: String,
    clock: Box<dyn Clock>,
    listeners: Vec<ChangeListener>,
    failure_hook: Option<FailureHook>,
}

impl<S: JournalStorage> EntryStore<S> {
    /// Create a store over an already-opened backend.
    pub fn new(backend: S, clock: Box<dyn Clock>) -> Self {
        Self {
            backend: Some(backend),
            entries: Vec::new(),
            draft: String::new(),
            clock,
            listeners: Vec::new(),
            failure_hook: None,
        }
    }

    /// Open the journal database at `path` and build a store over it.
    ///
    /// Never fails: an open failure is logged and the store continues with
    /// no backend, degrading every later operation per the error policy.
    pub fn open(path: &Path, clock: Box<dyn Clock>) -> Self {
        let backend = match S::open(path) {
            Ok(backend) => Some(backend),
            Err(err) => {
                warn!("journal storage failed to open: {err}");
                None
            }
        };
        Self {
            backend,
            entries: Vec::new(),
            draft: String::new(),
            clock,
            listeners: Vec::new(),
            failure_hook: None,
        }
    }

    /// Register a listener invoked after every entry-list refresh.
    pub fn subscribe(&mut self, listener: ChangeListener) {
        self.listeners.push(listener);
    }

    /// Register an observer for absorbed storage failures.
    ///
    /// Absorption itself is unchanged; the hook only adds visibility.
    pub fn on_failure(&mut self, hook: FailureHook) {
        self.failure_hook = Some(hook);
    }

    /// The current entry list, most recent `created_at` first.
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// The transient unsaved text for today.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    /// Reload the entry list from storage, most recent first.
    ///
    /// If an entry exists for today and the draft is empty, the entry's
    /// content is copied into the draft. The draft is never clobbered while
    /// it holds unsaved text. A read failure degrades to an empty list.
    pub fn load(&mut self) {
        self.entries = match &self.backend {
            Some(backend) => match backend.list_entries() {
                Ok(entries) => entries,
                Err(err) => {
                    self.report(&err);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        if self.draft.is_empty() {
            let today = self.clock.now().date_naive();
            if let Some(entry) = self.entries.iter().find(|entry| entry.day == today) {
                self.draft = entry.content.clone();
            }
        }

        self.notify(StoreChange::EntriesReloaded);
    }

    /// Save the draft as today's entry.
    ///
    /// The draft is trimmed first; an empty result is a no-op. Otherwise the
    /// entry for today's day key is overwritten in place, or a new entry is
    /// created with `created_at` = the current instant. On success the draft
    /// is cleared and the list reloaded from storage (read-after-write). On
    /// failure the draft is left untouched for the next save trigger.
    pub fn save_draft(&mut self) {
        let trimmed = self.draft.trim().to_string();
        if trimmed.is_empty() {
            return;
        }

        let now = self.clock.now();
        let today = now.date_naive();
        let existing = self
            .entries
            .iter()
            .find(|entry| entry.day == today)
            .map(|entry| entry.id);

        let outcome = match &mut self.backend {
            Some(backend) => match existing {
                Some(id) => {
                    let word_count = words::count(&trimmed) as i64;
                    backend.update_entry_content(&id, &trimmed, word_count)
                }
                None => backend
                    .insert_entry(&NewEntry::new(trimmed, now))
                    .map(|_| ()),
            },
            None => Err(StoreError::Storage(
                "Journal storage is unavailable".to_string(),
            )),
        };

        match outcome {
            Ok(()) => {
                self.draft.clear();
                self.load();
            }
            Err(err) => self.report(&err),
        }
    }

    /// Group all entries by calendar day and sum word counts, ascending by
    /// day. Read-only; no side effects.
    pub fn word_counts_by_day(&self) -> Vec<DayCount> {
        let mut totals: BTreeMap<_, i64> = BTreeMap::new();
        for entry in &self.entries {
            *totals.entry(entry.day).or_insert(0) += entry.word_count;
        }
        totals
            .into_iter()
            .map(|(day, words)| DayCount { day, words })
            .collect()
    }

    /// Summary statistics over the per-day word counts.
    pub fn writing_stats(&self) -> WritingStats {
        WritingStats::from_day_counts(&self.word_counts_by_day())
    }

    fn report(&self, err: &StoreError) {
        warn!("journal storage failure: {err}");
        if let Some(hook) = &self.failure_hook {
            hook(err);
        }
    }

    fn notify(&self, change: StoreChange) {
        for listener in &self.listeners {
            listener(change);
        }
    }
}
