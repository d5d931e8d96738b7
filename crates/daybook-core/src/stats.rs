//! Derived writing-activity statistics.
//!
//! Pure functions over per-day word counts; nothing here touches storage.

use serde::Serialize;

use crate::storage::types::DayCount;

/// Summary statistics over the per-day word counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WritingStats {
    /// Words written across all days
    pub total_words: i64,

    /// Average words per active day, integer division
    pub average_words: i64,

    /// Longest run of consecutive calendar days with an entry
    pub longest_streak: u32,
}

impl WritingStats {
    /// Compute statistics from day counts sorted by ascending day, as
    /// produced by `EntryStore::word_counts_by_day`.
    pub fn from_day_counts(counts: &[DayCount]) -> Self {
        let total_words: i64 = counts.iter().map(|c| c.words).sum();
        let average_words = if counts.is_empty() {
            0
        } else {
            total_words / counts.len() as i64
        };

        Self {
            total_words,
            average_words,
            longest_streak: longest_streak(counts),
        }
    }
}

fn longest_streak(counts: &[DayCount]) -> u32 {
    if counts.is_empty() {
        return 0;
    }

    let mut current = 1u32;
    let mut longest = 1u32;
    for pair in counts.windows(2) {
        let gap = (pair[1].day - pair[0].day).num_days();
        if gap == 1 {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 1;
        }
    }
    longest
}
