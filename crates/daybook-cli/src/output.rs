//! Table and plain-text rendering for the timeline and stats views.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};

use daybook_core::storage::{DayCount, JournalEntry};

const CONTENT_PREVIEW_CHARS: usize = 60;
const BAR_WIDTH: usize = 24;

pub fn entries_table(entries: &[JournalEntry]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Day", "Words", "Entry"]);

    for entry in entries {
        table.add_row(vec![
            entry.day.format("%a, %b %-d %Y").to_string(),
            entry.word_count.to_string(),
            preview(&entry.content),
        ]);
    }
    table
}

pub fn day_counts_table(counts: &[DayCount]) -> Table {
    let max_words = counts.iter().map(|c| c.words).max().unwrap_or(0);

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Day", "Words", ""]);

    for count in counts {
        table.add_row(vec![
            count.day.to_string(),
            count.words.to_string(),
            bar(count.words, max_words),
        ]);
    }
    table
}

/// First line of the entry, truncated for the timeline column.
fn preview(content: &str) -> String {
    let first_line = content.lines().next().unwrap_or_default();
    let mut preview: String = first_line.chars().take(CONTENT_PREVIEW_CHARS).collect();
    if first_line.chars().count() > CONTENT_PREVIEW_CHARS || content.lines().count() > 1 {
        preview.push('\u{2026}');
    }
    preview
}

/// Horizontal bar scaled against the busiest day.
fn bar(words: i64, max_words: i64) -> String {
    if max_words <= 0 || words <= 0 {
        return String::new();
    }
    let width = ((words as f64 / max_words as f64) * BAR_WIDTH as f64).ceil() as usize;
    "\u{2587}".repeat(width.clamp(1, BAR_WIDTH))
}
