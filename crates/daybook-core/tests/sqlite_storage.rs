use std::fs;
use std::path::PathBuf;

use chrono::{Local, TimeZone};
use tempfile::{tempdir, TempDir};

use daybook_core::storage::{JournalStorage, NewEntry, SqliteStorage};
use daybook_core::StoreError;

fn journal_path(dir: &TempDir) -> PathBuf {
    dir.path().join("journal.db")
}

#[test]
fn test_create_open_round_trip() {
    let dir = tempdir().expect("tempdir");
    let path = journal_path(&dir);

    let storage = SqliteStorage::create(&path).expect("create should succeed");
    assert!(path.exists());
    storage.check_integrity().expect("fresh database is intact");

    let reopened = SqliteStorage::open(&path).expect("open should succeed");
    assert!(reopened.list_entries().expect("list").is_empty());
}

#[test]
fn test_create_refuses_existing_file() {
    let dir = tempdir().expect("tempdir");
    let path = journal_path(&dir);

    SqliteStorage::create(&path).expect("create should succeed");
    let result = SqliteStorage::create(&path);
    assert!(result.is_err());
}

#[test]
fn test_create_leaves_no_temp_files_behind() {
    let dir = tempdir().expect("tempdir");
    SqliteStorage::create(&journal_path(&dir)).expect("create should succeed");

    let leftovers: Vec<_> = fs::read_dir(dir.path())
        .expect("read_dir")
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty(), "stranded temp files: {:?}", leftovers);
}

#[test]
fn test_open_missing_file_fails() {
    let dir = tempdir().expect("tempdir");
    let result = SqliteStorage::open(&journal_path(&dir));
    assert!(result.is_err());
}

#[test]
fn test_open_rejects_foreign_file() {
    let dir = tempdir().expect("tempdir");
    let path = journal_path(&dir);
    fs::write(&path, b"not a journal").expect("write");

    let result = SqliteStorage::open(&path);
    assert!(result.is_err());
}

#[test]
fn test_insert_get_and_list_ordering() {
    let dir = tempdir().expect("tempdir");
    let mut storage = SqliteStorage::create(&journal_path(&dir)).expect("create");

    let monday = Local.with_ymd_and_hms(2025, 4, 14, 9, 0, 0).unwrap();
    let tuesday = Local.with_ymd_and_hms(2025, 4, 15, 21, 30, 0).unwrap();

    let first_id = storage
        .insert_entry(&NewEntry::new("first morning pages", monday))
        .expect("insert");
    let second_id = storage
        .insert_entry(&NewEntry::new("late night thoughts", tuesday))
        .expect("insert");

    let fetched = storage
        .get_entry(&first_id)
        .expect("get")
        .expect("entry exists");
    assert_eq!(fetched.content, "first morning pages");
    assert_eq!(fetched.word_count, 3);
    assert_eq!(fetched.created_at, monday);
    assert_eq!(fetched.day, monday.date_naive());

    let entries = storage.list_entries().expect("list");
    assert_eq!(entries.len(), 2);
    // Most recent created_at first.
    assert_eq!(entries[0].id, second_id);
    assert_eq!(entries[1].id, first_id);

    let missing = storage
        .get_entry(&uuid::Uuid::new_v4())
        .expect("get unknown id");
    assert!(missing.is_none());
}

#[test]
fn test_insert_rejects_duplicate_day() {
    let dir = tempdir().expect("tempdir");
    let mut storage = SqliteStorage::create(&journal_path(&dir)).expect("create");

    let morning = Local.with_ymd_and_hms(2025, 4, 14, 9, 0, 0).unwrap();
    let evening = Local.with_ymd_and_hms(2025, 4, 14, 22, 0, 0).unwrap();

    storage
        .insert_entry(&NewEntry::new("one", morning))
        .expect("insert");
    let result = storage.insert_entry(&NewEntry::new("two", evening));

    assert!(matches!(result, Err(StoreError::InvalidInput(_))));
    assert_eq!(storage.list_entries().expect("list").len(), 1);
}

#[test]
fn test_update_rewrites_content_only() {
    let dir = tempdir().expect("tempdir");
    let mut storage = SqliteStorage::create(&journal_path(&dir)).expect("create");

    let created_at = Local.with_ymd_and_hms(2025, 4, 14, 9, 0, 0).unwrap();
    let id = storage
        .insert_entry(&NewEntry::new("a b c", created_at))
        .expect("insert");

    storage
        .update_entry_content(&id, "x y", 2)
        .expect("update should succeed");

    let entry = storage.get_entry(&id).expect("get").expect("entry exists");
    assert_eq!(entry.content, "x y");
    assert_eq!(entry.word_count, 2);
    assert_eq!(entry.created_at, created_at);
    assert_eq!(entry.day, created_at.date_naive());

    storage.check_integrity().expect("still intact");
}

#[test]
fn test_update_unknown_id_is_not_found() {
    let dir = tempdir().expect("tempdir");
    let mut storage = SqliteStorage::create(&journal_path(&dir)).expect("create");

    let result = storage.update_entry_content(&uuid::Uuid::new_v4(), "text", 1);
    assert!(matches!(result, Err(StoreError::NotFound(_))));
}
