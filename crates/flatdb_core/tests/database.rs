//! End-to-end tests for the record store.

use flatdb_core::{Config, CoreError, Database, Record};
use std::fs;
use tempfile::tempdir;

/// Builds the reference record used throughout these tests.
fn example_record() -> Record {
    let mut record = Record::new();
    record.insert("four", "4");
    record.insert("newline", "\n");
    record.insert("empty", "");
    record.insert("backslash", "\\");
    record.insert("with_colons", "std::string");
    record
}

#[test]
fn end_to_end_example() {
    let temp = tempdir().unwrap();
    let db = Database::open_in(temp.path(), "e2e").unwrap();

    let record = example_record();
    db.put("r1", &record).unwrap();

    // Key-for-key and byte-for-byte equal to the input.
    let loaded = db.get("r1").unwrap();
    assert_eq!(loaded, record);
    assert_eq!(loaded.get("four"), Some(&b"4"[..]));
    assert_eq!(loaded.get("newline"), Some(&b"\n"[..]));
    assert_eq!(loaded.get("empty"), Some(&b""[..]));
    assert_eq!(loaded.get("backslash"), Some(&b"\\"[..]));
    assert_eq!(loaded.get("with_colons"), Some(&b"std::string"[..]));
}

#[test]
fn on_disk_layout_is_one_file_per_record() {
    let temp = tempdir().unwrap();
    let db = Database::open_in(temp.path(), "layout").unwrap();

    db.put("r1", &example_record()).unwrap();

    let path = db.root().join("r1");
    assert!(path.is_file());

    // No header, no length prefix, no trailing newline.
    let bytes = fs::read(&path).unwrap();
    assert_eq!(
        bytes,
        b"four:4\nnewline:\\n\nempty:\nbackslash:\\\\\nwith_colons:std::string"
    );
}

#[test]
fn records_survive_reopen() {
    let temp = tempdir().unwrap();
    {
        let db = Database::open_in(temp.path(), "persist").unwrap();
        db.put("r1", &example_record()).unwrap();
    }
    {
        let db = Database::open_in(temp.path(), "persist").unwrap();
        assert!(db.has("r1"));
        assert_eq!(db.get("r1").unwrap(), example_record());
    }
}

#[test]
fn overwrite_sequence() {
    let temp = tempdir().unwrap();
    let db = Database::open_in(temp.path(), "over").unwrap();

    db.put("r1", &Record::new()).unwrap();
    assert!(matches!(
        db.put("r1", &Record::new()),
        Err(CoreError::RecordExists { .. })
    ));
    db.put_overwrite("r1", &example_record()).unwrap();
    assert_eq!(db.get("r1").unwrap(), example_record());
}

#[test]
fn independent_records() {
    let temp = tempdir().unwrap();
    let db = Database::open_in(temp.path(), "multi").unwrap();

    let mut a = Record::new();
    a.insert("k", "a");
    let mut b = Record::new();
    b.insert("k", "b");

    db.put("rec-a", &a).unwrap();
    db.put("rec_b", &b).unwrap();
    db.del("rec-a").unwrap();

    assert!(!db.has("rec-a"));
    assert_eq!(db.get("rec_b").unwrap(), b);
}

#[test]
fn corrupted_record_is_a_decode_error() {
    let temp = tempdir().unwrap();
    let db = Database::open_in(temp.path(), "corrupt").unwrap();

    db.put("r1", &example_record()).unwrap();
    // Simulate a torn write by truncating mid-escape.
    fs::write(db.root().join("r1"), b"newline:\\").unwrap();

    assert!(db.has("r1"));
    assert!(matches!(db.get("r1"), Err(CoreError::Decode(_))));
}

#[test]
fn destroy_whole_database() {
    let temp = tempdir().unwrap();
    let db = Database::open_in(temp.path(), "doomed").unwrap();

    db.put("r1", &example_record()).unwrap();
    db.put("r2", &example_record()).unwrap();
    fs::create_dir_all(db.root().join("nested").join("dir")).unwrap();
    fs::write(db.root().join("nested").join("dir").join("file"), b"x").unwrap();

    db.destroy().unwrap();
    assert!(!db.root().exists());

    // Idempotent on the now-missing root.
    db.destroy().unwrap();
}

#[test]
fn hardened_config_end_to_end() {
    let temp = tempdir().unwrap();
    let config = Config::new().atomic_writes(true).sync_on_write(true);
    let db = Database::open_in_with_config(temp.path(), "hardened", config).unwrap();

    db.put("r1", &example_record()).unwrap();
    db.put_overwrite("r1", &example_record()).unwrap();
    assert_eq!(db.get("r1").unwrap(), example_record());

    // Only the record file exists under the root.
    let entries: Vec<_> = fs::read_dir(db.root())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from("r1")]);
}
