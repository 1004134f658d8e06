use chrono::NaiveDate;
use habitz::error::HabitzError;
use habitz::model::Habit;
use habitz::store::fs::FileStore;
use habitz::store::HabitStore;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn setup() -> (TempDir, FileStore) {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().join("db.json"));
    (dir, store)
}

fn backups(dir: &Path) -> Vec<String> {
    fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.starts_with("db.json.corrupt-"))
        .collect()
}

#[test]
fn test_missing_document_loads_empty_and_is_created() {
    let (_dir, store) = setup();
    assert!(!store.path().exists());

    let habits = store.load().unwrap();
    assert!(habits.is_empty());

    let on_disk: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
    assert_eq!(on_disk, serde_json::json!([]));
}

#[test]
fn test_malformed_document_is_backed_up_and_reset() {
    let (dir, store) = setup();
    fs::write(store.path(), "{ this is not json").unwrap();

    let habits = store.load().unwrap();
    assert!(habits.is_empty());

    let rewritten: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
    assert_eq!(rewritten, serde_json::json!([]));

    let saved = backups(dir.path());
    assert_eq!(saved.len(), 1, "expected one backup, found {:?}", saved);
    let backup_content = fs::read_to_string(dir.path().join(&saved[0])).unwrap();
    assert_eq!(backup_content, "{ this is not json");
}

#[test]
fn test_non_array_document_is_treated_as_malformed() {
    let (dir, store) = setup();
    fs::write(store.path(), r#"{"habits": []}"#).unwrap();

    assert!(store.load().unwrap().is_empty());
    assert_eq!(backups(dir.path()).len(), 1);
}

#[test]
fn test_other_io_errors_propagate() {
    let dir = TempDir::new().unwrap();
    // Reading a directory is an I/O failure, not a missing file
    let store = FileStore::new(dir.path());

    let err = store.load().unwrap_err();
    assert!(matches!(err, HabitzError::Io(_)));
    assert!(err.is_storage());
}

#[test]
fn test_save_then_load_preserves_collection() {
    let (_dir, store) = setup();
    let mut first = Habit::new("Read".into(), "daily".into());
    first.mark_completed(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    let second = Habit::new("Walk".into(), String::new());

    store.save(&[first.clone(), second.clone()]).unwrap();
    let loaded = store.load().unwrap();

    assert_eq!(loaded, vec![first, second]);
}

#[test]
fn test_resaving_a_loaded_document_keeps_its_content() {
    let (_dir, store) = setup();
    store
        .save(&[
            Habit::new("A".into(), String::new()),
            Habit::new("B".into(), "b".into()),
        ])
        .unwrap();
    let before: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();

    store.save(&store.load().unwrap()).unwrap();

    let after: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_document_is_pretty_printed_array() {
    let (_dir, store) = setup();
    store.save(&[Habit::new("Read".into(), String::new())]).unwrap();

    let raw = fs::read_to_string(store.path()).unwrap();
    assert!(raw.starts_with('['));
    assert!(raw.contains("\n  {"));
    assert!(raw.contains("\"completedDates\": []"));
}

#[test]
fn test_atomic_write_leaves_no_tmp_files() {
    let (dir, store) = setup();
    store.save(&[Habit::new("Read".into(), String::new())]).unwrap();
    store.save(&[]).unwrap();

    for entry in fs::read_dir(dir.path()).unwrap() {
        let name = entry.unwrap().file_name().to_string_lossy().into_owned();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_creates_missing_parent_directories() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().join("nested/data/db.json"));

    store.save(&[]).unwrap();
    assert!(store.path().exists());
}

#[test]
fn test_reads_documents_written_by_other_clients() {
    let (_dir, store) = setup();
    fs::write(
        store.path(),
        r#"[
  {
    "id": "3f0c3b8e-2d4e-4f51-9b0a-6c1d2e3f4a5b",
    "name": "Drink water",
    "description": "",
    "createdAt": "2024-01-05T09:15:27.412Z",
    "completedDates": ["2024-01-05", "2024-01-06"]
  }
]"#,
    )
    .unwrap();

    let habits = store.load().unwrap();
    assert_eq!(habits.len(), 1);
    assert_eq!(habits[0].name, "Drink water");
    assert_eq!(habits[0].completed_dates.len(), 2);
}

#[test]
fn test_one_bad_record_does_not_discard_the_others() {
    let (dir, store) = setup();
    let raw = r#"[
  {
    "id": "3f0c3b8e-2d4e-4f51-9b0a-6c1d2e3f4a5b",
    "name": "Read",
    "description": "",
    "createdAt": "2024-01-05T09:15:27.412Z",
    "completedDates": []
  },
  {
    "id": "9a1d7c2e-0b3f-4e6a-8c5d-1f2e3a4b5c6d",
    "description": "created without a name",
    "createdAt": "2024-01-06T10:00:00.000Z",
    "completedDates": []
  }
]"#;
    fs::write(store.path(), raw).unwrap();

    let habits = store.load().unwrap();
    assert_eq!(habits.len(), 1);
    assert_eq!(habits[0].name, "Read");

    // The document itself is well formed: no backup, nothing rewritten
    assert!(backups(dir.path()).is_empty());
    assert_eq!(fs::read_to_string(store.path()).unwrap(), raw);
}
