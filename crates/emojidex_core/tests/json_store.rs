use emojidex_core::{
    decode_records, encode_records, sample_records, EmojiRecord, EmojiStore, InMemoryStore,
    JsonFileStore, LoadError, PersistError,
};
use std::fs;
use tempfile::tempdir;

fn fixture_records() -> Vec<EmojiRecord> {
    vec![
        EmojiRecord::new("🔥", "Fire", "A flame.", "hot"),
        EmojiRecord::new("🇯🇵", "Japan", "Flag of Japan.", "travel"),
        EmojiRecord::new("🔥", "Fire", "Duplicate content is allowed.", "hot"),
        EmojiRecord::new("👍🏽", "Thumbs Up", "Quote \"marks\", tabs\tand\nnewlines.", ""),
    ]
}

#[test]
fn encode_then_decode_preserves_fields_and_order() {
    let records = fixture_records();
    let text = encode_records(&records).unwrap();

    assert_eq!(decode_records(&text).unwrap(), records);
    assert_eq!(decode_records(&encode_records(&[]).unwrap()).unwrap(), Vec::new());
}

#[test]
fn save_then_load_roundtrip_through_file() {
    let dir = tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("emojis.json"));
    let records = fixture_records();

    store.save(&records).unwrap();

    assert_eq!(store.try_load().unwrap(), records);
    assert_eq!(store.load(), Some(records));
}

#[test]
fn saved_file_matches_encoded_list_exactly() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("emojis.json");
    let store = JsonFileStore::new(&path);
    let records = sample_records();

    store.save(&records).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), encode_records(&records).unwrap());
}

#[test]
fn save_creates_missing_parent_directories() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("emojidex").join("emojis.json");
    let store = JsonFileStore::new(&path);

    store.save(&fixture_records()).unwrap();

    assert!(path.is_file());
}

#[test]
fn save_overwrites_previous_content_and_leaves_no_temp_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("emojis.json");
    let store = JsonFileStore::new(&path);

    store.save(&sample_records()).unwrap();
    let shorter = vec![EmojiRecord::new("🔥", "Fire", "A flame.", "hot")];
    store.save(&shorter).unwrap();

    assert_eq!(store.try_load().unwrap(), shorter);
    let entries = fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(entries, 1);
}

#[test]
fn load_missing_file_returns_none() {
    let dir = tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("absent.json"));

    assert!(matches!(store.try_load(), Err(LoadError::NotFound { .. })));
    assert_eq!(store.load(), None);
}

#[test]
fn load_malformed_file_returns_none() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("emojis.json");
    let store = JsonFileStore::new(&path);

    for content in ["", "not json", "{\"symbol\": \"🔥\"}", "[{\"symbol\": 1}]", "[1, 2"] {
        fs::write(&path, content).unwrap();
        assert!(
            matches!(store.try_load(), Err(LoadError::Parse { .. })),
            "content {content:?} should fail to parse"
        );
        assert_eq!(store.load(), None);
    }
}

#[test]
fn load_non_utf8_file_returns_none() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("emojis.json");
    fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
    let store = JsonFileStore::new(&path);

    assert!(matches!(store.try_load(), Err(LoadError::Read { .. })));
    assert_eq!(store.load(), None);
}

#[test]
fn load_directory_path_returns_none() {
    let dir = tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());

    assert_eq!(store.load(), None);
}

#[test]
fn persisted_empty_list_loads_as_empty_not_none() {
    let dir = tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("emojis.json"));

    store.save(&[]).unwrap();

    assert_eq!(store.load(), Some(Vec::new()));
}

#[test]
fn file_without_ids_loads_with_fresh_ids() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("emojis.json");
    fs::write(
        &path,
        r#"[
            {"symbol": "🐢", "name": "Turtle", "description": "A cute turtle.", "usage": "something slow"},
            {"symbol": "🐘", "name": "Elephant", "description": "A gray elephant.", "usage": "good memory"}
        ]"#,
    )
    .unwrap();

    let records = JsonFileStore::new(&path).try_load().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "Turtle");
    assert_eq!(records[1].name, "Elephant");
    assert_ne!(records[0].id(), records[1].id());
}

#[test]
fn memory_store_keeps_the_encoded_document() {
    let store = InMemoryStore::new();
    assert_eq!(store.load(), None);

    let records = fixture_records();
    store.save(&records).unwrap();

    assert_eq!(store.document(), Some(encode_records(&records).unwrap()));
    assert_eq!(store.write_count(), 1);
    assert_eq!(store.load(), Some(records));
}

#[test]
fn memory_store_with_corrupt_document_loads_none() {
    let store = InMemoryStore::with_document("<plist></plist>");

    assert!(matches!(store.try_load(), Err(LoadError::Parse { .. })));
    assert_eq!(store.load(), None);
}

#[test]
fn memory_store_write_failure_keeps_previous_document() {
    let store = InMemoryStore::new();
    let records = fixture_records();
    store.save(&records).unwrap();

    store.set_fail_writes(true);
    let err = store.save(&[]).unwrap_err();

    assert!(err.to_string().contains("failed to write"));
    assert!(err.to_string().ends_with("writes disabled"));
    assert!(matches!(err, PersistError::Write { .. }));
    assert_eq!(store.load(), Some(records));
    assert_eq!(store.write_count(), 1);
}
