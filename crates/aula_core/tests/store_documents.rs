use aula_core::store::migrations::latest_version;
use aula_core::store::{keys, open_store, open_store_in_memory};
use aula_core::StoreError;
use rusqlite::Connection;

#[test]
fn open_store_in_memory_applies_all_migrations() {
    let store = open_store_in_memory().unwrap();

    // A fresh store serves empty reads for every fixed key.
    let users: Option<Vec<serde_json::Value>> = store.read_document(keys::USERS).unwrap();
    assert!(users.is_none());
    assert!(!store.contains_document(keys::CATALOG).unwrap());
}

#[test]
fn opening_same_store_twice_is_idempotent_and_keeps_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("aula.db");

    let store = open_store(&path).unwrap();
    store
        .write_document(keys::USERS, &vec!["placeholder"])
        .unwrap();
    drop(store);

    let store = open_store(&path).unwrap();
    let users: Option<Vec<String>> = store.read_document(keys::USERS).unwrap();
    assert_eq!(users, Some(vec!["placeholder".to_string()]));
}

#[test]
fn opening_store_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_store(&path).unwrap_err();
    match err {
        StoreError::UnsupportedSchemaVersion {
            store_version,
            latest_supported,
        } => {
            assert_eq!(store_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn write_read_remove_document_roundtrip() {
    let store = open_store_in_memory().unwrap();

    store.write_document("probe", &serde_json::json!({"a": 1})).unwrap();
    assert!(store.contains_document("probe").unwrap());

    let loaded: Option<serde_json::Value> = store.read_document("probe").unwrap();
    assert_eq!(loaded, Some(serde_json::json!({"a": 1})));

    // Whole-document replace, not merge.
    store.write_document("probe", &serde_json::json!({"b": 2})).unwrap();
    let replaced: Option<serde_json::Value> = store.read_document("probe").unwrap();
    assert_eq!(replaced, Some(serde_json::json!({"b": 2})));

    store.remove_document("probe").unwrap();
    assert!(!store.contains_document("probe").unwrap());

    // Removing an absent key stays a no-op.
    store.remove_document("probe").unwrap();
}

#[test]
fn corrupt_document_surfaces_serde_error() {
    let store = open_store_in_memory().unwrap();
    store.write_document("broken", &"not an array").unwrap();

    let err = store
        .read_document::<Vec<serde_json::Value>>("broken")
        .unwrap_err();
    assert!(matches!(err, StoreError::Serde(_)));
}
