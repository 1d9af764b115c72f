//! Integration tests for the file-backed state store.

use std::path::PathBuf;

use finch::storage::{PALETTE_KEY, StateStore, USER_DATA_KEY};

fn scratch_store(name: &str) -> StateStore {
    let root = PathBuf::from(std::env::temp_dir())
        .join(format!("finch-storage-{}-{}", std::process::id(), name));
    let store = StateStore::at(root);
    store.clear().expect("failed to reset scratch store");
    store
}

#[test]
fn test_set_and_get() {
    let store = scratch_store("set-get");
    let value = r#"{"step": 1, "intent": "ACL"}"#;

    store.set(USER_DATA_KEY, value).expect("failed to set");
    assert_eq!(store.get(USER_DATA_KEY), Some(value.to_string()));

    store.clear().expect("failed to clear");
}

#[test]
fn test_get_nonexistent() {
    let store = scratch_store("nonexistent");
    assert_eq!(store.get("no_such_key"), None);
}

#[test]
fn test_overwrite_replaces_value() {
    let store = scratch_store("overwrite");

    store.set(PALETTE_KEY, "light-palette").expect("failed to set");
    store.set(PALETTE_KEY, "dark-palette").expect("failed to set");
    assert_eq!(store.get(PALETTE_KEY), Some("dark-palette".to_string()));

    store.clear().expect("failed to clear");
}

#[test]
fn test_delete() {
    let store = scratch_store("delete");

    store.set("to_delete", "value").expect("failed to set");
    assert!(store.get("to_delete").is_some());

    store.delete("to_delete").expect("failed to delete");
    assert!(store.get("to_delete").is_none());

    // Deleting again is a no-op.
    store.delete("to_delete").expect("failed to re-delete");
}

#[test]
fn test_keys() {
    let store = scratch_store("keys");

    store.set(USER_DATA_KEY, "{}").expect("failed to set ud");
    store
        .set(PALETTE_KEY, "light-palette")
        .expect("failed to set palette");

    let keys = store.keys();
    assert!(keys.contains(&USER_DATA_KEY.to_string()));
    assert!(keys.contains(&PALETTE_KEY.to_string()));

    store.clear().expect("failed to clear");
}

#[test]
fn test_clear() {
    let store = scratch_store("clear");

    store.set("key1", "value1").expect("failed to set");
    store.set("key2", "value2").expect("failed to set");

    store.clear().expect("failed to clear");

    assert!(store.get("key1").is_none());
    assert!(store.get("key2").is_none());
    assert!(store.keys().is_empty());
}

#[test]
fn test_store_isolation() {
    let store1 = scratch_store("isolation-1");
    let store2 = scratch_store("isolation-2");

    store1.set("shared_key", "one").expect("failed to set");
    store2.set("shared_key", "two").expect("failed to set");

    assert_eq!(store1.get("shared_key"), Some("one".to_string()));
    assert_eq!(store2.get("shared_key"), Some("two".to_string()));

    store1.clear().expect("failed to clear store1");
    store2.clear().expect("failed to clear store2");
}
