use super::*;

#[test]
fn memory_storage_set_get_remove() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.get("idToken"), None);

    storage.set("idToken", "abc");
    assert_eq!(storage.get("idToken").as_deref(), Some("abc"));

    storage.set("idToken", "def");
    assert_eq!(storage.get("idToken").as_deref(), Some("def"));
    assert_eq!(storage.len(), 1);

    storage.remove("idToken");
    assert_eq!(storage.get("idToken"), None);
    assert!(storage.is_empty());
}

#[test]
fn memory_storage_clones_share_slots() {
    let a = MemoryStorage::new();
    let b = a.clone();
    a.set("k", "v");
    assert_eq!(b.get("k").as_deref(), Some("v"));
    b.remove("k");
    assert_eq!(a.get("k"), None);
}

#[test]
fn memory_storage_remove_missing_key_is_noop() {
    let storage = MemoryStorage::new();
    storage.remove("missing");
    assert!(storage.is_empty());
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_storage_is_inert_outside_browser() {
    let storage = BrowserStorage;
    storage.set("idToken", "abc");
    assert_eq!(storage.get("idToken"), None);
    storage.remove("idToken");
}
