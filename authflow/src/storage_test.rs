use super::*;

#[test]
fn auth_token_key_is_fixed() {
    assert_eq!(AUTH_TOKEN_KEY, "authToken");
}

#[test]
fn memory_store_starts_empty() {
    assert_eq!(MemoryTokenStore::new().get(), None);
}

#[test]
fn memory_store_set_replaces_previous_value() {
    let store = MemoryTokenStore::with_token("old");
    store.set("new").unwrap();
    assert_eq!(store.get().as_deref(), Some("new"));
}

#[test]
fn memory_store_remove_clears_slot() {
    let store = MemoryTokenStore::with_token("tok");
    store.remove().unwrap();
    assert_eq!(store.get(), None);
}

#[test]
fn reference_forwards_to_store() {
    let store = MemoryTokenStore::new();
    let by_ref = &store;
    by_ref.set("abc").unwrap();
    assert_eq!(store.get().as_deref(), Some("abc"));
}
