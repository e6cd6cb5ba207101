use super::*;

fn scratch() -> FileTokenStore {
    let dir = std::env::temp_dir().join(format!("snet-test-{}", uuid::Uuid::new_v4()));
    FileTokenStore::new(dir.join("token"))
}

#[test]
fn missing_file_reads_as_no_token() {
    assert_eq!(scratch().get(), None);
}

#[test]
fn set_creates_parent_and_round_trips() {
    let store = scratch();
    store.set("jwt-abc").unwrap();
    assert_eq!(store.get().as_deref(), Some("jwt-abc"));
    let _ = fs::remove_dir_all(store.path().parent().unwrap());
}

#[test]
fn blank_file_reads_as_no_token() {
    let store = scratch();
    store.set("  \n").unwrap();
    assert_eq!(store.get(), None);
    let _ = fs::remove_dir_all(store.path().parent().unwrap());
}

#[test]
fn remove_is_idempotent() {
    let store = scratch();
    store.set("jwt-abc").unwrap();
    store.remove().unwrap();
    store.remove().unwrap();
    assert_eq!(store.get(), None);
    let _ = fs::remove_dir_all(store.path().parent().unwrap());
}
