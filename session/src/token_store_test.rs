use super::*;

fn scratch_dir() -> std::path::PathBuf {
    std::env::temp_dir().join(format!("session-token-store-{}", uuid::Uuid::new_v4()))
}

// =============================================================================
// Credential
// =============================================================================

#[test]
fn credential_debug_is_redacted() {
    let cred = Credential::new("super-secret");
    assert_eq!(format!("{cred:?}"), "Credential(<redacted>)");
}

#[test]
fn credential_bearer_header() {
    assert_eq!(Credential::new("abc").bearer_header(), "Bearer abc");
}

// =============================================================================
// MemoryTokenStore
// =============================================================================

#[test]
fn memory_store_starts_empty() {
    assert!(MemoryTokenStore::new().get().is_none());
}

#[test]
fn memory_store_set_replaces_previous() {
    let store = MemoryTokenStore::with_credential(Credential::new("old"));
    store.set(&Credential::new("new"));
    assert_eq!(store.get(), Some(Credential::new("new")));
}

#[test]
fn memory_store_clear_removes_credential() {
    let store = MemoryTokenStore::with_credential(Credential::new("tok"));
    store.clear();
    assert!(store.get().is_none());
}

// =============================================================================
// FileTokenStore
// =============================================================================

#[test]
fn file_store_survives_new_instance() {
    let dir = scratch_dir();
    FileTokenStore::new(&dir).set(&Credential::new("persisted"));

    let reopened = FileTokenStore::new(&dir);
    assert_eq!(reopened.get(), Some(Credential::new("persisted")));
    assert!(reopened.path().ends_with(TOKEN_STORAGE_KEY));

    reopened.clear();
    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn file_store_missing_file_is_absent() {
    let store = FileTokenStore::new(scratch_dir());
    assert!(store.get().is_none());
}

#[test]
fn file_store_clear_is_idempotent() {
    let dir = scratch_dir();
    let store = FileTokenStore::new(&dir);
    store.set(&Credential::new("tok"));
    store.clear();
    store.clear();
    assert!(store.get().is_none());
    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn file_store_blank_file_is_absent() {
    let dir = scratch_dir();
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join(TOKEN_STORAGE_KEY), "  \n").unwrap();
    assert!(FileTokenStore::new(&dir).get().is_none());
    let _ = std::fs::remove_dir_all(dir);
}
