use tamly::store::{ConversationStore, FilesystemStorage, ScopedStorage, WELCOME_MESSAGE};
use tempfile::TempDir;

// Single test so the HOME override cannot race with other tests in this
// binary.
#[test]
fn test_filesystem_storage_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    std::env::set_var("HOME", temp_dir.path().to_str().unwrap());

    let storage = FilesystemStorage::new();
    assert!(storage.get("chat-messages").is_none());

    storage.set("chat-messages", "[]").unwrap();
    assert_eq!(storage.get("chat-messages").as_deref(), Some("[]"));

    // A conversation persisted through one store is restored by the next.
    {
        let mut store = ConversationStore::initialize(FilesystemStorage::new());
        store.append_user("xin chào");
    }

    let reloaded = ConversationStore::initialize(FilesystemStorage::new());
    assert_eq!(reloaded.messages().len(), 2);
    assert_eq!(reloaded.messages()[0].content, WELCOME_MESSAGE);
    assert_eq!(reloaded.messages()[1].content, "xin chào");
}
