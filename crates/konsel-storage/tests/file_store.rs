use konsel_storage::error::StorageError;
use konsel_storage::state::{load_state, load_state_opt, save_state};
use konsel_storage::store::{FileStore, KeyValueStore};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Note {
    text: String,
}

#[tokio::test]
async fn put_then_get() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());

    store.put("greeting", b"\"halo\"".to_vec()).await.unwrap();
    assert_eq!(store.get("greeting").await.unwrap(), b"\"halo\"");
    assert!(dir.path().join("greeting.json").exists());
}

#[tokio::test]
async fn nested_keys_create_directories() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());

    let note = Note {
        text: "Hari ini lumayan baik.".to_string(),
    };
    save_state(&store, "chat_history/abc", &note).await.unwrap();
    assert!(dir.path().join("chat_history").join("abc.json").exists());

    let back: Note = load_state(&store, "chat_history/abc").await.unwrap();
    assert_eq!(back, note);
}

#[tokio::test]
async fn missing_key_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());

    let err = store.get("nothing").await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound { key } if key == "nothing"));

    let opt: Option<Note> = load_state_opt(&store, "nothing").await.unwrap();
    assert!(opt.is_none());
}

#[tokio::test]
async fn escaping_keys_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());

    for key in ["../outside", "/etc/passwd", ""] {
        let err = store.put(key, b"{}".to_vec()).await.unwrap_err();
        assert!(matches!(err, StorageError::InvalidKey { .. }), "{key}");
    }
}

#[tokio::test]
async fn delete_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());

    store.put("k", b"1".to_vec()).await.unwrap();
    store.delete("k").await.unwrap();
    store.delete("k").await.unwrap();
    assert!(matches!(
        store.get("k").await.unwrap_err(),
        StorageError::NotFound { .. }
    ));
}

#[tokio::test]
async fn malformed_json_is_a_serialization_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());

    store.put("note", b"{not json".to_vec()).await.unwrap();
    let err = load_state::<Note, _>(&store, "note").await.unwrap_err();
    assert!(matches!(err, StorageError::Serialization(_)));
}

#[tokio::test]
async fn list_returns_keys_under_prefix() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());

    store.put("chat_history/b", b"{}".to_vec()).await.unwrap();
    store.put("chat_history/a", b"{}".to_vec()).await.unwrap();
    store.put("chat_history/a/nested", b"{}".to_vec()).await.unwrap();
    store.put("journal_entries", b"[]".to_vec()).await.unwrap();
    // Left behind by an interrupted write.
    std::fs::write(dir.path().join("chat_history").join("c.json.tmp"), b"{").unwrap();

    let keys = store.list("chat_history/").await.unwrap();
    assert_eq!(keys, vec!["chat_history/a", "chat_history/b"]);
}

#[tokio::test]
async fn list_of_missing_directory_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("never-created"));

    assert!(store.list("chat_history/").await.unwrap().is_empty());
}

#[tokio::test]
async fn list_matches_partial_names_at_root() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());

    store.put("konselai_current_user", b"{}".to_vec()).await.unwrap();
    store.put("konselai_selected_counselor", b"{}".to_vec()).await.unwrap();
    store.put("srq29_results", b"[]".to_vec()).await.unwrap();

    let keys = store.list("konselai_").await.unwrap();
    assert_eq!(keys, vec!["konselai_current_user", "konselai_selected_counselor"]);
}

#[tokio::test]
async fn list_rejects_escaping_prefix() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());

    let err = store.list("../elsewhere/").await.unwrap_err();
    assert!(matches!(err, StorageError::InvalidKey { .. }));
}
