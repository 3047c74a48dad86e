//! Typed access to the app's records.

use konsel_core::models::activity::ActivityLog;
use konsel_core::models::chat_history::ChatHistory;
use konsel_core::models::counselor::Counselor;
use konsel_core::models::journal::JournalEntry;
use konsel_core::models::screening::ScreeningResult;
use konsel_core::models::user::UserAccount;
use konsel_core::store_keys;
use uuid::Uuid;

use crate::error::StorageError;
use crate::state::{load_state_opt, save_state};
use crate::store::KeyValueStore;

pub struct Repository<S> {
    store: S,
}

impl<S: KeyValueStore> Repository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn current_user(&self) -> Result<Option<UserAccount>, StorageError> {
        load_state_opt(&self.store, store_keys::CURRENT_USER).await
    }

    pub async fn set_current_user(&self, user: &UserAccount) -> Result<(), StorageError> {
        save_state(&self.store, store_keys::CURRENT_USER, user).await
    }

    pub async fn clear_current_user(&self) -> Result<(), StorageError> {
        self.store.delete(store_keys::CURRENT_USER).await
    }

    pub async fn selected_counselor(&self) -> Result<Option<Counselor>, StorageError> {
        load_state_opt(&self.store, store_keys::SELECTED_COUNSELOR).await
    }

    pub async fn set_selected_counselor(&self, counselor: &Counselor) -> Result<(), StorageError> {
        save_state(&self.store, store_keys::SELECTED_COUNSELOR, counselor).await
    }

    /// All screening results, oldest first.
    pub async fn screening_results(&self) -> Result<Vec<ScreeningResult>, StorageError> {
        let results: Option<Vec<ScreeningResult>> =
            load_state_opt(&self.store, store_keys::SCREENING_RESULTS).await?;
        Ok(results.unwrap_or_default())
    }

    pub async fn append_screening_result(&self, result: &ScreeningResult) -> Result<(), StorageError> {
        let mut results = self.screening_results().await?;
        results.push(result.clone());
        save_state(&self.store, store_keys::SCREENING_RESULTS, &results).await?;
        tracing::info!(id = %result.id, total = results.len(), "saved screening result");
        Ok(())
    }

    /// Journal entries, newest first.
    pub async fn journal_entries(&self) -> Result<Vec<JournalEntry>, StorageError> {
        let mut entries: Vec<JournalEntry> = load_state_opt(&self.store, store_keys::JOURNAL_ENTRIES)
            .await?
            .unwrap_or_default();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(entries)
    }

    pub async fn add_journal_entry(&self, entry: &JournalEntry) -> Result<(), StorageError> {
        let mut entries = self.journal_entries().await?;
        entries.insert(0, entry.clone());
        save_state(&self.store, store_keys::JOURNAL_ENTRIES, &entries).await
    }

    pub async fn save_chat_history(&self, history: &ChatHistory) -> Result<(), StorageError> {
        save_state(&self.store, &store_keys::chat_history(history.id), history).await
    }

    pub async fn chat_history(&self, id: Uuid) -> Result<Option<ChatHistory>, StorageError> {
        load_state_opt(&self.store, &store_keys::chat_history(id)).await
    }

    /// Every saved transcript, most recently updated first.
    pub async fn chat_histories(&self) -> Result<Vec<ChatHistory>, StorageError> {
        let keys = self.store.list(store_keys::CHAT_HISTORY_PREFIX).await?;
        let mut histories = Vec::with_capacity(keys.len());
        for key in keys {
            // Deleted between list and load.
            if let Some(history) = load_state_opt::<ChatHistory, _>(&self.store, &key).await? {
                histories.push(history);
            }
        }
        histories.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(histories)
    }

    pub async fn activity_log(&self) -> Result<ActivityLog, StorageError> {
        let log: Option<ActivityLog> = load_state_opt(&self.store, store_keys::ACTIVITY_LOG).await?;
        Ok(log.unwrap_or_default())
    }

    /// Apply `f` to the stored activity log and save it.
    pub async fn update_activity<F>(&self, f: F) -> Result<ActivityLog, StorageError>
    where
        F: FnOnce(&mut ActivityLog) + Send,
    {
        let mut log = self.activity_log().await?;
        f(&mut log);
        save_state(&self.store, store_keys::ACTIVITY_LOG, &log).await?;
        Ok(log)
    }
}
