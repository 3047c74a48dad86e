use serde::{Serialize, de::DeserializeOwned};

use crate::error::StorageError;
use crate::store::KeyValueStore;

/// Load and deserialize a JSON record. Malformed JSON or a shape mismatch is
/// reported as [`StorageError::Serialization`].
pub async fn load_state<T: DeserializeOwned, S: KeyValueStore>(
    store: &S,
    key: &str,
) -> Result<T, StorageError> {
    let body = store.get(key).await?;
    let value: T = serde_json::from_slice(&body)?;
    Ok(value)
}

/// Like [`load_state`], but a missing key yields `None`.
pub async fn load_state_opt<T: DeserializeOwned, S: KeyValueStore>(
    store: &S,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match load_state(store, key).await {
        Ok(value) => Ok(Some(value)),
        Err(StorageError::NotFound { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Serialize and save a JSON record.
pub async fn save_state<T: Serialize, S: KeyValueStore>(
    store: &S,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let body = serde_json::to_vec_pretty(value)?;
    store.put(key, body).await
}
