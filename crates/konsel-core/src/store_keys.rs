//! Storage key conventions.
//!
//! Pure string functions. These define the canonical layout of records in
//! whatever key-value store backs the app. Names follow the local-storage
//! keys of the web client.

use uuid::Uuid;

pub const CURRENT_USER: &str = "konselai_current_user";

pub const SELECTED_COUNSELOR: &str = "konselai_selected_counselor";

pub const SCREENING_RESULTS: &str = "srq29_results";

pub const JOURNAL_ENTRIES: &str = "journal_entries";

pub const ACTIVITY_LOG: &str = "activity_log";

pub const CHAT_HISTORY_PREFIX: &str = "chat_history/";

pub fn chat_history(id: Uuid) -> String {
    format!("{CHAT_HISTORY_PREFIX}{id}")
}
