use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A chat transcript between the user and a counselor (or the scripted
/// assistant when no counselor is selected).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChatHistory {
    pub id: Uuid,
    pub counselor_id: Option<String>,
    pub messages: Vec<ChatMessage>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

/// A single message in a chat transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
    pub timestamp: jiff::Timestamp,
}

/// Who sent a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ChatRole {
    User,
    Counselor,
}
