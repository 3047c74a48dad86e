use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// Self-rated mood on a 1–5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Mood(u8);

impl Mood {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self, CoreError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(CoreError::InvalidMood(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn label(self) -> &'static str {
        match self.0 {
            1 => "Sangat Sedih",
            2 => "Sedih",
            3 => "Biasa Saja",
            4 => "Senang",
            _ => "Sangat Senang",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self.0 {
            1 => "😢",
            2 => "😔",
            3 => "😐",
            4 => "😊",
            _ => "😄",
        }
    }
}

impl Default for Mood {
    fn default() -> Self {
        Self(3)
    }
}

impl TryFrom<u8> for Mood {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Mood> for u8 {
    fn from(mood: Mood) -> Self {
        mood.0
    }
}

/// A mood journal entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct JournalEntry {
    pub id: Uuid,
    #[ts(type = "number")]
    pub mood: Mood,
    pub note: String,
    pub created_at: jiff::Timestamp,
}

impl JournalEntry {
    /// Create an entry. Blank notes are rejected.
    pub fn new(mood: Mood, note: &str, now: jiff::Timestamp) -> Result<Self, CoreError> {
        let note = note.trim();
        if note.is_empty() {
            return Err(CoreError::MissingField("note".to_string()));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            mood,
            note: note.to_string(),
            created_at: now,
        })
    }
}

/// Mean mood across entries, or `None` when there are none.
pub fn average_mood(entries: &[JournalEntry]) -> Option<f64> {
    if entries.is_empty() {
        return None;
    }
    let sum: u32 = entries.iter().map(|e| u32::from(e.mood.value())).sum();
    Some(f64::from(sum) / entries.len() as f64)
}
