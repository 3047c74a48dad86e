use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Coarse risk bucket derived from a screening score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

/// A finalized questionnaire result. Immutable once written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScreeningResult {
    pub id: Uuid,
    pub instrument_id: String,
    pub score: u32,
    pub tier: RiskTier,
    pub total_questions: u32,
    /// Question index → "yes".
    pub answers: BTreeMap<usize, bool>,
    pub completed_at: jiff::Timestamp,
}
