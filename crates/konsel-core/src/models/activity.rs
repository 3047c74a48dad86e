use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Engagement counters not derivable from other records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ActivityLog {
    /// Distinct article IDs opened.
    pub articles_read: BTreeSet<u32>,
    pub relaxation_sessions: u32,
    /// Calendar days the app was used.
    #[ts(type = "Array<string>")]
    pub active_days: BTreeSet<jiff::civil::Date>,
}
