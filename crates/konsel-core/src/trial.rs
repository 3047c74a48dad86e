//! Free-trial window.
//!
//! A new account gets [`TRIAL_WINDOW_DAYS`] days of free counseling. Status is
//! derived from the stored registration timestamp every time it is queried;
//! nothing here is persisted.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Length of the free-trial window in days.
pub const TRIAL_WINDOW_DAYS: u32 = 7;

const NANOS_PER_DAY: i128 = 86_400 * 1_000_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TrialStatus {
    pub is_active: bool,
    /// Always within `0..=TRIAL_WINDOW_DAYS`.
    pub days_left: u32,
}

/// Evaluate the trial window for an account registered at `registered_at`.
///
/// Elapsed time is counted in whole days, rounding up: one second past
/// registration already counts as one elapsed day. A `now` earlier than
/// `registered_at` (clock skew) counts as zero elapsed days.
pub fn evaluate_trial(registered_at: jiff::Timestamp, now: jiff::Timestamp) -> TrialStatus {
    let days_elapsed = elapsed_days(registered_at, now);
    let days_elapsed = u32::try_from(days_elapsed).unwrap_or(u32::MAX);
    let days_left = TRIAL_WINDOW_DAYS.saturating_sub(days_elapsed);

    TrialStatus {
        is_active: days_left > 0,
        days_left,
    }
}

/// Like [`evaluate_trial`], but takes the registration time as stored text
/// (RFC 3339, e.g. `2026-10-01T08:30:00Z`).
pub fn evaluate_trial_str(registered_at: &str, now: jiff::Timestamp) -> Result<TrialStatus, CoreError> {
    let registered_at = registered_at.trim();
    if registered_at.is_empty() {
        return Err(CoreError::InvalidInput(
            "registration timestamp is empty".to_string(),
        ));
    }
    let registered_at: jiff::Timestamp = registered_at.parse().map_err(|e| {
        CoreError::InvalidInput(format!(
            "malformed registration timestamp '{registered_at}': {e}"
        ))
    })?;
    Ok(evaluate_trial(registered_at, now))
}

/// Human-readable remaining-time label.
pub fn format_remaining(days_left: u32) -> String {
    match days_left {
        0 => "Hari terakhir".to_string(),
        1 => "1 hari tersisa".to_string(),
        n => format!("{n} hari tersisa"),
    }
}

fn elapsed_days(registered_at: jiff::Timestamp, now: jiff::Timestamp) -> i128 {
    let nanos = now.duration_since(registered_at).as_nanos();
    if nanos <= 0 {
        return 0;
    }
    (nanos + NANOS_PER_DAY - 1) / NANOS_PER_DAY
}
