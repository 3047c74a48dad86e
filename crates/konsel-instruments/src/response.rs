//! In-progress questionnaire answers.
//!
//! A response is built one answer at a time. Answers can be changed but never
//! cleared, so the answered count (and the progress percentage) only grows.

use std::collections::BTreeMap;
use std::ops::Range;

use serde::Serialize;

use crate::error::InstrumentError;

/// Questions shown per page when a questionnaire is paged.
pub const PAGE_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionnaireResponse {
    item_count: usize,
    answers: BTreeMap<usize, bool>,
}

impl QuestionnaireResponse {
    pub fn new(item_count: usize) -> Self {
        Self {
            item_count,
            answers: BTreeMap::new(),
        }
    }

    /// Record (or overwrite) the answer to question `index`.
    pub fn answer(&mut self, index: usize, yes: bool) -> Result<(), InstrumentError> {
        if index >= self.item_count {
            return Err(InstrumentError::QuestionOutOfRange {
                index,
                item_count: self.item_count,
            });
        }
        self.answers.insert(index, yes);
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        self.answers.get(&index).copied()
    }

    pub fn answers(&self) -> &BTreeMap<usize, bool> {
        &self.answers
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn answered(&self) -> usize {
        self.answers.len()
    }

    pub fn is_complete(&self) -> bool {
        self.answered() == self.item_count
    }

    /// Number of "yes" answers so far.
    pub fn yes_count(&self) -> u32 {
        self.answers.values().filter(|&&yes| yes).count() as u32
    }

    /// Percentage of questions answered, 0.0–100.0.
    pub fn progress(&self) -> f64 {
        progress(self.answered(), self.item_count)
    }

    /// Fail with [`InstrumentError::IncompleteResponse`] unless every question
    /// has an answer.
    pub fn ensure_complete(&self) -> Result<(), InstrumentError> {
        if self.is_complete() {
            Ok(())
        } else {
            Err(InstrumentError::IncompleteResponse {
                answered: self.answered(),
                required: self.item_count,
            })
        }
    }

    pub fn page_count(&self) -> usize {
        self.item_count.div_ceil(PAGE_SIZE)
    }

    /// Question indices shown on `page` (zero-based). Empty past the last page.
    pub fn page_items(&self, page: usize) -> Range<usize> {
        let start = page.saturating_mul(PAGE_SIZE).min(self.item_count);
        let end = (start + PAGE_SIZE).min(self.item_count);
        start..end
    }

    /// Whether every question on `page` has an answer. Gates moving to the
    /// next page.
    pub fn page_complete(&self, page: usize) -> bool {
        self.page_items(page).all(|i| self.answers.contains_key(&i))
    }
}

pub(crate) fn progress(answered: usize, item_count: usize) -> f64 {
    if item_count == 0 {
        return 0.0;
    }
    100.0 * answered.min(item_count) as f64 / item_count as f64
}
