//! konsel-instruments
//!
//! Self-report screening instruments. Pure data and pure scoring, no I/O.
//! Defines each instrument's questions, score bands, and how a finished
//! response becomes a stored [`ScreeningResult`].

pub mod error;
pub mod instruments;
pub mod response;
pub mod scoring;

use std::collections::BTreeMap;

use konsel_core::models::screening::ScreeningResult;
use uuid::Uuid;

use error::InstrumentError;
use response::QuestionnaireResponse;
use scoring::{BandTable, Interpretation, Item, ScreeningScore};

/// Trait implemented by each screening instrument. Every instrument is a
/// yes/no checklist scored by counting "yes" answers.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "srq29").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "SRQ-29").
    fn name(&self) -> &str;

    /// The questions, in display order.
    fn items(&self) -> &[Item];

    /// Score bands.
    fn bands(&self) -> &BandTable;

    fn item_count(&self) -> usize {
        self.items().len()
    }

    /// An empty response sized for this instrument.
    fn new_response(&self) -> QuestionnaireResponse {
        QuestionnaireResponse::new(self.item_count())
    }

    /// Map a score to its tier and advisory message.
    fn interpret(&self, score: u32) -> Interpretation {
        let band = self.bands().band_for(score);
        Interpretation {
            tier: band.tier,
            level: band.level.clone(),
            message: band.message.clone(),
        }
    }

    /// Score a raw answer map. Every question index must be present and no
    /// index may fall outside the instrument.
    fn score_answers(&self, answers: &BTreeMap<usize, bool>) -> Result<ScreeningScore, InstrumentError> {
        let item_count = self.item_count();
        if let Some(&index) = answers.keys().find(|&&i| i >= item_count) {
            return Err(InstrumentError::QuestionOutOfRange { index, item_count });
        }
        if answers.len() < item_count {
            return Err(InstrumentError::IncompleteResponse {
                answered: answers.len(),
                required: item_count,
            });
        }

        let score = answers.values().filter(|&&yes| yes).count() as u32;
        Ok(ScreeningScore {
            score,
            tier: self.bands().band_for(score).tier,
        })
    }

    /// Score a complete response.
    fn score(&self, response: &QuestionnaireResponse) -> Result<ScreeningScore, InstrumentError> {
        self.score_answers(response.answers())
    }
}

/// Turn a complete response into an immutable result record.
pub fn finalize(
    instrument: &dyn Instrument,
    response: &QuestionnaireResponse,
    completed_at: jiff::Timestamp,
) -> Result<ScreeningResult, InstrumentError> {
    let scored = instrument.score(response)?;
    tracing::info!(
        instrument = instrument.id(),
        score = scored.score,
        tier = ?scored.tier,
        "screening completed"
    );

    Ok(ScreeningResult {
        id: Uuid::new_v4(),
        instrument_id: instrument.id().to_string(),
        score: scored.score,
        tier: scored.tier,
        total_questions: instrument.item_count() as u32,
        answers: response.answers().clone(),
        completed_at,
    })
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![Box::new(instruments::srq29::Srq29)]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Result<Box<dyn Instrument>, InstrumentError> {
    all_instruments()
        .into_iter()
        .find(|i| i.id() == id)
        .ok_or_else(|| InstrumentError::UnknownInstrument(id.to_string()))
}
