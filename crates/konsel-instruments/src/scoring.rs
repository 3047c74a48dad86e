use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub use konsel_core::models::screening::RiskTier;

/// A single yes/no question.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    pub index: usize,
    pub text: String,
}

/// A score band. A score falls in the highest band whose `min_score` it
/// reaches.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Band {
    pub tier: RiskTier,
    pub min_score: u32,
    /// Display label for the tier (e.g. "Tinggi").
    pub level: String,
    /// Advisory text shown with the result.
    pub message: String,
}

/// An instrument's score bands. Always has a base band starting at 0, so
/// every score maps to exactly one band.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct BandTable {
    base: Band,
    higher: Vec<Band>,
}

impl BandTable {
    /// `base` covers every score below the lowest of `higher`; its
    /// `min_score` is forced to 0.
    pub fn new(mut base: Band, mut higher: Vec<Band>) -> Self {
        base.min_score = 0;
        higher.sort_by_key(|b| b.min_score);
        Self { base, higher }
    }

    /// The band `score` falls in.
    pub fn band_for(&self, score: u32) -> &Band {
        self.higher
            .iter()
            .rev()
            .find(|b| score >= b.min_score)
            .unwrap_or(&self.base)
    }

    /// Bands in ascending order of `min_score`.
    pub fn iter(&self) -> impl Iterator<Item = &Band> {
        std::iter::once(&self.base).chain(&self.higher)
    }
}

/// Score plus its tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScreeningScore {
    pub score: u32,
    pub tier: RiskTier,
}

/// What a score means: the tier and its fixed advisory text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Interpretation {
    pub tier: RiskTier,
    pub level: String,
    pub message: String,
}
