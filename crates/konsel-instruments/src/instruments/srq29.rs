use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::error::InstrumentError;
use crate::scoring::{Band, BandTable, Item, RiskTier, ScreeningScore};
use crate::Instrument;

/// SRQ-29: WHO Self-Reporting Questionnaire, 29-item version.
/// Yes/no items about the past 30 days. Score is the number of "yes"
/// answers (0–29). 0–3 low, 4–7 medium, 8+ high.
pub struct Srq29;

pub const ITEM_COUNT: usize = 29;

const QUESTIONS: [&str; ITEM_COUNT] = [
    "Apakah Anda sering merasa sakit kepala?",
    "Apakah nafsu makan Anda berkurang?",
    "Apakah tidur Anda tidak nyenyak?",
    "Apakah Anda mudah takut?",
    "Apakah tangan Anda gemetar?",
    "Apakah Anda merasa tegang, cemas atau khawatir?",
    "Apakah pencernaan Anda terganggu?",
    "Apakah Anda sulit berpikir jernih?",
    "Apakah Anda merasa tidak bahagia?",
    "Apakah Anda lebih sering menangis?",
    "Apakah Anda sulit menikmati kegiatan sehari-hari?",
    "Apakah Anda sulit mengambil keputusan?",
    "Apakah kegiatan sehari-hari Anda terganggu?",
    "Apakah Anda tidak mampu berperan dalam kehidupan?",
    "Apakah Anda kehilangan minat terhadap berbagai hal?",
    "Apakah Anda merasa tidak berharga?",
    "Apakah Anda mempunyai pikiran untuk mengakhiri hidup?",
    "Apakah Anda merasa lelah sepanjang waktu?",
    "Apakah Anda merasa tidak enak di perut?",
    "Apakah Anda mudah lelah?",
    "Apakah ada orang yang mencoba melukai atau menyakiti Anda?",
    "Apakah Anda orang yang jauh lebih penting daripada yang dipikirkan orang lain?",
    "Apakah Anda pernah mengalami hal-hal aneh yang tidak dapat dijelaskan?",
    "Apakah ada orang lain yang dapat mengetahui pikiran Anda?",
    "Apakah ada suara-suara tanpa sumber yang jelas?",
    "Apakah Anda pernah mengalami kejang-kejang?",
    "Apakah ada sesuatu yang mengganggu pikiran Anda?",
    "Apakah Anda merasa malu karena salah satu dari masalah di atas?",
    "Apakah masalah-masalah tersebut mengganggu pekerjaan Anda?",
];

pub const MEDIUM_MIN_SCORE: u32 = 4;
pub const HIGH_MIN_SCORE: u32 = 8;

impl Instrument for Srq29 {
    fn id(&self) -> &str {
        "srq29"
    }

    fn name(&self) -> &str {
        "SRQ-29"
    }

    fn items(&self) -> &[Item] {
        static ITEMS: LazyLock<Vec<Item>> = LazyLock::new(|| {
            QUESTIONS
                .iter()
                .enumerate()
                .map(|(index, text)| Item {
                    index,
                    text: text.to_string(),
                })
                .collect()
        });
        &ITEMS
    }

    fn bands(&self) -> &BandTable {
        static BANDS: LazyLock<BandTable> = LazyLock::new(|| {
            BandTable::new(
                band(
                    RiskTier::Low,
                    0,
                    "Rendah",
                    "Hasil Anda menunjukkan kondisi kesehatan mental yang baik. Tetap jaga \
                     kesehatan mental dengan pola hidup sehat dan aktivitas positif.",
                ),
                vec![
                    band(
                        RiskTier::Medium,
                        MEDIUM_MIN_SCORE,
                        "Sedang",
                        "Hasil Anda menunjukkan beberapa gejala yang perlu diperhatikan. \
                         Disarankan untuk melakukan konseling atau pemeriksaan lebih lanjut.",
                    ),
                    band(
                        RiskTier::High,
                        HIGH_MIN_SCORE,
                        "Tinggi",
                        "Hasil Anda menunjukkan kemungkinan adanya masalah kesehatan mental yang \
                         perlu perhatian. Sangat disarankan untuk berkonsultasi dengan \
                         profesional kesehatan mental.",
                    ),
                ],
            )
        });
        &BANDS
    }
}

/// Tier for an SRQ-29 score.
pub fn tier(score: u32) -> RiskTier {
    Srq29.bands().band_for(score).tier
}

/// Score a complete answer map keyed 0..29.
pub fn score(answers: &BTreeMap<usize, bool>) -> Result<ScreeningScore, InstrumentError> {
    Srq29.score_answers(answers)
}

/// Percentage of the 29 questions answered. Valid on partial maps.
pub fn progress(answers: &BTreeMap<usize, bool>) -> f64 {
    let answered = answers.keys().filter(|&&i| i < ITEM_COUNT).count();
    crate::response::progress(answered, ITEM_COUNT)
}

fn band(tier: RiskTier, min_score: u32, level: &str, message: &str) -> Band {
    Band {
        tier,
        min_score,
        level: level.to_string(),
        message: message.to_string(),
    }
}
