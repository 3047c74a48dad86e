//! Canned counselor lines.

use konsel_core::models::counselor::Counselor;

pub const GREETING: &str = "Halo! Aku di sini untuk membantu. Apa yang kamu rasakan hari ini? 😊";

pub const CRISIS_REPLY: &str = "Aku khawatir dengan apa yang kamu katakan. Sepertinya kamu \
     membutuhkan bantuan segera. Mari hubungi profesional yang bisa membantumu lebih baik.";

pub const CANNED_REPLIES: [&str; 8] = [
    "Sepertinya kamu sedang stres. Ceritakan lebih banyak tentang apa yang kamu rasakan!",
    "Itu pasti sulit untuk kamu. Apa yang bisa aku bantu untuk membuatmu merasa lebih baik?",
    "Kamu hebat karena mau berbagi perasaanmu! Mau coba latihan pernapasan bersama?",
    "Terima kasih sudah mempercayaiku. Mari kita cari cara untuk mengatasi perasaan ini.",
    "Perasaan seperti itu wajar kok. Yang penting kamu tidak sendirian. Aku di sini untukmu.",
    "Coba ceritakan lebih detail tentang situasi yang membuatmu merasa seperti ini?",
    "Kamu sudah sangat berani dengan mengakui perasaanmu. Itu langkah pertama yang bagus!",
    "Mari kita fokus pada hal-hal kecil yang bisa kita kontrol hari ini. Apa satu hal yang bisa \
     membuatmu sedikit lebih baik?",
];

/// The canned reply for the `turn`-th user message (zero-based). Cycles
/// through [`CANNED_REPLIES`].
pub fn canned_reply(turn: usize) -> &'static str {
    CANNED_REPLIES[turn % CANNED_REPLIES.len()]
}

/// Reply to a normal (non-crisis) message, prefixed with the counselor's
/// introduction when one is selected.
pub fn reply_for(turn: usize, counselor: Option<&Counselor>) -> String {
    let base = canned_reply(turn);
    match counselor {
        Some(c) => format!(
            "Terima kasih sudah berbagi. Sebagai konselor spesialis {}, saya memahami perasaan \
             Anda. {base}",
            c.specialization
        ),
        None => base.to_string(),
    }
}

pub fn counselor_welcome(counselor: &Counselor) -> String {
    format!(
        "Halo! Saya {}, konselor spesialis {}. Saya siap membantu Anda hari ini. Bagaimana \
         perasaan Anda saat ini?",
        counselor.name, counselor.specialization
    )
}
