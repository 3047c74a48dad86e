//! Crisis-phrase detection.
//!
//! A plain case-insensitive substring scan over a fixed phrase list. No
//! tokenizing or stemming: "sakit hatinya" matches "sakit hati", and so does
//! any longer word that happens to contain a phrase.

use serde::Serialize;

/// Self-harm related phrases that trigger the crisis flow.
pub const CRISIS_KEYWORDS: [&str; 6] = [
    "bunuh diri",
    "mengakhiri hidup",
    "tidak ingin hidup",
    "sakit hati",
    "menyakiti diri",
    "putus asa",
];

/// Whether `text` contains any crisis phrase.
pub fn contains_crisis_signal(text: &str) -> bool {
    matched_keyword(text).is_some()
}

/// The first crisis phrase found in `text`, if any.
pub fn matched_keyword(text: &str) -> Option<&'static str> {
    let lower = text.to_lowercase();
    CRISIS_KEYWORDS.into_iter().find(|k| lower.contains(*k))
}

/// A phone line offered when a crisis is detected or a screening comes back
/// high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HelpLine {
    pub name: &'static str,
    pub number: &'static str,
}

pub const HELP_LINES: [HelpLine; 5] = [
    HelpLine {
        name: "Hotline Kesehatan Mental",
        number: "119",
    },
    HelpLine {
        name: "SEJIWA",
        number: "119 ext 8",
    },
    HelpLine {
        name: "SEJIWA (telepon)",
        number: "021-7256526",
    },
    HelpLine {
        name: "Halo Kemkes",
        number: "1500-567",
    },
    HelpLine {
        name: "LSM Jangan Bunuh Diri",
        number: "021-9696-9293",
    },
];
