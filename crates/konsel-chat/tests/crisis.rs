use konsel_chat::crisis::{CRISIS_KEYWORDS, HELP_LINES, contains_crisis_signal, matched_keyword};

#[test]
fn detects_phrase_in_sentence() {
    assert!(contains_crisis_signal("Saya sangat putus asa hari ini"));
}

#[test]
fn ordinary_text_is_not_flagged() {
    assert!(!contains_crisis_signal("Saya senang hari ini"));
    assert!(!contains_crisis_signal(""));
}

#[test]
fn match_is_case_insensitive() {
    assert!(contains_crisis_signal("Aku ingin BUNUH DIRI"));
    assert_eq!(matched_keyword("Mengakhiri Hidup saja"), Some("mengakhiri hidup"));
}

#[test]
fn every_keyword_triggers() {
    for keyword in CRISIS_KEYWORDS {
        assert!(contains_crisis_signal(&format!("... {keyword} ...")), "{keyword}");
    }
}

#[test]
fn substring_matches_across_word_boundaries() {
    // No tokenizing: a phrase inside a longer word still matches.
    assert!(contains_crisis_signal("dia sakit hatinya"));
    assert!(!contains_crisis_signal("putusasa"));
}

#[test]
fn hotline_119_is_listed_first() {
    assert_eq!(HELP_LINES[0].number, "119");
}
