use jiff::Timestamp;
use konsel_core::error::CoreError;
use konsel_core::models::counselor::{self, Availability};
use konsel_core::models::journal::{JournalEntry, Mood, average_mood};
use konsel_core::models::user::UserAccount;

fn now() -> Timestamp {
    "2026-10-18T10:00:00Z".parse().unwrap()
}

#[test]
fn register_trims_and_stamps() {
    let user = UserAccount::register("  Rina ", "rina@example.com", now()).unwrap();
    assert_eq!(user.name, "Rina");
    assert_eq!(user.registered_at, now());
}

#[test]
fn register_rejects_blank_fields() {
    let err = UserAccount::register("", "rina@example.com", now()).unwrap_err();
    assert!(matches!(err, CoreError::MissingField(f) if f == "name"));

    let err = UserAccount::register("Rina", "  ", now()).unwrap_err();
    assert!(matches!(err, CoreError::MissingField(f) if f == "email"));
}

#[test]
fn user_round_trips_through_json() {
    let user = UserAccount::register("Rina", "rina@example.com", now()).unwrap();
    let json = serde_json::to_string(&user).unwrap();
    let back: UserAccount = serde_json::from_str(&json).unwrap();
    assert_eq!(back, user);
}

#[test]
fn mood_bounds() {
    assert!(Mood::new(0).is_err());
    assert!(Mood::new(6).is_err());
    assert_eq!(Mood::new(4).unwrap().label(), "Senang");
    assert_eq!(Mood::default().value(), 3);
}

#[test]
fn mood_out_of_range_fails_to_deserialize() {
    let json = r#"{"id":"6f1c1f3e-8d5e-4a53-9f3b-2f1d7c6f0a11","mood":9,"note":"x","created_at":"2026-10-18T10:00:00Z"}"#;
    assert!(serde_json::from_str::<JournalEntry>(json).is_err());
}

#[test]
fn journal_entry_rejects_blank_note() {
    let err = JournalEntry::new(Mood::default(), "   ", now()).unwrap_err();
    assert!(matches!(err, CoreError::MissingField(_)));
}

#[test]
fn average_mood_of_entries() {
    assert_eq!(average_mood(&[]), None);

    let entries = vec![
        JournalEntry::new(Mood::new(4).unwrap(), "Selesai tugas tepat waktu.", now()).unwrap(),
        JournalEntry::new(Mood::new(2).unwrap(), "Hasil ujian kurang.", now()).unwrap(),
        JournalEntry::new(Mood::new(3).unwrap(), "Biasa.", now()).unwrap(),
    ];
    assert_eq!(average_mood(&entries), Some(3.0));
}

#[test]
fn roster_lookup() {
    assert_eq!(counselor::roster().len(), 4);
    let maya = counselor::find("3").unwrap();
    assert_eq!(maya.availability, Availability::Offline);
    assert!(!maya.is_online());
    assert!(counselor::find("99").is_none());
}
