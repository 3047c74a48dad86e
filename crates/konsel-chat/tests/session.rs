use jiff::Timestamp;
use konsel_chat::error::ChatError;
use konsel_chat::responses::{CANNED_REPLIES, CRISIS_REPLY, GREETING};
use konsel_chat::session::ChatSession;
use konsel_core::models::chat_history::ChatRole;
use konsel_core::models::counselor;
use konsel_core::trial::TrialStatus;

fn now() -> Timestamp {
    "2026-10-18T10:00:00Z".parse().unwrap()
}

const ACTIVE: TrialStatus = TrialStatus {
    is_active: true,
    days_left: 5,
};

const EXPIRED: TrialStatus = TrialStatus {
    is_active: false,
    days_left: 0,
};

#[test]
fn opens_with_greeting() {
    let session = ChatSession::new(now());
    let messages = &session.history().messages;
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].role, ChatRole::Counselor);
    assert_eq!(messages[0].text, GREETING);
}

#[test]
fn blank_input_is_ignored() {
    let mut session = ChatSession::new(now());
    assert!(session.send("   ", now()).is_none());
    assert_eq!(session.history().messages.len(), 1);
}

#[test]
fn normal_message_gets_canned_reply() {
    let mut session = ChatSession::new(now());
    let reply = session.send("Aku capek dengan tugas sekolah", now()).unwrap();
    assert!(!reply.crisis);
    assert_eq!(reply.message.text, CANNED_REPLIES[0]);
    assert_eq!(session.history().messages.len(), 3);
    assert!(!session.crisis_alert());

    let reply = session.send("Iya", now()).unwrap();
    assert_eq!(reply.message.text, CANNED_REPLIES[1]);
}

#[test]
fn crisis_message_raises_alert() {
    let mut session = ChatSession::new(now());
    let reply = session.send("Aku merasa putus asa", now()).unwrap();
    assert!(reply.crisis);
    assert_eq!(reply.message.text, CRISIS_REPLY);
    assert!(session.crisis_alert());

    session.dismiss_crisis_alert();
    assert!(!session.crisis_alert());
}

#[test]
fn counseling_requires_active_trial() {
    let mut session = ChatSession::new(now());
    let sarah = counselor::find("1").unwrap();
    let err = session.start_counseling(sarah, EXPIRED, now()).unwrap_err();
    assert_eq!(err, ChatError::TrialExpired);
    assert!(session.counselor().is_none());
}

#[test]
fn offline_counselor_cannot_be_started() {
    let mut session = ChatSession::new(now());
    let maya = counselor::find("3").unwrap();
    let err = session.start_counseling(maya, ACTIVE, now()).unwrap_err();
    assert!(matches!(err, ChatError::CounselorOffline(_)));
}

#[test]
fn counselor_welcomes_and_prefixes_replies() {
    let mut session = ChatSession::new(now());
    let sarah = counselor::find("1").unwrap();
    let welcome = session.start_counseling(sarah, ACTIVE, now()).unwrap();
    assert!(welcome.text.contains("Dr. Sarah Wijaya"));
    assert_eq!(session.history().counselor_id.as_deref(), Some("1"));

    let reply = session.send("Aku cemas terus", now()).unwrap();
    assert!(reply.message.text.contains("Kecemasan & Depresi"));
    assert!(reply.message.text.ends_with(CANNED_REPLIES[0]));

    let andi = counselor::find("2").unwrap();
    let err = session.start_counseling(andi, ACTIVE, now()).unwrap_err();
    assert!(matches!(err, ChatError::AlreadyStarted(_)));
}

#[test]
fn resume_continues_reply_rotation() {
    let mut session = ChatSession::new(now());
    session.send("satu", now()).unwrap();
    session.send("dua", now()).unwrap();

    let mut resumed = ChatSession::resume(session.into_history(), None, EXPIRED).unwrap();
    let reply = resumed.send("tiga", now()).unwrap();
    assert_eq!(reply.message.text, CANNED_REPLIES[2]);
}

#[test]
fn reply_is_the_last_transcript_message() {
    let mut session = ChatSession::new(now());
    let reply = session.send("Aku sedih", now()).unwrap();
    assert_eq!(session.history().messages.last(), Some(&reply.message));

    let reply = session.send("sakit hati sekali", now()).unwrap();
    assert_eq!(session.history().messages.last(), Some(&reply.message));
    assert_eq!(session.history().updated_at, now());
}

#[test]
fn resume_with_counselor_keeps_counselor() {
    let mut session = ChatSession::new(now());
    session
        .start_counseling(counselor::find("1").unwrap(), ACTIVE, now())
        .unwrap();
    session.send("halo", now()).unwrap();

    let resumed =
        ChatSession::resume(session.into_history(), counselor::find("1"), ACTIVE).unwrap();
    assert_eq!(resumed.counselor().map(|c| c.id.as_str()), Some("1"));
    assert_eq!(resumed.history().counselor_id.as_deref(), Some("1"));
}

#[test]
fn resume_with_counselor_after_trial_fails() {
    let mut session = ChatSession::new(now());
    session
        .start_counseling(counselor::find("1").unwrap(), ACTIVE, now())
        .unwrap();

    let err = ChatSession::resume(session.into_history(), counselor::find("1"), EXPIRED)
        .unwrap_err();
    assert_eq!(err, ChatError::TrialExpired);
}

#[test]
fn resume_with_offline_counselor_fails() {
    let history = ChatSession::new(now()).into_history();
    let err = ChatSession::resume(history, counselor::find("3"), ACTIVE).unwrap_err();
    assert!(matches!(err, ChatError::CounselorOffline(_)));
}
