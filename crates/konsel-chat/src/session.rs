//! Chat session driver.

use konsel_audit::AuditEvent;
use konsel_core::models::chat_history::{ChatHistory, ChatMessage, ChatRole};
use konsel_core::models::counselor::Counselor;
use konsel_core::trial::TrialStatus;
use uuid::Uuid;

use crate::crisis;
use crate::error::ChatError;
use crate::responses;

/// The counselor's answer to one user message.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub message: ChatMessage,
    /// Set when the user message contained a crisis phrase. The caller should
    /// surface the help lines in [`crisis::HELP_LINES`].
    pub crisis: bool,
}

/// One conversation. Opens with the scripted greeting; a counselor can be
/// brought in while the free trial is active.
#[derive(Debug, Clone)]
pub struct ChatSession {
    history: ChatHistory,
    counselor: Option<Counselor>,
    crisis_alert: bool,
    turns: usize,
}

impl ChatSession {
    pub fn new(now: jiff::Timestamp) -> Self {
        let history = ChatHistory {
            id: Uuid::new_v4(),
            counselor_id: None,
            messages: vec![ChatMessage {
                role: ChatRole::Counselor,
                text: responses::GREETING.to_string(),
                timestamp: now,
            }],
            created_at: now,
            updated_at: now,
        };
        Self {
            history,
            counselor: None,
            crisis_alert: false,
            turns: 0,
        }
    }

    /// Continue a stored conversation. The counselor, if any, is looked up by
    /// the caller since the transcript only keeps its ID, and is held to the
    /// same trial and availability checks as [`Self::start_counseling`].
    pub fn resume(
        mut history: ChatHistory,
        counselor: Option<Counselor>,
        trial: TrialStatus,
    ) -> Result<Self, ChatError> {
        if let Some(c) = &counselor {
            admit(c, trial)?;
            history.counselor_id = Some(c.id.clone());
        }
        let turns = history
            .messages
            .iter()
            .filter(|m| m.role == ChatRole::User)
            .count();
        tracing::debug!(id = %history.id, turns, "chat resumed");
        Ok(Self {
            history,
            counselor,
            crisis_alert: false,
            turns,
        })
    }

    /// Bring `counselor` into the conversation. Requires an active trial and
    /// an online counselor; returns the counselor's welcome message.
    pub fn start_counseling(
        &mut self,
        counselor: Counselor,
        trial: TrialStatus,
        now: jiff::Timestamp,
    ) -> Result<ChatMessage, ChatError> {
        if let Some(current) = &self.counselor {
            return Err(ChatError::AlreadyStarted(current.name.clone()));
        }
        admit(&counselor, trial)?;

        tracing::info!(counselor = %counselor.id, days_left = trial.days_left, "counseling started");
        let text = responses::counselor_welcome(&counselor);
        self.history.counselor_id = Some(counselor.id.clone());
        self.counselor = Some(counselor);
        Ok(self.push(ChatRole::Counselor, text, now))
    }

    /// Send a user message and get the reply. Blank input is ignored.
    pub fn send(&mut self, text: &str, now: jiff::Timestamp) -> Option<Reply> {
        if text.trim().is_empty() {
            return None;
        }
        self.push(ChatRole::User, text.to_string(), now);

        let reply = match crisis::matched_keyword(text) {
            Some(keyword) => {
                self.crisis_alert = true;
                AuditEvent::new("crisis_detected", "chat", self.history.id.to_string())
                    .with_details(serde_json::json!({ "keyword": keyword }))
                    .urgent()
                    .emit();
                Reply {
                    message: self.push(ChatRole::Counselor, responses::CRISIS_REPLY.to_string(), now),
                    crisis: true,
                }
            }
            None => {
                let text = responses::reply_for(self.turns, self.counselor.as_ref());
                Reply {
                    message: self.push(ChatRole::Counselor, text, now),
                    crisis: false,
                }
            }
        };
        self.turns += 1;
        Some(reply)
    }

    /// Whether a crisis alert is showing.
    pub fn crisis_alert(&self) -> bool {
        self.crisis_alert
    }

    /// Dismiss the crisis alert and continue chatting.
    pub fn dismiss_crisis_alert(&mut self) {
        self.crisis_alert = false;
    }

    pub fn counselor(&self) -> Option<&Counselor> {
        self.counselor.as_ref()
    }

    pub fn history(&self) -> &ChatHistory {
        &self.history
    }

    pub fn into_history(self) -> ChatHistory {
        self.history
    }

    fn push(&mut self, role: ChatRole, text: String, now: jiff::Timestamp) -> ChatMessage {
        let message = ChatMessage {
            role,
            text,
            timestamp: now,
        };
        self.history.messages.push(message.clone());
        self.history.updated_at = now;
        message
    }
}

fn admit(counselor: &Counselor, trial: TrialStatus) -> Result<(), ChatError> {
    if !trial.is_active {
        return Err(ChatError::TrialExpired);
    }
    if !counselor.is_online() {
        return Err(ChatError::CounselorOffline(counselor.name.clone()));
    }
    Ok(())
}
