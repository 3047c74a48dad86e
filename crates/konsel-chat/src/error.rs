use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChatError {
    #[error("free trial has ended; a counseling package is required")]
    TrialExpired,

    #[error("counselor {0} is offline")]
    CounselorOffline(String),

    #[error("a counseling session is already in progress with {0}")]
    AlreadyStarted(String),
}
