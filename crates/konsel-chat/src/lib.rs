//! konsel-chat
//!
//! Scripted counseling chat: crisis-phrase detection, canned replies, and a
//! session driver that keeps the transcript. There is no model behind the
//! replies.

pub mod crisis;
pub mod error;
pub mod responses;
pub mod session;
