pub mod achievements;
pub mod activity;
pub mod chat_history;
pub mod content;
pub mod counselor;
pub mod journal;
pub mod package;
pub mod screening;
pub mod user;
