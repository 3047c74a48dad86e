//! konsel-audit
//!
//! Application-level audit events, written to the log through `tracing`.

pub mod events;

pub use events::AuditEvent;
